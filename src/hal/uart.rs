//! Polled USART transmitter for the debug console
//!
//! TX only and no interrupts: writes spin on UDRE through `nb`.

use crate::config::CPU_FREQ_HZ;

/// UCSRA: data register empty
pub const UDRE: u8 = 1 << 5;
/// UCSRB: transmitter enable
pub const TXEN: u8 = 1 << 3;

/// UBRR value for normal-speed asynchronous mode
pub const fn ubrr(cpu_hz: u32, baud: u32) -> u16 {
    (cpu_hz / (16 * baud) - 1) as u16
}

pub const fn ubrr_for(baud: u32) -> u16 {
    ubrr(CPU_FREQ_HZ, baud)
}

#[cfg(target_arch = "avr")]
pub use self::device::Uart;

#[cfg(target_arch = "avr")]
mod device {
    use super::*;
    use avr_device::atmega8::USART;
    use core::convert::Infallible;
    use embedded_hal::serial;

    pub struct Uart {
        usart: USART,
    }

    impl Uart {
        /// 8N1 at `baud`, transmitter only
        pub fn new(usart: USART, baud: u32) -> Self {
            let divisor = ubrr_for(baud);
            // UBRRH shares its address with UCSRC; its reset value of zero
            // already fits every divisor below 256, and UCSRC resets to 8N1.
            usart.ubrrl.write(|w| unsafe { w.bits(divisor as u8) });
            usart.ucsrb.write(|w| unsafe { w.bits(TXEN) });
            Self { usart }
        }

        fn ready(&self) -> bool {
            self.usart.ucsra.read().bits() & UDRE != 0
        }

        pub fn release(self) -> USART {
            self.usart
        }
    }

    impl serial::Write<u8> for Uart {
        type Error = Infallible;

        fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
            if !self.ready() {
                return Err(nb::Error::WouldBlock);
            }
            self.usart.udr.write(|w| unsafe { w.bits(byte) });
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Infallible> {
            if self.ready() {
                Ok(())
            } else {
                Err(nb::Error::WouldBlock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_for_9600_at_8mhz() {
        assert_eq!(ubrr_for(9600), 51);
        assert_eq!(ubrr(16_000_000, 9600), 103);
    }

    #[test]
    fn console_divisor_fits_ubrrl() {
        assert!(ubrr_for(crate::config::UART_BAUD) <= u16::from(u8::MAX));
    }
}

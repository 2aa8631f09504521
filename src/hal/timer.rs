//! Timer0 millisecond delay
//!
//! The ATmega8 Timer0 has no compare unit, so the delay counts TCNT0 up to
//! one millisecond worth of ticks and resets it.

use crate::config::CPU_FREQ_HZ;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Stop => 0,
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// TCCR0 clock select bits
pub const CS_MASK: u8 = 0x07;

/// Prescaler used for the delay
pub const DELAY_PRESCALER: Prescaler = Prescaler::Div64;

/// Counter ticks per millisecond; must fit the 8-bit counter
pub const fn ticks_per_ms(cpu_hz: u32, prescaler: Prescaler) -> u32 {
    cpu_hz / prescaler.divisor() / 1000
}

/// 125 at 8MHz
pub const TICKS_PER_MS: u8 = ticks_per_ms(CPU_FREQ_HZ, DELAY_PRESCALER) as u8;

const _: () = assert!(ticks_per_ms(CPU_FREQ_HZ, DELAY_PRESCALER) <= u8::MAX as u32);

#[cfg(target_arch = "avr")]
pub use self::device::Delay;

#[cfg(target_arch = "avr")]
mod device {
    use super::*;
    use avr_device::atmega8::TC0;
    use embedded_hal::blocking::delay::DelayMs;

    /// Busy-wait delay on Timer0
    pub struct Delay {
        tc0: TC0,
    }

    impl Delay {
        pub fn new(tc0: TC0) -> Self {
            // Normal mode, stopped
            tc0.tccr0.write(|w| unsafe { w.bits(0) });
            tc0.tcnt0.write(|w| unsafe { w.bits(0) });
            Self { tc0 }
        }

        fn start(&mut self, prescaler: Prescaler) {
            self.tc0
                .tccr0
                .modify(|r, w| unsafe { w.bits((r.bits() & !CS_MASK) | (prescaler as u8 & CS_MASK)) });
        }

        fn stop(&mut self) {
            self.tc0.tccr0.modify(|r, w| unsafe { w.bits(r.bits() & !CS_MASK) });
        }

        pub fn release(self) -> TC0 {
            self.tc0
        }
    }

    impl DelayMs<u16> for Delay {
        fn delay_ms(&mut self, ms: u16) {
            self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
            self.start(DELAY_PRESCALER);

            for _ in 0..ms {
                while self.tc0.tcnt0.read().bits() < TICKS_PER_MS {}
                self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
            }

            self.stop();
        }
    }

    impl DelayMs<u8> for Delay {
        fn delay_ms(&mut self, ms: u8) {
            DelayMs::<u16>::delay_ms(self, u16::from(ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_millisecond_at_8mhz() {
        assert_eq!(TICKS_PER_MS, 125);
        assert_eq!(ticks_per_ms(16_000_000, Prescaler::Div64), 250);
    }

    #[test]
    fn divisors_match_clock_select() {
        assert_eq!(Prescaler::Div8 as u8, 2);
        assert_eq!(Prescaler::Div64 as u8 & CS_MASK, 3);
        assert_eq!(Prescaler::Div1024.divisor(), 1024);
    }
}

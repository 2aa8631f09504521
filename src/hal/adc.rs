//! ADC: one blocking single-channel conversion at a time
//!
//! Register bit math is portable; register access only exists on AVR.

/// ADCSRA: ADC enable
pub const ADEN: u8 = 1 << 7;
/// ADCSRA: start conversion, cleared by hardware when the result is ready
pub const ADSC: u8 = 1 << 6;
/// ADCSRA: prescaler select bits
pub const ADPS_MASK: u8 = 0x07;
/// ADMUX: channel select bits
pub const MUX_MASK: u8 = 0x0F;

/// Largest 10-bit conversion result
pub const ADC_MAX: u16 = 0x03FF;

/// ATmega8 input channels. The discriminant is the MUX3:0 field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
    Bandgap = 14, // 1.30V reference
    Gnd = 15,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AdcPrescaler {
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

impl AdcPrescaler {
    pub const fn divisor(self) -> u16 {
        1 << (self as u8)
    }
}

/// ADMUX with the channel field replaced, reference and ADLAR bits kept
#[inline]
pub const fn admux_select(admux: u8, channel: AdcChannel) -> u8 {
    (admux & !MUX_MASK) | (channel as u8 & MUX_MASK)
}

/// ADCSRA with the prescaler set and the converter enabled
#[inline]
pub const fn adcsra_enable(adcsra: u8, prescaler: AdcPrescaler) -> u8 {
    (adcsra & !ADPS_MASK) | (prescaler as u8) | ADEN
}

#[cfg(target_arch = "avr")]
pub use self::device::Adc;

#[cfg(target_arch = "avr")]
mod device {
    use super::*;
    use avr_device::atmega8::ADC;
    use core::convert::Infallible;

    pub struct Adc {
        adc: ADC,
    }

    impl Adc {
        /// Set the sampling clock divider and enable the converter
        pub fn new(adc: ADC, prescaler: AdcPrescaler) -> Self {
            adc.adcsra
                .modify(|r, w| unsafe { w.bits(adcsra_enable(r.bits(), prescaler)) });
            Self { adc }
        }

        pub fn start_conversion(&mut self, channel: AdcChannel) {
            self.adc
                .admux
                .modify(|r, w| unsafe { w.bits(admux_select(r.bits(), channel)) });
            self.adc.adcsra.modify(|r, w| unsafe { w.bits(r.bits() | ADSC) });
        }

        pub fn try_result(&mut self) -> nb::Result<u16, Infallible> {
            if self.adc.adcsra.read().bits() & ADSC != 0 {
                return Err(nb::Error::WouldBlock);
            }
            Ok(self.adc.adc.read().bits() & ADC_MAX)
        }

        /// Convert one sample, busy-waiting with no timeout
        pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
            self.start_conversion(channel);
            match nb::block!(self.try_result()) {
                Ok(sample) => sample,
                Err(never) => match never {},
            }
        }

        pub fn release(self) -> ADC {
            self.adc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_select_keeps_upper_bits() {
        // REFS0 | ADLAR set, old channel 5
        assert_eq!(admux_select(0x65, AdcChannel::Adc2), 0x62);
        assert_eq!(admux_select(0x00, AdcChannel::Gnd), 0x0F);
        assert_eq!(admux_select(0xFF, AdcChannel::Adc0), 0xF0);
        assert_eq!(admux_select(0x40, AdcChannel::Bandgap), 0x4E);
    }

    #[test]
    fn enable_with_div64() {
        // 8MHz / 64 = 125kHz ADC clock
        assert_eq!(adcsra_enable(0x00, AdcPrescaler::Div64), 0x86);
        assert_eq!(AdcPrescaler::Div64.divisor(), 64);
        assert_eq!(crate::config::CPU_FREQ_HZ / u32::from(AdcPrescaler::Div64.divisor()), 125_000);
    }

    #[test]
    fn enable_replaces_old_prescaler() {
        assert_eq!(adcsra_enable(0x07, AdcPrescaler::Div2), 0x81);
        assert_eq!(adcsra_enable(ADSC, AdcPrescaler::Div128), 0xC7);
    }
}

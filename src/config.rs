//! Configuration constants for the ATmega8 volume control firmware

use crate::hal::adc::AdcChannel;
use crate::logger::Level;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// Lowest volume level
pub const MIN_VOLUME: u8 = 0;

/// Highest volume level
pub const MAX_VOLUME: u8 = 100;

/// Volume level after reset
pub const INITIAL_VOLUME: u8 = 50;

/// Blocking wait after each handled button press, in milliseconds
pub const DEBOUNCE_MS: u16 = 200;

/// Potentiometer input
pub const VOLUME_ADC_CHANNEL: AdcChannel = AdcChannel::Adc0;

/// UART baud rate for the debug console
pub const UART_BAUD: u32 = 9600;

/// Most verbose level the serial console emits
pub const LOG_LEVEL: Level = Level::Debug;

pub mod adc;
pub mod timer;
pub mod uart;

#[cfg(target_arch = "avr")]
pub mod gpio;

// Re-export commonly used types
pub use adc::{AdcChannel, AdcPrescaler};

#[cfg(target_arch = "avr")]
pub use adc::Adc;
#[cfg(target_arch = "avr")]
pub use gpio::{board, Pins};
#[cfg(target_arch = "avr")]
pub use timer::Delay;
#[cfg(target_arch = "avr")]
pub use uart::Uart;

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use atmega8_volume_control::config::VOLUME_ADC_CHANNEL;
    use atmega8_volume_control::drivers::{ButtonHandler, NullDisplay};
    use atmega8_volume_control::hal::{board, Adc, AdcPrescaler, Delay, Pins};
    use atmega8_volume_control::logger::Log;
    use atmega8_volume_control::Application;
    use avr_device::atmega8::Peripherals;

    #[cfg(feature = "debug")]
    use atmega8_volume_control::{config::UART_BAUD, drivers::SerialConsole, hal::Uart};
    #[cfg(not(feature = "debug"))]
    use atmega8_volume_control::logger::NullLog;

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        // Buttons on PD0..PD2, active low
        let pins = Pins::new(dp.PORTD);
        let buttons: ButtonHandler<board::VolumeUp, board::VolumeDown, board::Mute> = ButtonHandler::new(
            pins.pd0.into_pull_up_input(),
            pins.pd1.into_pull_up_input(),
            pins.pd2.into_pull_up_input(),
        );

        // 8MHz / 64 = 125kHz ADC clock
        let mut adc = Adc::new(dp.ADC, AdcPrescaler::Div64);

        #[cfg(feature = "debug")]
        let mut log = SerialConsole::new(Uart::new(dp.USART, UART_BAUD));
        #[cfg(not(feature = "debug"))]
        let mut log = NullLog;

        log.info("ATmega8 volume control v0.1.0");

        // Potentiometer is sampled for diagnostics only
        let pot = adc.read_channel(VOLUME_ADC_CHANNEL);
        log.debug("pot", pot);
        log.info("Ready...");

        let mut app = Application::new(buttons, NullDisplay, Delay::new(dp.TC0), log);

        match app.run() {
            Ok(never) => match never {},
            Err(fault) => match fault {},
        }
    }
}

// The firmware only exists on AVR; host builds get an empty binary so the
// library tests can run.
#[cfg(not(target_arch = "avr"))]
fn main() {}

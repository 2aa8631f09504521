//! Application layer: the button polling loop
//!
//! Every iteration samples volume up, volume down and mute in that order.
//! A held button is handled, shown on the display, and followed by a
//! blocking [`DEBOUNCE_MS`] wait before the next button is sampled.

use crate::config::DEBOUNCE_MS;
use crate::drivers::{Button, ButtonHandler, VolumeDisplay};
use crate::logger::{Level, Log};
use crate::state::VolumeState;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// Main application state and logic
pub struct Application<UP, DOWN, MUTE, DISP, DELAY, LOG> {
    buttons: ButtonHandler<UP, DOWN, MUTE>,
    display: DISP,
    delay: DELAY,
    log: LOG,
    state: VolumeState,
}

impl<UP, DOWN, MUTE, DISP, DELAY, LOG, E> Application<UP, DOWN, MUTE, DISP, DELAY, LOG>
where
    UP: InputPin<Error = E>,
    DOWN: InputPin<Error = E>,
    MUTE: InputPin<Error = E>,
    DISP: VolumeDisplay,
    DELAY: DelayMs<u16>,
    LOG: Log,
{
    /// Create new application instance at the power-on state
    pub fn new(buttons: ButtonHandler<UP, DOWN, MUTE>, display: DISP, delay: DELAY, log: LOG) -> Self {
        Self::with_state(buttons, display, delay, log, VolumeState::new())
    }

    pub fn with_state(
        buttons: ButtonHandler<UP, DOWN, MUTE>,
        display: DISP,
        delay: DELAY,
        log: LOG,
        state: VolumeState,
    ) -> Self {
        Self {
            buttons,
            display,
            delay,
            log,
            state,
        }
    }

    pub fn state(&self) -> VolumeState {
        self.state
    }

    pub fn display(&self) -> &DISP {
        &self.display
    }

    /// Run one pass over the buttons. Returns how many presses were handled.
    pub fn poll(&mut self) -> Result<u8, E> {
        let mut handled = 0;
        for button in Button::PRIORITY {
            if self.buttons.is_pressed(button)? {
                self.handle_button_press(button);
                self.delay.delay_ms(DEBOUNCE_MS);
                handled += 1;
            }
        }
        Ok(handled)
    }

    /// Poll forever. Only returns if a pin read fails.
    pub fn run(&mut self) -> Result<Infallible, E> {
        loop {
            self.poll()?;
        }
    }

    fn handle_button_press(&mut self, button: Button) {
        match button {
            Button::VolumeUp => {
                let saturated = self.state.at_max();
                let level = self.state.increase();
                self.show_volume(level, saturated);
            }
            Button::VolumeDown => {
                let saturated = self.state.at_min();
                let level = self.state.decrease();
                self.show_volume(level, saturated);
            }
            Button::Mute => {
                let muted = self.state.toggle_mute();
                self.display.show_mute(muted);
                self.log.debug("mute", u16::from(muted));
            }
        }
    }

    // A press at the limit still redisplays the unchanged level
    fn show_volume(&mut self, level: u8, saturated: bool) {
        if saturated {
            self.log.log(Level::Debug, "volume at limit");
        }
        self.display.show_volume(level);
        self.log.debug("volume", u16::from(level));
    }

    /// Take the hardware back apart
    pub fn release(self) -> (ButtonHandler<UP, DOWN, MUTE>, DISP, DELAY, LOG) {
        (self.buttons, self.display, self.delay, self.log)
    }
}

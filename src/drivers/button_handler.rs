use embedded_hal::digital::v2::InputPin;

/// The three front-panel buttons
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    VolumeUp,
    VolumeDown,
    Mute,
}

impl Button {
    /// Order the buttons are sampled in on every loop iteration
    pub const PRIORITY: [Button; 3] = [Button::VolumeUp, Button::VolumeDown, Button::Mute];
}

/// Active-low buttons with pull-ups: a line reads low while its button is held.
///
/// Debouncing is not done here; the control loop blocks after every handled
/// press instead.
pub struct ButtonHandler<UP, DOWN, MUTE> {
    volume_up: UP,
    volume_down: DOWN,
    mute: MUTE,
}

impl<UP, DOWN, MUTE, E> ButtonHandler<UP, DOWN, MUTE>
where
    UP: InputPin<Error = E>,
    DOWN: InputPin<Error = E>,
    MUTE: InputPin<Error = E>,
{
    pub fn new(volume_up: UP, volume_down: DOWN, mute: MUTE) -> Self {
        Self {
            volume_up,
            volume_down,
            mute,
        }
    }

    pub fn is_pressed(&self, button: Button) -> Result<bool, E> {
        match button {
            Button::VolumeUp => self.volume_up.is_low(),
            Button::VolumeDown => self.volume_down.is_low(),
            Button::Mute => self.mute.is_low(),
        }
    }

    /// Give the pins back
    pub fn release(self) -> (UP, DOWN, MUTE) {
        (self.volume_up, self.volume_down, self.mute)
    }
}

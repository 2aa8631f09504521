/// Output boundary for the volume and mute state.
///
/// Called once per handled button press with the value after the press.
/// Implementations report no errors back to the control loop.
pub trait VolumeDisplay {
    fn show_volume(&mut self, level: u8);
    fn show_mute(&mut self, muted: bool);
}

/// No display attached
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl VolumeDisplay for NullDisplay {
    #[inline]
    fn show_volume(&mut self, _level: u8) {}

    #[inline]
    fn show_mute(&mut self, _muted: bool) {}
}

//! Volume and mute state owned by the control loop

use crate::config::{INITIAL_VOLUME, MAX_VOLUME, MIN_VOLUME};

/// Current volume level and mute flag.
///
/// The level always stays within `MIN_VOLUME..=MAX_VOLUME`; requests past
/// either bound saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeState {
    level: u8,
    muted: bool,
}

impl VolumeState {
    /// Power-on state: level 50, unmuted
    pub const fn new() -> Self {
        Self {
            level: INITIAL_VOLUME,
            muted: false,
        }
    }

    /// Unmuted state at `level`, clamped into range
    pub fn with_level(level: u8) -> Self {
        Self {
            level: level.clamp(MIN_VOLUME, MAX_VOLUME),
            muted: false,
        }
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Step the level up by one. Returns the level after the step.
    pub fn increase(&mut self) -> u8 {
        if self.level < MAX_VOLUME {
            self.level += 1;
        }
        self.level
    }

    /// Step the level down by one. Returns the level after the step.
    pub fn decrease(&mut self) -> u8 {
        if self.level > MIN_VOLUME {
            self.level -= 1;
        }
        self.level
    }

    /// Flip the mute flag. Returns the new flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn at_max(&self) -> bool {
        self.level == MAX_VOLUME
    }

    pub fn at_min(&self) -> bool {
        self.level == MIN_VOLUME
    }
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_fifty_unmuted() {
        let state = VolumeState::new();
        assert_eq!(state.level(), 50);
        assert!(!state.is_muted());
        assert_eq!(state, VolumeState::default());
    }

    #[test]
    fn increase_saturates_at_max() {
        let mut state = VolumeState::new();
        for _ in 0..60 {
            state.increase();
        }
        assert_eq!(state.level(), 100);
        assert!(state.at_max());
        assert_eq!(state.increase(), 100);
    }

    #[test]
    fn decrease_saturates_at_min() {
        let mut state = VolumeState::with_level(0);
        assert_eq!(state.decrease(), 0);
        assert!(state.at_min());
    }

    #[test]
    fn level_stays_in_range_from_every_start() {
        for start in MIN_VOLUME..=MAX_VOLUME {
            let mut up = VolumeState::with_level(start);
            let mut down = VolumeState::with_level(start);
            for _ in 0..=u16::from(MAX_VOLUME) {
                assert!((MIN_VOLUME..=MAX_VOLUME).contains(&up.increase()));
                assert!((MIN_VOLUME..=MAX_VOLUME).contains(&down.decrease()));
            }
            assert_eq!(up.level(), MAX_VOLUME);
            assert_eq!(down.level(), MIN_VOLUME);
        }
    }

    #[test]
    fn with_level_clamps() {
        assert_eq!(VolumeState::with_level(250).level(), MAX_VOLUME);
        assert_eq!(VolumeState::with_level(37).level(), 37);
    }

    #[test]
    fn mute_twice_restores() {
        let mut state = VolumeState::new();
        assert!(state.toggle_mute());
        assert!(!state.toggle_mute());
        for presses in [2, 4, 10] {
            let before = state.is_muted();
            for _ in 0..presses {
                state.toggle_mute();
            }
            assert_eq!(state.is_muted(), before);
        }
    }

    #[test]
    fn mute_leaves_level_alone() {
        let mut state = VolumeState::with_level(12);
        state.toggle_mute();
        assert_eq!(state.level(), 12);
    }
}

//! Volume and mute control for an ATmega8A with three push buttons
//!
//! Everything except the register-level `hal` drivers builds on the host, so
//! the control loop can be tested against mocked pins.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod hal;
pub mod logger;
pub mod state;

pub use application::Application;
pub use state::VolumeState;

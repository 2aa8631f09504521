pub mod button_handler;
pub mod display;
pub mod serial_console;

pub use button_handler::{Button, ButtonHandler};
pub use display::{NullDisplay, VolumeDisplay};
pub use serial_console::SerialConsole;

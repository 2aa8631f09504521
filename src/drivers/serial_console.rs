use crate::config::LOG_LEVEL;
use crate::logger::{Level, Log};
use core::convert::Infallible;
use embedded_hal::serial;
use ufmt::{uWrite, uwrite};

/// Line-oriented log sink on top of any blocking-capable serial writer.
///
/// Records look like `[INF] message` or `[DBG] label: value`, terminated by
/// `\r\n`. Write errors are dropped.
pub struct SerialConsole<W> {
    uart: W,
    max_level: Level,
}

impl<W: serial::Write<u8>> SerialConsole<W> {
    pub fn new(uart: W) -> Self {
        Self::with_level(uart, LOG_LEVEL)
    }

    pub fn with_level(uart: W, max_level: Level) -> Self {
        Self { uart, max_level }
    }

    pub fn write_byte(&mut self, byte: u8) {
        nb::block!(self.uart.write(byte)).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s).ok();
        self.write_str("\r\n").ok();
    }

    pub fn flush(&mut self) {
        nb::block!(self.uart.flush()).ok();
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    fn prefix(&mut self, level: Level) {
        uwrite!(self, "[{}] ", level.tag()).ok();
    }

    pub fn release(self) -> W {
        self.uart
    }
}

impl<W: serial::Write<u8>> uWrite for SerialConsole<W> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}

impl<W: serial::Write<u8>> Log for SerialConsole<W> {
    fn log(&mut self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        self.prefix(level);
        self.write_line(message);
    }

    fn log_value(&mut self, level: Level, label: &str, value: u16) {
        if !self.enabled(level) {
            return;
        }
        self.prefix(level);
        uwrite!(self, "{}: {}\r\n", label, value).ok();
    }
}

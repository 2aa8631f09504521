//! Levelled logging for the firmware
//!
//! The control loop only talks to the [`Log`] trait. On hardware the sink is
//! [`SerialConsole`](crate::drivers::SerialConsole); builds without the
//! `debug` feature use [`NullLog`].

/// Log levels, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error = 0,
    Info = 1,
    Debug = 2,
}

impl Level {
    /// Three-letter record prefix
    pub fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERR",
            Level::Info => "INF",
            Level::Debug => "DBG",
        }
    }
}

pub trait Log {
    fn log(&mut self, level: Level, message: &str);
    fn log_value(&mut self, level: Level, label: &str, value: u16);

    fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    fn debug(&mut self, label: &str, value: u16) {
        self.log_value(Level::Debug, label, value);
    }
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl Log for NullLog {
    #[inline]
    fn log(&mut self, _level: Level, _message: &str) {}

    #[inline]
    fn log_value(&mut self, _level: Level, _label: &str, _value: u16) {}
}

impl<L: Log> Log for &mut L {
    fn log(&mut self, level: Level, message: &str) {
        (**self).log(level, message);
    }

    fn log_value(&mut self, level: Level, label: &str, value: u16) {
        (**self).log_value(level, label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_verbosity() {
        assert!(Level::Error < Level::Info);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn tags() {
        assert_eq!(Level::Error.tag(), "ERR");
        assert_eq!(Level::Info.tag(), "INF");
        assert_eq!(Level::Debug.tag(), "DBG");
    }

    struct Count(usize);

    impl Log for Count {
        fn log(&mut self, _level: Level, _message: &str) {
            self.0 += 1;
        }

        fn log_value(&mut self, _level: Level, _label: &str, _value: u16) {
            self.0 += 1;
        }
    }

    #[test]
    fn helpers_forward_through_references() {
        let mut count = Count(0);
        {
            let mut sink = &mut count;
            sink.info("ready");
            sink.debug("volume", 51);
        }
        assert_eq!(count.0, 2);
    }
}

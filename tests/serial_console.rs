use atmega8_volume_control::drivers::SerialConsole;
use atmega8_volume_control::logger::{Level, Log};
use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};

#[test]
fn info_record() {
    let mut uart = SerialMock::new(&[SerialTransaction::write_many(b"[INF] Ready...\r\n")]);
    let mut console = SerialConsole::with_level(uart.clone(), Level::Info);

    console.info("Ready...");
    uart.done();
}

#[test]
fn value_record() {
    let mut uart = SerialMock::new(&[SerialTransaction::write_many(b"[DBG] pot: 1023\r\n")]);
    let mut console = SerialConsole::with_level(uart.clone(), Level::Debug);

    console.debug("pot", 1023);
    uart.done();
}

#[test]
fn records_above_max_level_are_dropped() {
    let mut uart = SerialMock::new(&[SerialTransaction::write_many(b"[ERR] adc stuck\r\n")]);
    let mut console = SerialConsole::with_level(uart.clone(), Level::Error);

    assert!(!console.enabled(Level::Info));
    console.info("Ready...");
    console.debug("volume", 50);
    console.log(Level::Error, "adc stuck");
    uart.done();
}

#[test]
fn line_then_flush() {
    let mut uart = SerialMock::new(&[
        SerialTransaction::write_many(b"hi\r\n"),
        SerialTransaction::flush(),
    ]);
    let mut console = SerialConsole::new(uart.clone());

    console.write_line("hi");
    console.flush();
    uart.done();
}

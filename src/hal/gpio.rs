use avr_device::atmega8::PORTD;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::InputPin;

pub trait PinMode {}
/// Reset state: input, pull-up off
pub struct Floating;
/// Input with the internal pull-up enabled
pub struct PullUp;
impl PinMode for Floating {}
impl PinMode for PullUp {}

/// A single PORTD line
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    const MASK: u8 = 1 << P;

    fn port() -> &'static avr_device::atmega8::portd::RegisterBlock {
        unsafe { &*PORTD::ptr() }
    }

    pub fn into_pull_up_input(self) -> Pin<P, PullUp> {
        let port = Self::port();
        // Clear DDRx bit, then set PORTx bit to enable the pull-up
        port.ddrd.modify(|r, w| unsafe { w.bits(r.bits() & !Self::MASK) });
        port.portd.modify(|r, w| unsafe { w.bits(r.bits() | Self::MASK) });
        Pin { _mode: PhantomData }
    }

    pub fn into_floating_input(self) -> Pin<P, Floating> {
        let port = Self::port();
        port.ddrd.modify(|r, w| unsafe { w.bits(r.bits() & !Self::MASK) });
        port.portd.modify(|r, w| unsafe { w.bits(r.bits() & !Self::MASK) });
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8> InputPin for Pin<P, PullUp> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(Self::port().pind.read().bits() & Self::MASK != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

/// Button lines on PORTD
pub struct Pins {
    pub pd0: Pin<0, Floating>,
    pub pd1: Pin<1, Floating>,
    pub pd2: Pin<2, Floating>,
}

impl Pins {
    /// Consumes PORTD so no other code can hand out these lines
    pub fn new(_port: PORTD) -> Self {
        Self {
            pd0: Pin { _mode: PhantomData },
            pd1: Pin { _mode: PhantomData },
            pd2: Pin { _mode: PhantomData },
        }
    }
}

// Volume control board wiring
pub mod board {
    use super::*;

    pub type VolumeUp = Pin<0, PullUp>;
    pub type VolumeDown = Pin<1, PullUp>;
    pub type Mute = Pin<2, PullUp>;
}

//! Serial bus traits

use crate::sample::ButtonSample;

/// Clocked serial transmitter for the M66004
///
/// Each call is one complete transmission: chip select is asserted once
/// before the first bit and released once after the last.
pub trait Transmitter {
    /// Error type for bus operations
    type Error;

    /// Send one byte, MSB first, as its own transmission
    fn transmit_byte(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Send all bytes in order inside a single transmission
    ///
    /// An empty slice asserts and releases chip select without clocking.
    fn transmit_buffer(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Button bank reader for the 74HC165
pub trait ButtonSampler {
    /// Error type for bus operations
    type Error;

    /// Latch the button inputs and shift out one raw sample
    fn sample_buttons(&mut self) -> Result<ButtonSample, Self::Error>;
}

impl<T: Transmitter + ?Sized> Transmitter for &mut T {
    type Error = T::Error;

    fn transmit_byte(&mut self, value: u8) -> Result<(), Self::Error> {
        T::transmit_byte(self, value)
    }

    fn transmit_buffer(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::transmit_buffer(self, bytes)
    }
}

impl<T: ButtonSampler + ?Sized> ButtonSampler for &mut T {
    type Error = T::Error;

    fn sample_buttons(&mut self) -> Result<ButtonSample, Self::Error> {
        T::sample_buttons(self)
    }
}

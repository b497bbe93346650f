//! 74HC165 button sampler
//!
//! Shift/load high latches the parallel button inputs; eight clocks then
//! shift them out on QH. The first bit read lands in bit 0.

use embedded_hal::delay::DelayNs;
use vfd_core::traits::ButtonSampler;
use vfd_core::ButtonSample;
use vfd_hal::{Level, Line, LineInterface};

use super::SerialBus;

impl<L: LineInterface, D: DelayNs> SerialBus<L, D> {
    /// Clock one byte in, LSB first
    fn shift_in(&mut self) -> Result<u8, L::Error> {
        let mut value = 0u8;
        for bit in 0..8 {
            self.lines.set_line(Line::Clock, Level::Low)?;
            if self.lines.read_line(Line::DataIn)?.is_high() {
                value |= 1 << bit;
            }
            self.lines.set_line(Line::Clock, Level::High)?;
        }
        Ok(value)
    }
}

impl<L: LineInterface, D: DelayNs> ButtonSampler for SerialBus<L, D> {
    type Error = L::Error;

    fn sample_buttons(&mut self) -> Result<ButtonSample, Self::Error> {
        self.lines.set_line(Line::ShiftLoad, Level::High)?;
        let result = self.shift_in();
        let release = self.lines.set_line(Line::ShiftLoad, Level::Low);
        let bits = result?;
        release?;

        #[cfg(feature = "defmt")]
        defmt::trace!("buttons {=u8:#b}", bits);

        Ok(ButtonSample::new(bits))
    }
}

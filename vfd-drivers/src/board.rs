//! VFD panel board
//!
//! The M66004 and the 74HC165 share one serial bus, so the board owns a
//! single [`SerialBus`] and hands it to whichever side is being used. A
//! display write and a button read can never interleave mid-transmission.

use embedded_hal::delay::DelayNs;
use vfd_core::traits::{ButtonSampler, CharacterDisplay};
use vfd_core::{ButtonSample, DisplayError};
use vfd_hal::LineInterface;

use crate::bus::{NoDelay, SerialBus};
use crate::display::M66004;

/// Display and buttons on one bus
pub struct VfdBoard<L, D = NoDelay> {
    display: M66004<SerialBus<L, D>>,
}

impl<L: LineInterface, D: DelayNs> VfdBoard<L, D> {
    /// Wrap a serial bus
    pub fn new(bus: SerialBus<L, D>) -> Self {
        Self {
            display: M66004::new(bus),
        }
    }

    /// Bring up the bus lines, then initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError<L::Error>> {
        self.display
            .bus_mut()
            .configure()
            .map_err(DisplayError::Bus)?;
        self.display.initialize()?;

        #[cfg(feature = "defmt")]
        defmt::info!("VFD board ready");

        Ok(())
    }

    /// Get the display command layer
    pub fn display(&mut self) -> &mut M66004<SerialBus<L, D>> {
        &mut self.display
    }

    /// Sample the button bank
    pub fn read_buttons(&mut self) -> Result<ButtonSample, L::Error> {
        self.display.bus_mut().sample_buttons()
    }

    /// Give the bus back
    pub fn release(self) -> SerialBus<L, D> {
        self.display.release()
    }
}

//! M66004 16-character VFD controller
//!
//! Command layer on top of any [`Transmitter`]. Invalid positions are
//! rejected before anything is sent, so the bus never sees a partial
//! transmission.

use vfd_core::command::{self, CLEAR_SEQUENCE, CURSOR_HOME, INIT_SEQUENCE};
use vfd_core::traits::{CharacterDisplay, Transmitter};
use vfd_core::{DimmerUpdate, DisplayError, DISPLAY_WIDTH, MAX_DIMMER};

/// M66004 display driver
pub struct M66004<T> {
    bus: T,
    /// Last applied dimmer level, 0 until the first change
    dimmer: u8,
}

impl<T: Transmitter> M66004<T> {
    /// Create a new driver
    ///
    /// Nothing is sent until [`initialize`](CharacterDisplay::initialize).
    pub fn new(bus: T) -> Self {
        Self { bus, dimmer: 0 }
    }

    /// Last dimmer level sent (0 if never set)
    pub fn dimmer_level(&self) -> u8 {
        self.dimmer
    }

    /// Get access to the transmitter
    pub fn bus(&self) -> &T {
        &self.bus
    }

    /// Get mutable access to the transmitter
    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }

    /// Give the transmitter back
    pub fn release(self) -> T {
        self.bus
    }

    fn send(&mut self, value: u8) -> Result<(), DisplayError<T::Error>> {
        self.bus.transmit_byte(value).map_err(DisplayError::Bus)
    }

    fn send_all(&mut self, bytes: &[u8]) -> Result<(), DisplayError<T::Error>> {
        self.bus.transmit_buffer(bytes).map_err(DisplayError::Bus)
    }
}

impl<T: Transmitter> CharacterDisplay for M66004<T> {
    type Error = T::Error;

    fn initialize(&mut self) -> Result<(), DisplayError<Self::Error>> {
        for byte in INIT_SEQUENCE {
            self.send(byte)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("M66004 initialized");

        Ok(())
    }

    fn write_character(
        &mut self,
        position: u8,
        character: u8,
    ) -> Result<(), DisplayError<Self::Error>> {
        let Some(select) = command::position_select(position) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("character position {=u8} rejected", position);
            return Err(DisplayError::PositionOutOfRange(position));
        };
        self.send_all(&[select, character])
    }

    fn write_string(&mut self, text: &[u8; DISPLAY_WIDTH]) -> Result<(), DisplayError<Self::Error>> {
        self.send(CURSOR_HOME)?;
        self.send_all(text)
    }

    fn clear(&mut self) -> Result<(), DisplayError<Self::Error>> {
        self.send_all(&CLEAR_SEQUENCE)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), DisplayError<Self::Error>> {
        self.send(command::visibility(visible))
    }

    fn set_dimmer(&mut self, level: u8) -> Result<DimmerUpdate, DisplayError<Self::Error>> {
        let level = level.min(MAX_DIMMER);
        if level == self.dimmer {
            return Ok(DimmerUpdate::Unchanged);
        }
        let Some(cmd) = command::dimmer(level) else {
            // Level 0 leaves the panel alone
            return Ok(DimmerUpdate::Unchanged);
        };

        self.dimmer = level;
        self.send(cmd)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("dimmer level {=u8}", level);

        Ok(DimmerUpdate::Applied(level))
    }

    fn set_decimal_dot(&mut self, position: u8, on: bool) -> Result<(), DisplayError<Self::Error>> {
        let Some(cmd) = command::decimal_dot(position, on) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("decimal dot {=u8} rejected", position);
            return Err(DisplayError::DotOutOfRange(position));
        };
        self.send(cmd)
    }
}

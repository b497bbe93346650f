//! Character display trait for the 16-cell VFD

use crate::command::BLANK;
use crate::error::{DimmerUpdate, DisplayError};
use crate::DISPLAY_WIDTH;

/// Trait for the display command layer
///
/// The layer does not mirror the character memory; the only state it keeps
/// is the last applied dimmer level.
pub trait CharacterDisplay {
    /// Error type reported by the underlying bus
    type Error;

    /// Send the bring-up command sequence
    ///
    /// Must run before any other operation. Nothing tracks whether it did.
    fn initialize(&mut self) -> Result<(), DisplayError<Self::Error>>;

    /// Write one character
    ///
    /// - `position`: Cell number (0-15)
    /// - `character`: Glyph code, forwarded unchecked
    fn write_character(&mut self, position: u8, character: u8)
        -> Result<(), DisplayError<Self::Error>>;

    /// Write all 16 cells, starting at the first
    fn write_string(&mut self, text: &[u8; DISPLAY_WIDTH]) -> Result<(), DisplayError<Self::Error>>;

    /// Blank every cell
    fn clear(&mut self) -> Result<(), DisplayError<Self::Error>>;

    /// Show or hide the display (memory is not cleared)
    fn set_visible(&mut self, visible: bool) -> Result<(), DisplayError<Self::Error>>;

    /// Set the dimmer level (1-8)
    ///
    /// Values above 8 are clamped. Level 0 and the current level are no-ops.
    fn set_dimmer(&mut self, level: u8) -> Result<DimmerUpdate, DisplayError<Self::Error>>;

    /// Set or clear the decimal dot of a cell
    ///
    /// - `position`: Cell number, 1-based (1-16)
    fn set_decimal_dot(&mut self, position: u8, on: bool) -> Result<(), DisplayError<Self::Error>>;

    /// Clear the decimal dot of every cell, one command per cell
    fn clear_decimal_dots(&mut self) -> Result<(), DisplayError<Self::Error>> {
        for position in 1..=DISPLAY_WIDTH as u8 {
            self.set_decimal_dot(position, false)?;
        }
        Ok(())
    }
}

/// Helper trait for writing text
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Write a string across the whole display
    ///
    /// Shorter text is padded with blanks, longer text is cut at 16 bytes.
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError<Self::Error>> {
        let mut buf = [BLANK; DISPLAY_WIDTH];
        let bytes = text.as_bytes();
        let len = bytes.len().min(DISPLAY_WIDTH);
        buf[..len].copy_from_slice(&bytes[..len]);
        self.write_string(&buf)
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay + ?Sized> CharacterDisplayExt for T {}

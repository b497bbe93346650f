//! M66004 command bytes
//!
//! Every byte the driver puts on the wire comes from this module. The
//! parameterised commands (display on/off, dimmer, decimal dots) are encoded
//! with the AND masks the panel boards have always been driven with, which
//! differs from the OR form in the M66004 datasheet. Keep the output
//! byte-for-byte until the datasheet form is verified on hardware.
//!
//! Character data is plain ASCII; the glyph ROM follows the usual chart
//! from 0x20 (space) to 0x7F.

use crate::{DISPLAY_WIDTH, MAX_DIMMER};

/// Set display length (16 characters)
pub const SET_DISPLAY_LENGTH: u8 = 0x00;

/// Enable auto increment (never turned off)
pub const AUTO_INCREMENT: u8 = 0xF4;

/// Dimmer value and frequency (128/fOSC)
pub const DIMMER_INIT: u8 = 0x08;

/// Chip configuration
pub const CHIP_CONFIG: u8 = 0xF6;

/// Bring-up sequence, each byte sent as its own transmission
pub const INIT_SEQUENCE: [u8; 4] = [SET_DISPLAY_LENGTH, AUTO_INCREMENT, DIMMER_INIT, CHIP_CONFIG];

/// Move the cursor to the first character cell
pub const CURSOR_HOME: u8 = 0xE0;

/// Blank character cell
pub const BLANK: u8 = 0x20;

const DISPLAY_CONTROL: u8 = 0xF0;
const DIMMER: u8 = 0x08;
const DOT_ON: u8 = 0x10;
const DOT_OFF: u8 = 0x80;

/// Show the display contents (memory is kept)
pub const DISPLAY_ON: u8 = DISPLAY_CONTROL & 0x01;

/// Hide the display contents (memory is kept)
pub const DISPLAY_OFF: u8 = DISPLAY_CONTROL & 0x00;

/// Cursor home followed by a blank in every cell
pub const CLEAR_SEQUENCE: [u8; DISPLAY_WIDTH + 1] = {
    let mut seq = [BLANK; DISPLAY_WIDTH + 1];
    seq[0] = CURSOR_HOME;
    seq
};

/// Cursor position select for a 0-based cell
///
/// Returns `None` for positions past the last cell. The M66004 adds one
/// internally.
pub const fn position_select(position: u8) -> Option<u8> {
    if position as usize >= DISPLAY_WIDTH {
        return None;
    }
    Some(CURSOR_HOME | position)
}

/// Dimmer command for a level in 1..=8
///
/// Returns `None` for 0 and anything above [`MAX_DIMMER`].
pub const fn dimmer(level: u8) -> Option<u8> {
    if level == 0 || level > MAX_DIMMER {
        return None;
    }
    Some(DIMMER & level)
}

/// Decimal dot command for a 1-based cell
///
/// Returns `None` for 0 and positions past the last cell.
pub const fn decimal_dot(position: u8, on: bool) -> Option<u8> {
    if position == 0 || position as usize > DISPLAY_WIDTH {
        return None;
    }
    if on {
        Some(DOT_ON & position)
    } else {
        Some(DOT_OFF & position)
    }
}

/// Display on/off command
pub const fn visibility(visible: bool) -> u8 {
    if visible {
        DISPLAY_ON
    } else {
        DISPLAY_OFF
    }
}

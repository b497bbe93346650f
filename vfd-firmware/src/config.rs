//! Board configuration
//!
//! Values come from board.toml, validated and turned into constants by
//! build.rs.

use vfd_core::config::{BusConfig, BusPinConfig, PinConfig};
use vfd_hal_rp2040::gpio::parse_pin_string;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Error when a generated pin string does not parse
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BadPin(pub &'static str);

fn pin(s: &'static str) -> Result<PinConfig, BadPin> {
    parse_pin_string(s).ok_or(BadPin(s))
}

/// Pin assignment for the bus lines
pub fn bus_pins() -> Result<BusPinConfig, BadPin> {
    Ok(BusPinConfig {
        clock: pin(CLOCK_PIN)?,
        data_out: pin(DATA_OUT_PIN)?,
        data_in: pin(DATA_IN_PIN)?,
        chip_select: pin(CHIP_SELECT_PIN)?,
        shift_load: pin(SHIFT_LOAD_PIN)?,
    })
}

/// Bus timing
pub fn bus_config() -> BusConfig {
    BusConfig {
        inter_byte_delay_us: INTER_BYTE_DELAY_US,
    }
}

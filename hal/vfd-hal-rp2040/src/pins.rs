//! Pin bank for config-driven pin assignment
//!
//! Bus pins come from `board.toml` as numbers, so they are handed out at
//! runtime instead of being named in code.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};

use crate::gpio::GPIO_COUNT;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken, or requested twice
    AlreadyTaken(u8),
}

macro_rules! any_pins {
    ($p:ident: $($pin:ident),+ $(,)?) => {
        [$(Some(Peri::<'static, AnyPin>::from($p.$pin))),+]
    };
}

/// All GPIOs, takeable by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Move every GPIO out of the peripherals
    ///
    /// Other peripherals are dropped; the panel needs nothing but GPIOs.
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: any_pins!(p:
                PIN_0, PIN_1, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9,
                PIN_10, PIN_11, PIN_12, PIN_13, PIN_14, PIN_15, PIN_16, PIN_17, PIN_18, PIN_19,
                PIN_20, PIN_21, PIN_22, PIN_23, PIN_24, PIN_25, PIN_26, PIN_27, PIN_28, PIN_29,
            ),
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin as usize)
            .ok_or(PinError::InvalidPin(pin))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin))
    }

    /// Check if a pin can still be taken
    pub fn is_available(&self, pin: u8) -> bool {
        matches!(self.pins.get(pin as usize), Some(Some(_)))
    }

    /// Put a pin back
    pub fn give_back(&mut self, pin: u8, peri: Peri<'static, AnyPin>) {
        if let Some(slot) = self.pins.get_mut(pin as usize) {
            *slot = Some(peri);
        }
    }
}

//! GPIO pin strings for STM32F0
//!
//! Pins are written port-and-number (`"PA0"`, `"PB1"`) with the same
//! modifiers as the other targets: `!` for inverted, `^` for pull-up.
//! In a [`PinConfig`] the pin is stored as `port * 16 + number`, the same
//! numbering embassy-stm32 uses for `AnyPin`.

use vfd_core::config::PinConfig;

/// Pins per GPIO port
pub const PINS_PER_PORT: u8 = 16;

/// Parse a pin string from config
///
/// Supports formats:
/// - "PA0" -> port A, pin 0
/// - "!PB1" -> port B, pin 1, inverted
/// - "^PA3" -> port A, pin 3, pull-up
pub fn parse_pin_string(s: &str) -> Option<PinConfig> {
    let mut s = s.trim();
    let mut config = PinConfig::default();

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            config.inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            config.pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let s = s.strip_prefix('P')?;
    let mut chars = s.chars();
    let port = chars.next()?;
    if !('A'..='F').contains(&port) {
        return None;
    }
    let number: u8 = chars.as_str().parse().ok()?;
    if number >= PINS_PER_PORT {
        return None;
    }

    config.pin = (port as u8 - b'A') * PINS_PER_PORT + number;
    Some(config)
}

/// Port letter of an encoded pin
pub fn port(pin: u8) -> char {
    char::from(b'A' + pin / PINS_PER_PORT)
}

/// Pin number within its port
pub fn number(pin: u8) -> u8 {
    pin % PINS_PER_PORT
}

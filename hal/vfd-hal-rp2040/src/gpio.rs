//! GPIO pin strings
//!
//! Board files name pins the way the RP2040 datasheet does, with optional
//! modifiers in front:
//!
//! - `"gpio11"`: plain pin
//! - `"!gpio12"`: inverted (active-low)
//! - `"^gpio4"`: internal pull-up enabled
//!
//! Modifiers can be combined in either order (`"!^gpio4"`, `"^!gpio4"`).

use vfd_core::config::PinConfig;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Parse a pin string from config
///
/// Returns `None` for anything that is not `gpio0` to `gpio29`.
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

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    if pin as usize >= GPIO_COUNT {
        return None;
    }
    config.pin = pin;
    Some(config)
}

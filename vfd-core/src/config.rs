//! Configuration types
//!
//! Pin assignment and bus timing for a panel. Target HALs turn pin strings
//! into [`PinConfig`]s; the bus driver consumes [`BusConfig`].

/// M66004 processing time per received byte (tBUSY), in microseconds
///
/// 6 cycles at 500 kHz, rounded up.
pub const TBUSY_US: u32 = 14;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// Pin assignment for the five bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPinConfig {
    /// Serial clock, shared by M66004 and '165
    pub clock: PinConfig,
    /// Serial data to the M66004
    pub data_out: PinConfig,
    /// Serial out (QH) of the '165
    pub data_in: PinConfig,
    /// M66004 chip select
    pub chip_select: PinConfig,
    /// '165 shift/load
    pub shift_load: PinConfig,
}

impl BusPinConfig {
    /// All pins in bus line order (clock, data out, data in, chip select, shift/load)
    pub const fn pins(&self) -> [PinConfig; 5] {
        [
            self.clock,
            self.data_out,
            self.data_in,
            self.chip_select,
            self.shift_load,
        ]
    }

    /// First pin number assigned to more than one line, if any
    pub fn duplicate_pin(&self) -> Option<u8> {
        let pins = self.pins();
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].iter().any(|b| b.pin == a.pin) {
                return Some(a.pin);
            }
        }
        None
    }
}

/// Serial bus timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Delay after each transmitted byte, in microseconds (0 = none)
    pub inter_byte_delay_us: u32,
}

impl BusConfig {
    /// No extra delay; bit-clocking itself covers tBUSY on slow hosts
    pub const fn new() -> Self {
        Self {
            inter_byte_delay_us: 0,
        }
    }

    /// Wait [`TBUSY_US`] after each byte
    pub const fn with_busy_time() -> Self {
        Self {
            inter_byte_delay_us: TBUSY_US,
        }
    }
}

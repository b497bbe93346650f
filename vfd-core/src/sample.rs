//! Raw button bank sample
//!
//! One byte clocked out of the 74HC165. Bit 0 is the first bit shifted out,
//! bit 7 the last. Which bit belongs to which button depends on the board
//! wiring and is not interpreted here.

/// One raw 8-bit snapshot of the button bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample(u8);

impl ButtonSample {
    /// Wrap a raw sample
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw sample bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether the bit at `index` (0-7) is set
    ///
    /// Out-of-range indices read as clear.
    pub const fn is_set(self, index: u8) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }

    /// True when no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set bits
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Indices of the set bits, lowest first
    pub fn pressed(self) -> impl Iterator<Item = u8> {
        (0..8u8).filter(move |&i| self.is_set(i))
    }

    /// Bits that differ from another sample
    pub const fn changed_from(self, other: ButtonSample) -> ButtonSample {
        ButtonSample(self.0 ^ other.0)
    }
}

impl From<u8> for ButtonSample {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<ButtonSample> for u8 {
    fn from(sample: ButtonSample) -> Self {
        sample.0
    }
}

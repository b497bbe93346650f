//! Display error and outcome types

/// Errors from display operations
///
/// Input errors are reported before any line is touched, so a rejected call
/// never leaves a partial transmission on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Character position outside 0-15
    PositionOutOfRange(u8),
    /// Decimal dot position outside 1-16
    DotOutOfRange(u8),
    /// Error reported by the bus lines
    Bus(E),
}

impl<E> DisplayError<E> {
    /// Check if the caller's input was rejected
    pub fn is_input_error(&self) -> bool {
        !matches!(self, DisplayError::Bus(_))
    }
}

/// Result of a dimmer request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DimmerUpdate {
    /// New level stored and sent
    Applied(u8),
    /// Level 0 or already the current level; nothing sent
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(DisplayError::<()>::PositionOutOfRange(16).is_input_error());
        assert!(DisplayError::<()>::DotOutOfRange(0).is_input_error());
        assert!(!DisplayError::Bus(()).is_input_error());
    }
}

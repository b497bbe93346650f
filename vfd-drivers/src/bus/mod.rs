//! Bit-banged serial bus
//!
//! The M66004 and the 74HC165 share the clock line. Output goes MSB first on
//! `DataOut`, latched by the M66004 on each clock low-to-high transition,
//! inside a chip-select window. Input comes back LSB first on `DataIn`
//! while shift/load is held high.
//!
//! ```text
//!  CS   ‾‾‾\_________________________________/‾‾‾
//!  SCK  ‾‾‾‾‾\_/‾\_/‾\_/‾\_/‾\_/‾\_/‾\_/‾\_/‾‾‾‾‾
//!  SI        b7  b6  b5  b4  b3  b2  b1  b0
//! ```

mod embedded;
mod sampler;
mod transmit;

#[cfg(test)]
pub(crate) mod mock;

pub use embedded::{EmbeddedHalLines, LineError, LineErrorKind};

use embedded_hal::delay::DelayNs;
use vfd_core::config::BusConfig;
use vfd_hal::{Level, Line, LineInterface};

/// Delay provider for hosts slow enough not to need one
///
/// Bit-clocking on an MSP430-class MCU already takes longer than the
/// M66004's per-byte processing time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    #[inline]
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Serial bus driver
///
/// Owns the five bus lines and implements both the M66004 transmitter and
/// the 74HC165 button sampler on top of them.
pub struct SerialBus<L, D = NoDelay> {
    lines: L,
    delay: D,
    config: BusConfig,
}

impl<L: LineInterface> SerialBus<L, NoDelay> {
    /// Create a bus without inter-byte delay
    pub fn new(lines: L) -> Self {
        Self {
            lines,
            delay: NoDelay,
            config: BusConfig::new(),
        }
    }
}

impl<L: LineInterface, D: DelayNs> SerialBus<L, D> {
    /// Create a bus that waits `config.inter_byte_delay_us` after each byte
    pub fn with_delay(lines: L, delay: D, config: BusConfig) -> Self {
        Self {
            lines,
            delay,
            config,
        }
    }

    /// Configure line directions and drive the idle levels
    ///
    /// Clock high, data out low, chip select high (released) and
    /// shift/load low. Data in is configured as an input.
    pub fn configure(&mut self) -> Result<(), L::Error> {
        for line in Line::ALL {
            self.lines.configure_line(line, line.direction())?;
            if let Some(level) = line.idle_level() {
                self.lines.set_line(line, level)?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Serial bus configured");

        Ok(())
    }

    /// Get the bus timing
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Get access to the underlying lines
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Get mutable access to the underlying lines
    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }

    /// Give the lines and delay provider back
    pub fn release(self) -> (L, D) {
        (self.lines, self.delay)
    }

    /// Run `f` inside one chip-select window
    ///
    /// Chip select is released even when `f` fails; the first error wins.
    fn framed<F>(&mut self, f: F) -> Result<(), L::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), L::Error>,
    {
        self.lines.set_line(Line::ChipSelect, Level::Low)?;
        let result = f(self);
        let release = self.lines.set_line(Line::ChipSelect, Level::High);
        result.and(release)
    }

    /// Clock one byte out, MSB first
    fn shift_out(&mut self, value: u8) -> Result<(), L::Error> {
        for bit in (0..8).rev() {
            self.lines.set_line(Line::Clock, Level::Low)?;
            self.lines
                .set_line(Line::DataOut, Level::from(value & (1 << bit) != 0))?;
            self.lines.set_line(Line::Clock, Level::High)?;
        }
        self.busy_wait();
        Ok(())
    }

    /// Give the M66004 its per-byte processing time
    fn busy_wait(&mut self) {
        if self.config.inter_byte_delay_us > 0 {
            self.delay.delay_us(self.config.inter_byte_delay_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockLines;
    use super::*;

    #[test]
    fn test_configure_drives_idle_levels() {
        let mut bus = SerialBus::new(MockLines::new());
        bus.configure().unwrap();

        let lines = bus.lines();
        assert_eq!(lines.level(Line::Clock), Level::High);
        assert_eq!(lines.level(Line::DataOut), Level::Low);
        assert_eq!(lines.level(Line::ChipSelect), Level::High);
        assert_eq!(lines.level(Line::ShiftLoad), Level::Low);
        assert_eq!(lines.direction(Line::DataIn), Some(vfd_hal::Direction::Input));
        assert_eq!(lines.direction(Line::Clock), Some(vfd_hal::Direction::Output));
    }

    struct CountingDelay {
        calls: u32,
        total_us: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls += 1;
            self.total_us += ns / 1000;
        }

        fn delay_us(&mut self, us: u32) {
            self.calls += 1;
            self.total_us += us;
        }
    }

    #[test]
    fn test_busy_time_after_each_byte() {
        use vfd_core::traits::Transmitter;

        let delay = CountingDelay {
            calls: 0,
            total_us: 0,
        };
        let mut bus = SerialBus::with_delay(MockLines::new(), delay, BusConfig::with_busy_time());
        bus.transmit_buffer(&[0xE0, 0x41, 0x42]).unwrap();
        bus.transmit_byte(0xF6).unwrap();

        let (_, delay) = bus.release();
        assert_eq!(delay.calls, 4);
        assert_eq!(delay.total_us, 4 * vfd_core::config::TBUSY_US);
    }

    #[test]
    fn test_zero_delay_skips_delay_provider() {
        use vfd_core::traits::Transmitter;

        let delay = CountingDelay {
            calls: 0,
            total_us: 0,
        };
        let mut bus = SerialBus::with_delay(MockLines::new(), delay, BusConfig::new());
        bus.transmit_buffer(&[1, 2, 3]).unwrap();

        let (_, delay) = bus.release();
        assert_eq!(delay.calls, 0);
    }
}

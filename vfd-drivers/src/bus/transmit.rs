//! M66004 transmitter
//!
//! Single bytes and whole buffers each go out as one chip-select window.
//! Buffers rely on the chip processing each byte (tBUSY) before the next
//! one starts clocking in; see [`BusConfig`](vfd_core::config::BusConfig)
//! for fast hosts.

use embedded_hal::delay::DelayNs;
use vfd_core::traits::Transmitter;
use vfd_hal::LineInterface;

use super::SerialBus;

impl<L: LineInterface, D: DelayNs> Transmitter for SerialBus<L, D> {
    type Error = L::Error;

    fn transmit_byte(&mut self, value: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("tx byte {=u8:#x}", value);

        self.framed(|bus| bus.shift_out(value))
    }

    fn transmit_buffer(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("tx buffer, {=usize} bytes", bytes.len());

        self.framed(|bus| {
            for &byte in bytes {
                bus.shift_out(byte)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockLines;
    use super::*;
    use vfd_hal::{Level, Line};

    #[test]
    fn test_byte_is_sent_msb_first() {
        let mut bus = SerialBus::new(MockLines::new());
        bus.transmit_byte(0b1010_0011).unwrap();

        let frames = bus.lines().frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), &[0b1010_0011]);

        // First data bit written is the MSB
        let first_data = bus
            .lines()
            .events
            .iter()
            .find(|(line, _)| *line == Line::DataOut)
            .map(|&(_, level)| level);
        assert_eq!(first_data, Some(Level::High));
    }

    #[test]
    fn test_byte_leaves_clock_high_and_cs_released() {
        let mut bus = SerialBus::new(MockLines::new());
        bus.transmit_byte(0x00).unwrap();

        let lines = bus.lines();
        assert_eq!(lines.level(Line::Clock), Level::High);
        assert_eq!(lines.level(Line::ChipSelect), Level::High);
        assert_eq!(lines.count(Line::Clock, Level::High), 8);
        assert_eq!(lines.count(Line::Clock, Level::Low), 8);
    }

    #[test]
    fn test_buffer_uses_one_chip_select_window() {
        let mut bus = SerialBus::new(MockLines::new());
        bus.transmit_buffer(&[0xE0, b'H', b'i']).unwrap();

        let lines = bus.lines();
        assert_eq!(lines.count(Line::ChipSelect, Level::Low), 1);
        assert_eq!(lines.count(Line::ChipSelect, Level::High), 1);
        assert_eq!(lines.count(Line::Clock, Level::High), 24);

        let frames = lines.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), &[0xE0, b'H', b'i']);
    }

    #[test]
    fn test_empty_buffer_only_toggles_chip_select() {
        let mut bus = SerialBus::new(MockLines::new());
        bus.transmit_buffer(&[]).unwrap();

        let events = &bus.lines().events;
        assert_eq!(
            events.as_slice(),
            &[(Line::ChipSelect, Level::Low), (Line::ChipSelect, Level::High)]
        );
    }

    #[test]
    fn test_chip_select_released_after_line_error() {
        let mut lines = MockLines::new();
        // Fail on the clock write after chip select goes low
        lines.fail_write = Some(1);
        let mut bus = SerialBus::new(lines);

        assert!(bus.transmit_byte(0xFF).is_err());
        assert_eq!(bus.lines().level(Line::ChipSelect), Level::High);
    }

    #[test]
    fn test_failed_chip_select_starts_nothing() {
        let mut lines = MockLines::new();
        lines.fail_write = Some(0);
        let mut bus = SerialBus::new(lines);

        assert!(bus.transmit_buffer(&[1, 2]).is_err());
        assert!(bus.lines().events.is_empty());
    }
}

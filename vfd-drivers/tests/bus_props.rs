//! Property tests for the bit-level bus protocol

mod common;

use common::Probe;
use proptest::prelude::*;
use vfd_core::traits::{CharacterDisplay, Transmitter};
use vfd_drivers::{SerialBus, M66004};
use vfd_hal::{Level, Line};

fn msb_first(byte: u8) -> Vec<bool> {
    (0..8).rev().map(|i| byte >> i & 1 != 0).collect()
}

proptest! {
    #[test]
    fn byte_is_eight_clocks_msb_first(value in any::<u8>()) {
        let mut bus = SerialBus::new(Probe::new());
        bus.transmit_byte(value).unwrap();

        let probe = bus.lines();
        prop_assert_eq!(probe.rising_edges(), 8);
        prop_assert_eq!(probe.sampled_bits(), msb_first(value));
        prop_assert_eq!(probe.level(Line::Clock), Some(Level::High));
        prop_assert_eq!(probe.level(Line::ChipSelect), Some(Level::High));
    }

    #[test]
    fn buffer_arrives_in_one_window(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let mut bus = SerialBus::new(Probe::new());
        bus.transmit_buffer(&bytes).unwrap();

        let probe = bus.lines();
        prop_assert_eq!(probe.count(Line::ChipSelect, Level::Low), 1);
        prop_assert_eq!(probe.count(Line::ChipSelect, Level::High), 1);
        prop_assert_eq!(probe.transmissions(), vec![bytes.clone()]);
    }

    #[test]
    fn data_settles_before_rising_edge(value in any::<u8>()) {
        let mut bus = SerialBus::new(Probe::new());
        bus.transmit_byte(value).unwrap();

        // Every rising edge is directly preceded by the data write for that bit
        let events = &bus.lines().events;
        let mut bit = 0;
        for pair in events.windows(2) {
            if pair[1] == (Line::Clock, Level::High) {
                let expected = Level::from(value >> (7 - bit) & 1 != 0);
                prop_assert_eq!(pair[0], (Line::DataOut, expected));
                bit += 1;
            }
        }
        prop_assert_eq!(bit, 8);
    }

    #[test]
    fn dimmer_sends_only_on_change(levels in proptest::collection::vec(0u8..=12, 1..32)) {
        let mut display = M66004::new(SerialBus::new(Probe::new()));
        let mut current = 0u8;
        let mut expected = 0usize;
        for level in levels {
            display.set_dimmer(level).unwrap();
            let clamped = level.min(8);
            if clamped != 0 && clamped != current {
                current = clamped;
                expected += 1;
            }
        }
        prop_assert_eq!(display.dimmer_level(), current);
        prop_assert_eq!(display.bus().lines().transmissions().len(), expected);
    }

    #[test]
    fn button_sample_matches_wiring(input in any::<u8>()) {
        use vfd_core::traits::ButtonSampler;

        let mut bus = SerialBus::new(Probe::with_input(input));
        prop_assert_eq!(bus.sample_buttons().unwrap().bits(), input);
    }
}

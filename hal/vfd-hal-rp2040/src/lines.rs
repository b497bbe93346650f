//! Bus lines on RP2040 GPIOs
//!
//! Each line is a `Flex` pin so that `configure_line` can set the direction
//! at bring-up. Inversion from the pin config is applied on every access;
//! the bus driver only ever sees logical levels.

use core::convert::Infallible;

use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;
use vfd_core::config::{BusPinConfig, PinConfig};
use vfd_hal::{Direction, Level, Line, LineInterface};

use crate::pins::{PinBank, PinError};

struct BusPin<'d> {
    flex: Flex<'d>,
    config: PinConfig,
}

impl<'d> BusPin<'d> {
    fn new(pin: Peri<'d, AnyPin>, config: PinConfig) -> Self {
        Self {
            flex: Flex::new(pin),
            config,
        }
    }

    fn to_logical(&self, high: bool) -> Level {
        Level::from(high != self.config.inverted)
    }
}

/// The five bus lines on RP2040 pins
pub struct Rp2040Lines<'d> {
    /// Indexed by [`Line::index`]
    pins: [BusPin<'d>; 5],
}

impl<'d> Rp2040Lines<'d> {
    /// Build the lines from pins in bus line order
    ///
    /// `pins` must be ordered clock, data out, data in, chip select,
    /// shift/load, matching [`BusPinConfig::pins`].
    pub fn new(pins: [Peri<'d, AnyPin>; 5], config: &BusPinConfig) -> Self {
        let [clock, data_out, data_in, chip_select, shift_load] = pins;
        Self {
            pins: [
                BusPin::new(clock, config.clock),
                BusPin::new(data_out, config.data_out),
                BusPin::new(data_in, config.data_in),
                BusPin::new(chip_select, config.chip_select),
                BusPin::new(shift_load, config.shift_load),
            ],
        }
    }

    fn pin(&mut self, line: Line) -> &mut BusPin<'d> {
        &mut self.pins[line.index()]
    }
}

impl Rp2040Lines<'static> {
    /// Take the configured pins out of a pin bank
    ///
    /// Nothing is taken unless every pin is free and distinct.
    pub fn from_bank(bank: &mut PinBank, config: &BusPinConfig) -> Result<Self, PinError> {
        if let Some(pin) = config.duplicate_pin() {
            return Err(PinError::AlreadyTaken(pin));
        }
        let numbers = config.pins().map(|p| p.pin);
        if let Some(&pin) = numbers.iter().find(|&&n| !bank.is_available(n)) {
            return Err(PinError::AlreadyTaken(pin));
        }

        let pins = [
            bank.take(numbers[0])?,
            bank.take(numbers[1])?,
            bank.take(numbers[2])?,
            bank.take(numbers[3])?,
            bank.take(numbers[4])?,
        ];

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "bus pins: clk={} sdo={} qh={} cs={} shld={}",
            numbers[0],
            numbers[1],
            numbers[2],
            numbers[3],
            numbers[4]
        );

        Ok(Self::new(pins, config))
    }
}

impl LineInterface for Rp2040Lines<'_> {
    type Error = Infallible;

    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error> {
        let pin = self.pin(line);
        let pull = if pin.config.pull_up { Pull::Up } else { Pull::None };
        pin.flex.set_pull(pull);
        match direction {
            Direction::Output => pin.flex.set_as_output(),
            Direction::Input => pin.flex.set_as_input(),
        }
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        let pin = self.pin(line);
        if level.is_high() != pin.config.inverted {
            pin.flex.set_high();
        } else {
            pin.flex.set_low();
        }
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        let pin = self.pin(line);
        let high = match line.direction() {
            Direction::Input => pin.flex.is_high(),
            Direction::Output => pin.flex.is_set_high(),
        };
        Ok(pin.to_logical(high))
    }
}

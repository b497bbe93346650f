//! Bus lines on STM32F0 GPIOs

use core::convert::Infallible;

use embassy_stm32::gpio::{AnyPin, Flex, Pull, Speed};
use embassy_stm32::Peri;
use vfd_core::config::{BusPinConfig, PinConfig};
use vfd_hal::{Direction, Level, Line, LineInterface};

struct BusPin<'d> {
    flex: Flex<'d>,
    config: PinConfig,
}

/// The five bus lines on STM32F0 pins
///
/// Output lines use the lowest slew rate; the bus is clocked by software.
pub struct Stm32f0Lines<'d> {
    pins: [BusPin<'d>; 5],
}

impl<'d> Stm32f0Lines<'d> {
    /// Build the lines from pins in bus line order
    ///
    /// `pins` must be ordered clock, data out, data in, chip select,
    /// shift/load. Only the inversion and pull-up flags of `config` are
    /// used here; pin numbers are already fixed by `pins`.
    pub fn new(pins: [Peri<'d, AnyPin>; 5], config: &BusPinConfig) -> Self {
        let configs = config.pins();
        let [clock, data_out, data_in, chip_select, shift_load] = pins;
        let pin = |peri: Peri<'d, AnyPin>, index: usize| BusPin {
            flex: Flex::new(peri),
            config: configs[index],
        };
        Self {
            pins: [
                pin(clock, 0),
                pin(data_out, 1),
                pin(data_in, 2),
                pin(chip_select, 3),
                pin(shift_load, 4),
            ],
        }
    }
}

impl LineInterface for Stm32f0Lines<'_> {
    type Error = Infallible;

    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error> {
        let pin = &mut self.pins[line.index()];
        match direction {
            Direction::Output => pin.flex.set_as_output(Speed::Low),
            Direction::Input => {
                let pull = if pin.config.pull_up { Pull::Up } else { Pull::None };
                pin.flex.set_as_input(pull);
            }
        }
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        let pin = &mut self.pins[line.index()];
        if level.is_high() != pin.config.inverted {
            pin.flex.set_high();
        } else {
            pin.flex.set_low();
        }
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        let pin = &mut self.pins[line.index()];
        let high = match line.direction() {
            Direction::Input => pin.flex.is_high(),
            Direction::Output => pin.flex.is_set_high(),
        };
        Ok(Level::from(high != pin.config.inverted))
    }
}

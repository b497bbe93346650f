//! Serial bus line interface
//!
//! The panel's M66004 and 74HC165 share one clock line. Data goes out on
//! `DataOut` framed by `ChipSelect`; button state comes back on `DataIn`
//! while `ShiftLoad` is held high.
//!
//! ```text
//!            ┌──────────┐        ┌──────────┐
//!  Clock ────┤ SCK      │───┬────┤ CLK      │
//!  DataOut ──┤ SI       │   │    │          │
//!  ChipSel ──┤ /CS      │   │    │      QH  ├──── DataIn
//!            │  M66004  │   │    │ 74HC165  │
//!            └──────────┘   │    │   SH/LD  ├──── ShiftLoad
//!                           │    └──────────┘
//! ```

use core::convert::Infallible;

use crate::gpio::{InputPin, Level, OutputPin};

/// Logical line of the serial bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Serial clock for both M66004 and '165
    Clock,
    /// Serial data to the M66004
    DataOut,
    /// Serial out (QH) from the '165
    DataIn,
    /// Chip select of the M66004, active low
    ChipSelect,
    /// Shift/load of the '165, high while reading
    ShiftLoad,
}

impl Line {
    /// All lines, in bring-up order
    pub const ALL: [Line; 5] = [
        Line::Clock,
        Line::DataOut,
        Line::DataIn,
        Line::ChipSelect,
        Line::ShiftLoad,
    ];

    /// Direction the host drives this line in
    pub const fn direction(self) -> Direction {
        match self {
            Line::DataIn => Direction::Input,
            _ => Direction::Output,
        }
    }

    /// Level an output line rests at between operations
    ///
    /// Returns `None` for the input line.
    pub const fn idle_level(self) -> Option<Level> {
        match self {
            Line::Clock => Some(Level::High),
            Line::DataOut => Some(Level::Low),
            Line::DataIn => None,
            Line::ChipSelect => Some(Level::High),
            Line::ShiftLoad => Some(Level::Low),
        }
    }

    /// Stable index (0-4), usable for per-line tables
    pub const fn index(self) -> usize {
        match self {
            Line::Clock => 0,
            Line::DataOut => 1,
            Line::DataIn => 2,
            Line::ChipSelect => 3,
            Line::ShiftLoad => 4,
        }
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Host reads the line
    Input,
    /// Host drives the line
    Output,
}

/// Access to the five bus lines
///
/// This is the only way the protocol core touches hardware. Each call is an
/// immediate, unbuffered operation on one line.
pub trait LineInterface {
    /// Error type for line operations
    type Error;

    /// Configure the direction of a line
    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error>;

    /// Drive a line to a level
    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error>;

    /// Sample the current level of a line
    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error>;
}

impl<T: LineInterface + ?Sized> LineInterface for &mut T {
    type Error = T::Error;

    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error> {
        T::configure_line(self, line, direction)
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        T::set_line(self, line, level)
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        T::read_line(self, line)
    }
}

/// Line interface built from five individual pins
///
/// Pin directions are fixed by the pin types, so `configure_line` does
/// nothing. Driving `DataIn` is ignored; reading an output line returns the
/// level it is set to.
pub struct PinLines<CLK, SDO, QH, CS, SHLD> {
    clock: CLK,
    data_out: SDO,
    data_in: QH,
    chip_select: CS,
    shift_load: SHLD,
}

impl<CLK, SDO, QH, CS, SHLD> PinLines<CLK, SDO, QH, CS, SHLD>
where
    CLK: OutputPin,
    SDO: OutputPin,
    QH: InputPin,
    CS: OutputPin,
    SHLD: OutputPin,
{
    /// Bundle the bus pins
    pub fn new(clock: CLK, data_out: SDO, data_in: QH, chip_select: CS, shift_load: SHLD) -> Self {
        Self {
            clock,
            data_out,
            data_in,
            chip_select,
            shift_load,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (CLK, SDO, QH, CS, SHLD) {
        (
            self.clock,
            self.data_out,
            self.data_in,
            self.chip_select,
            self.shift_load,
        )
    }
}

impl<CLK, SDO, QH, CS, SHLD> LineInterface for PinLines<CLK, SDO, QH, CS, SHLD>
where
    CLK: OutputPin,
    SDO: OutputPin,
    QH: InputPin,
    CS: OutputPin,
    SHLD: OutputPin,
{
    type Error = Infallible;

    fn configure_line(&mut self, _line: Line, _direction: Direction) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        match line {
            Line::Clock => self.clock.set_level(level),
            Line::DataOut => self.data_out.set_level(level),
            Line::DataIn => {}
            Line::ChipSelect => self.chip_select.set_level(level),
            Line::ShiftLoad => self.shift_load.set_level(level),
        }
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        let high = match line {
            Line::Clock => self.clock.is_set_high(),
            Line::DataOut => self.data_out.is_set_high(),
            Line::DataIn => self.data_in.is_high(),
            Line::ChipSelect => self.chip_select.is_set_high(),
            Line::ShiftLoad => self.shift_load.is_set_high(),
        };
        Ok(Level::from(high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockOut {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockOut {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockIn {
        high: bool,
    }

    impl InputPin for MockIn {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    fn lines(
        data_in_high: bool,
    ) -> PinLines<MockOut, MockOut, MockIn, MockOut, MockOut> {
        PinLines::new(
            MockOut::default(),
            MockOut::default(),
            MockIn { high: data_in_high },
            MockOut::default(),
            MockOut::default(),
        )
    }

    #[test]
    fn test_idle_levels_match_directions() {
        for line in Line::ALL {
            match line.direction() {
                Direction::Input => assert!(line.idle_level().is_none()),
                Direction::Output => assert!(line.idle_level().is_some()),
            }
        }
        assert_eq!(Line::ChipSelect.idle_level(), Some(Level::High));
        assert_eq!(Line::Clock.idle_level(), Some(Level::High));
    }

    #[test]
    fn test_indices_are_unique() {
        let mut seen = [false; 5];
        for line in Line::ALL {
            assert!(!seen[line.index()]);
            seen[line.index()] = true;
        }
    }

    #[test]
    fn test_pin_lines_routes_levels() {
        let mut bus = lines(true);

        bus.set_line(Line::Clock, Level::High).unwrap();
        bus.set_line(Line::ChipSelect, Level::Low).unwrap();
        assert_eq!(bus.read_line(Line::Clock).unwrap(), Level::High);
        assert_eq!(bus.read_line(Line::ChipSelect).unwrap(), Level::Low);
        assert_eq!(bus.read_line(Line::DataIn).unwrap(), Level::High);

        let (clock, data_out, _, chip_select, shift_load) = bus.release();
        assert_eq!(clock.writes, 1);
        assert_eq!(chip_select.writes, 1);
        assert_eq!(data_out.writes, 0);
        assert_eq!(shift_load.writes, 0);
    }

    #[test]
    fn test_pin_lines_ignores_writes_to_input() {
        let mut bus = lines(false);
        bus.set_line(Line::DataIn, Level::High).unwrap();
        assert_eq!(bus.read_line(Line::DataIn).unwrap(), Level::Low);
    }
}

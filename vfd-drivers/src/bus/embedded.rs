//! Line interface over embedded-hal 1.0 pins
//!
//! For targets whose HAL already implements `embedded_hal::digital` (esp-hal,
//! nrf-hal, linux-embedded-hal, ...). Pin errors are reported together with
//! the line they happened on.

use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin};
use vfd_hal::{Direction, Level, Line, LineInterface};

/// Reason a line operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineErrorKind {
    /// The pin driver reported an error
    Pin(ErrorKind),
    /// Attempt to drive the input line
    NotAnOutput,
    /// Attempt to configure a line against its wired direction
    WrongDirection,
}

/// Error from an embedded-hal backed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineError {
    /// Line the operation targeted
    pub line: Line,
    /// What went wrong
    pub kind: LineErrorKind,
}

impl LineError {
    fn pin<E: embedded_hal::digital::Error>(line: Line, err: E) -> Self {
        Self {
            line,
            kind: LineErrorKind::Pin(err.kind()),
        }
    }
}

/// Bus lines made of embedded-hal pins
///
/// Output levels are remembered so `read_line` on an output line does not
/// need `StatefulOutputPin`.
pub struct EmbeddedHalLines<CLK, SDO, QH, CS, SHLD> {
    clock: CLK,
    data_out: SDO,
    data_in: QH,
    chip_select: CS,
    shift_load: SHLD,
    levels: [Level; 5],
}

impl<CLK, SDO, QH, CS, SHLD> EmbeddedHalLines<CLK, SDO, QH, CS, SHLD>
where
    CLK: OutputPin,
    SDO: OutputPin,
    QH: InputPin,
    CS: OutputPin,
    SHLD: OutputPin,
{
    /// Bundle the bus pins
    ///
    /// Pins must already be configured in their wired direction; levels are
    /// set by [`SerialBus::configure`](super::SerialBus::configure).
    pub fn new(clock: CLK, data_out: SDO, data_in: QH, chip_select: CS, shift_load: SHLD) -> Self {
        Self {
            clock,
            data_out,
            data_in,
            chip_select,
            shift_load,
            levels: [Level::Low; 5],
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

fn drive<P: OutputPin>(pin: &mut P, line: Line, level: Level) -> Result<(), LineError> {
    let result = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };
    result.map_err(|e| LineError::pin(line, e))
}

impl<CLK, SDO, QH, CS, SHLD> LineInterface for EmbeddedHalLines<CLK, SDO, QH, CS, SHLD>
where
    CLK: OutputPin,
    SDO: OutputPin,
    QH: InputPin,
    CS: OutputPin,
    SHLD: OutputPin,
{
    type Error = LineError;

    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error> {
        if direction != line.direction() {
            return Err(LineError {
                line,
                kind: LineErrorKind::WrongDirection,
            });
        }
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        match line {
            Line::Clock => drive(&mut self.clock, line, level)?,
            Line::DataOut => drive(&mut self.data_out, line, level)?,
            Line::ChipSelect => drive(&mut self.chip_select, line, level)?,
            Line::ShiftLoad => drive(&mut self.shift_load, line, level)?,
            Line::DataIn => {
                return Err(LineError {
                    line,
                    kind: LineErrorKind::NotAnOutput,
                })
            }
        }
        self.levels[line.index()] = level;
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        match line {
            Line::DataIn => self
                .data_in
                .is_high()
                .map(Level::from)
                .map_err(|e| LineError::pin(line, e)),
            _ => Ok(self.levels[line.index()]),
        }
    }
}

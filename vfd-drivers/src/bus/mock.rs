//! Recording line interface for unit tests

use heapless::Vec;
use vfd_hal::{Direction, Level, Line, LineInterface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

/// Line interface that records every write and replays scripted input
pub(crate) struct MockLines {
    levels: [Level; 5],
    directions: [Option<Direction>; 5],
    /// Every `set_line` call, in order
    pub events: Vec<(Line, Level), 2048>,
    /// Bits returned on `DataIn`, LSB first
    pub input: u8,
    reads: u8,
    /// Fail the n-th `set_line` call (0-based), once
    pub fail_write: Option<usize>,
    writes: usize,
}

impl MockLines {
    pub fn new() -> Self {
        Self {
            levels: [Level::Low; 5],
            directions: [None; 5],
            events: Vec::new(),
            input: 0,
            reads: 0,
            fail_write: None,
            writes: 0,
        }
    }

    pub fn with_input(input: u8) -> Self {
        Self {
            input,
            ..Self::new()
        }
    }

    pub fn level(&self, line: Line) -> Level {
        self.levels[line.index()]
    }

    pub fn direction(&self, line: Line) -> Option<Direction> {
        self.directions[line.index()]
    }

    pub fn count(&self, line: Line, level: Level) -> usize {
        self.events
            .iter()
            .filter(|&&(l, lv)| l == line && lv == level)
            .count()
    }

    /// Decode recorded writes back into transmissions
    ///
    /// Bits are taken from `DataOut` at each clock rising edge inside a
    /// chip-select window.
    pub fn frames(&self) -> Vec<Vec<u8, 32>, 32> {
        let mut frames = Vec::new();
        let mut clock = Level::High;
        let mut data = Level::Low;
        let mut current: Option<Vec<u8, 32>> = None;
        let mut byte = 0u8;
        let mut bits = 0u8;

        for &(line, level) in self.events.iter() {
            match line {
                Line::ChipSelect if level.is_low() => {
                    current = Some(Vec::new());
                    bits = 0;
                }
                Line::ChipSelect => {
                    if let Some(frame) = current.take() {
                        frames.push(frame).expect("too many frames");
                    }
                }
                Line::DataOut => data = level,
                Line::Clock => {
                    let rising = clock.is_low() && level.is_high();
                    clock = level;
                    if let (true, Some(frame)) = (rising, current.as_mut()) {
                        byte = (byte << 1) | data.is_high() as u8;
                        bits += 1;
                        if bits == 8 {
                            frame.push(byte).expect("frame too long");
                            bits = 0;
                        }
                    }
                }
                _ => {}
            }
        }
        frames
    }
}

impl LineInterface for MockLines {
    type Error = MockError;

    fn configure_line(&mut self, line: Line, direction: Direction) -> Result<(), Self::Error> {
        self.directions[line.index()] = Some(direction);
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        let n = self.writes;
        self.writes += 1;
        if self.fail_write == Some(n) {
            return Err(MockError);
        }
        self.levels[line.index()] = level;
        self.events.push((line, level)).expect("event log full");
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        if line != Line::DataIn {
            return Ok(self.levels[line.index()]);
        }
        let bit = self.input & (1 << (self.reads % 8)) != 0;
        self.reads = self.reads.wrapping_add(1);
        Ok(Level::from(bit))
    }
}

//! Shared helpers for the bus-level integration tests

#![allow(dead_code)]

use vfd_hal::{Direction, Level, Line, LineInterface};

/// Line interface that logs every write and replays a button byte
#[derive(Default)]
pub struct Probe {
    pub events: Vec<(Line, Level)>,
    pub input: u8,
    levels: [Option<Level>; 5],
    reads: u32,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: u8) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn level(&self, line: Line) -> Option<Level> {
        self.levels[line.index()]
    }

    pub fn count(&self, line: Line, level: Level) -> usize {
        self.events
            .iter()
            .filter(|&&(l, lv)| l == line && lv == level)
            .count()
    }

    /// Number of clock low-to-high transitions
    pub fn rising_edges(&self) -> usize {
        let mut clock = Level::High;
        let mut edges = 0;
        for &(line, level) in &self.events {
            if line == Line::Clock {
                if clock.is_low() && level.is_high() {
                    edges += 1;
                }
                clock = level;
            }
        }
        edges
    }

    /// Data-out level at each rising clock edge, in order
    pub fn sampled_bits(&self) -> Vec<bool> {
        let mut clock = Level::High;
        let mut data = Level::Low;
        let mut bits = Vec::new();
        for &(line, level) in &self.events {
            match line {
                Line::DataOut => data = level,
                Line::Clock => {
                    if clock.is_low() && level.is_high() {
                        bits.push(data.is_high());
                    }
                    clock = level;
                }
                _ => {}
            }
        }
        bits
    }

    /// Bytes received by the M66004, one entry per chip-select window
    pub fn transmissions(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        let mut clock = Level::High;
        let mut data = Level::Low;
        let mut byte = 0u8;
        let mut bits = 0;

        for &(line, level) in &self.events {
            match line {
                Line::ChipSelect if level.is_low() => {
                    current = Some(Vec::new());
                    bits = 0;
                }
                Line::ChipSelect => frames.extend(current.take()),
                Line::DataOut => data = level,
                Line::Clock => {
                    let rising = clock.is_low() && level.is_high();
                    clock = level;
                    if let (true, Some(frame)) = (rising, current.as_mut()) {
                        byte = (byte << 1) | u8::from(data.is_high());
                        bits += 1;
                        if bits == 8 {
                            frame.push(byte);
                            bits = 0;
                        }
                    }
                }
                _ => {}
            }
        }
        frames
    }

    pub fn clear_log(&mut self) {
        self.events.clear();
    }
}

impl LineInterface for Probe {
    type Error = core::convert::Infallible;

    fn configure_line(&mut self, _line: Line, _direction: Direction) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        self.levels[line.index()] = Some(level);
        self.events.push((line, level));
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<Level, Self::Error> {
        if line != Line::DataIn {
            return Ok(self.levels[line.index()].unwrap_or(Level::Low));
        }
        let bit = self.input >> (self.reads % 8) & 1 != 0;
        self.reads += 1;
        Ok(Level::from(bit))
    }
}

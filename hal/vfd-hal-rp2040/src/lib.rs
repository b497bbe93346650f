//! RP2040 support for the VFD panel
//!
//! This crate provides the RP2040 side of the serial bus:
//!
//! - Pin string parsing for config-driven setup
//! - Pin bank for taking GPIOs by number at runtime
//! - `LineInterface` implementation on embassy-rp `Flex` pins

#![no_std]

pub mod gpio;
pub mod lines;
pub mod pins;

pub use lines::Rp2040Lines;
pub use pins::{PinBank, PinError};

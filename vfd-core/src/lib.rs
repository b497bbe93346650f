//! Board-agnostic core for the VFD panel
//!
//! This crate contains everything about the panel that does not depend on
//! how the bus lines are wired to a particular MCU:
//!
//! - M66004 command byte table
//! - Button sample type for the 74HC165 bank
//! - Bus and display traits implemented by `vfd-drivers`
//! - Configuration type definitions
//! - Error types

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod sample;
pub mod traits;

pub use error::{DimmerUpdate, DisplayError};
pub use sample::ButtonSample;

/// Number of character cells on the panel
pub const DISPLAY_WIDTH: usize = 16;

/// Highest dimmer level accepted by the panel
pub const MAX_DIMMER: u8 = 8;

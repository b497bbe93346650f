//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vfd-core for the VFD panel:
//!
//! - Bit-banged serial bus (M66004 transmitter, 74HC165 sampler)
//! - M66004 display command layer
//! - Board facade sharing one bus between display and buttons
//! - Line adapter for any embedded-hal 1.0 pin set

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod bus;
pub mod display;

pub use board::VfdBoard;
pub use bus::{EmbeddedHalLines, LineError, NoDelay, SerialBus};
pub use display::M66004;

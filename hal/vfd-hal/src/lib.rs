//! VFD panel Hardware Abstraction Layer
//!
//! This crate defines the line interface that the serial protocol core is
//! written against. Chip-specific HALs (RP2040, STM32F0, ...) implement it,
//! so the same driver code runs unchanged on every board carrying the panel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vfd-drivers (bus, M66004, buttons)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfd-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   vfd-hal-    │       │   vfd-hal-    │
//! │    rp2040     │       │   stm32f0     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`line::LineInterface`] - The five-line serial bus
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O, bundled into a
//!   line interface by [`line::PinLines`]

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod line;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
pub use line::{Direction, Line, LineInterface, PinLines};

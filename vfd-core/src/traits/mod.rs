//! Hardware abstraction traits
//!
//! These traits define the interface between the display command layer
//! and the bus implementation that moves the bits.

pub mod bus;
pub mod display;

pub use bus::{ButtonSampler, Transmitter};
pub use display::{CharacterDisplay, CharacterDisplayExt};

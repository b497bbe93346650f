//! STM32F0 support for the VFD panel
//!
//! Supports the STM32F042 parts through embassy-stm32:
//!
//! - `stm32f042f6` - STM32F042F6P6
//! - `stm32f042k6` - STM32F042K6T6
//! - `defmt` - Enable debug formatting support
//!
//! Pins are taken by the firmware from embassy's `Peripherals` and handed
//! to [`Stm32f0Lines`] in bus line order.

#![no_std]

pub mod gpio;
pub mod lines;

pub use lines::Stm32f0Lines;

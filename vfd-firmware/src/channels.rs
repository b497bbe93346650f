//! Inter-task communication
//!
//! The button task owns sampling; the display task owns rendering. Both
//! reach the bus through the shared board mutex.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use vfd_core::ButtonSample;
use vfd_drivers::VfdBoard;
use vfd_hal_rp2040::Rp2040Lines;

/// Channel capacity for button changes
const BUTTON_CHANNEL_SIZE: usize = 4;

/// Panel board as wired on this firmware
pub type Board = VfdBoard<Rp2040Lines<'static>, Delay>;

/// Board shared by all tasks; one lock spans one whole bus operation
pub type SharedBoard = Mutex<CriticalSectionRawMutex, Board>;

/// Button samples that differ from the previous one
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonSample, BUTTON_CHANNEL_SIZE> =
    Channel::new();

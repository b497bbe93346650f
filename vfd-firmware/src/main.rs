//! VFD panel demo firmware
//!
//! Brings up the M66004 display and the 74HC165 button bank on an RP2040,
//! shows a banner, then mirrors the button state on the display. Pin
//! assignment comes from board.toml.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vfd_core::traits::{CharacterDisplay, CharacterDisplayExt};
use vfd_core::DisplayError;
use vfd_drivers::{SerialBus, VfdBoard};
use vfd_hal_rp2040::{PinBank, Rp2040Lines};

use crate::channels::{Board, SharedBoard};

mod channels;
mod config;
mod tasks;

/// Time the banner stays up before button output takes over
const BANNER_MS: u64 = 1500;

static BOARD: StaticCell<SharedBoard> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("VFD panel firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);

    let pins = match config::bus_pins() {
        Ok(pins) => pins,
        Err(e) => defmt::panic!("bad pin string in board config: {}", e.0),
    };
    let lines = match Rp2040Lines::from_bank(&mut bank, &pins) {
        Ok(lines) => lines,
        Err(e) => defmt::panic!("bus pins unavailable: {}", e),
    };

    let bus = SerialBus::with_delay(lines, Delay, config::bus_config());
    let mut board = VfdBoard::new(bus);

    if let Err(e) = bring_up(&mut board) {
        error!("Panel bring-up failed: {}", e);
    }
    Timer::after_millis(BANNER_MS).await;

    let board = BOARD.init(Mutex::new(board));

    spawner.spawn(tasks::button_task(board)).unwrap();
    spawner.spawn(tasks::display_task(board)).unwrap();

    info!("All tasks spawned");
}

/// Initialize the panel and show the banner
fn bring_up(board: &mut Board) -> Result<(), DisplayError<core::convert::Infallible>> {
    board.init()?;

    let display = board.display();
    display.clear()?;
    display.clear_decimal_dots()?;
    display.set_visible(true)?;
    let update = display.set_dimmer(config::DIMMER)?;
    display.write_text(config::BANNER)?;

    info!("Panel ready, dimmer {}", update);
    Ok(())
}

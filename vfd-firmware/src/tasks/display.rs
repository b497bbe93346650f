//! Display task
//!
//! Shows the latest button sample as binary, most significant bit on the
//! left, and lights the decimal dot under every set bit.
//!
//! ```text
//!  cell:  0123456789ABCDEF
//!         KEYS    00100101
//! ```

use defmt::*;
use vfd_core::command::BLANK;
use vfd_core::traits::CharacterDisplay;
use vfd_core::{ButtonSample, DISPLAY_WIDTH};

use crate::channels::{Board, SharedBoard, BUTTON_CHANNEL};

const LABEL: &[u8] = b"KEYS";

/// Cell showing bit 0
const LSB_CELL: usize = DISPLAY_WIDTH - 1;

/// Display task - renders button changes
#[embassy_executor::task]
pub async fn display_task(board: &'static SharedBoard) {
    info!("Display task started");

    loop {
        let sample = BUTTON_CHANNEL.receive().await;
        let mut board = board.lock().await;
        if let Err(e) = show_sample(&mut board, sample) {
            warn!("Display update failed: {}", e);
        }
    }
}

fn render(sample: ButtonSample) -> [u8; DISPLAY_WIDTH] {
    let mut text = [BLANK; DISPLAY_WIDTH];
    text[..LABEL.len()].copy_from_slice(LABEL);
    for bit in 0..8u8 {
        text[LSB_CELL - bit as usize] = if sample.is_set(bit) { b'1' } else { b'0' };
    }
    text
}

fn show_sample(
    board: &mut Board,
    sample: ButtonSample,
) -> Result<(), vfd_core::DisplayError<core::convert::Infallible>> {
    let display = board.display();
    display.write_string(&render(sample))?;

    for bit in 0..8u8 {
        // Dot positions are 1-based
        let position = (LSB_CELL - bit as usize + 1) as u8;
        display.set_decimal_dot(position, sample.is_set(bit))?;
    }
    Ok(())
}

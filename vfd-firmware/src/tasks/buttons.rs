//! Button polling task
//!
//! Samples the 74HC165 bank at a fixed rate and forwards changes. No
//! debouncing: a bouncing contact shows up as several changes.

use defmt::*;
use embassy_time::{Duration, Ticker};
use vfd_core::ButtonSample;

use crate::channels::{SharedBoard, BUTTON_CHANNEL};

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 20;

/// Button task - polls the button bank and reports changes
#[embassy_executor::task]
pub async fn button_task(board: &'static SharedBoard) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut last = ButtonSample::default();

    loop {
        ticker.next().await;

        let sample = match board.lock().await.read_buttons() {
            Ok(sample) => sample,
            Err(never) => match never {},
        };

        if sample != last {
            debug!(
                "buttons {=u8:#b} (changed {=u8:#b})",
                sample.bits(),
                sample.changed_from(last).bits()
            );
            last = sample;
            BUTTON_CHANNEL.send(sample).await;
        }
    }
}

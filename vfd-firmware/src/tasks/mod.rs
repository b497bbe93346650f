//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod buttons;
pub mod display;

pub use buttons::button_task;
pub use display::display_task;

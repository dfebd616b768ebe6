//! Session countdown timing.

pub mod countdown;

pub use countdown::{SessionTimer, TimerEvent, TimerStatus};

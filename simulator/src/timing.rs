//! Timing collaborator for the simulator.
//!
//! Uses `std::thread::sleep`, which is not available in the `no_std` engine
//! crate, so it lives here.

use std::thread;
use std::time::{Duration, Instant};

use weather_common::input::Timing;

/// Blocking wait backed by the OS scheduler.
pub struct SleepTiming;

impl Timing for SleepTiming {
    fn wait(
        &mut self,
        duration: Duration,
    ) {
        thread::sleep(duration);
    }
}

/// Wait out the rest of the frame that started at `frame_start`.
pub fn pace<T: Timing>(
    timing: &mut T,
    frame_start: Instant,
    frame_time: Duration,
) {
    if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
        timing.wait(remaining);
    }
}

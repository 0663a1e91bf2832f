//! Toggle input and timing collaborators.
//!
//! The engine itself never waits and never debounces. Hosts supply an input
//! pin through [`ToggleInput`] and a blocking wait through [`Timing`], and
//! [`poll_toggle`] turns raw samples into one event per physical press:
//!
//! 1. Sample the input; not asserted means no press.
//! 2. Wait [`DEBOUNCE_TIME`] and sample again to reject contact bounce.
//! 3. Hold here until the switch is released, so one press is one event.

use core::time::Duration;

use crate::config::{DEBOUNCE_TIME, FRAME_TIME};

/// A single "toggle asserted" signal (e.g. an active-low switch).
pub trait ToggleInput {
    /// `true` while the switch is pressed.
    fn is_asserted(&mut self) -> bool;
}

/// Blocking wait of a known duration.
///
/// Targets may use a scheduler sleep or a calibrated busy loop.
pub trait Timing {
    fn wait(
        &mut self,
        duration: Duration,
    );
}

/// Sample the toggle once. Returns `true` exactly once per debounced press,
/// after the switch has been released.
pub fn poll_toggle<I, T>(
    input: &mut I,
    timing: &mut T,
) -> bool
where
    I: ToggleInput,
    T: Timing,
{
    if !input.is_asserted() {
        return false;
    }

    timing.wait(DEBOUNCE_TIME);
    if !input.is_asserted() {
        return false;
    }

    while input.is_asserted() {
        timing.wait(FRAME_TIME);
    }
    true
}

//! Host loop body shared by the firmware targets.
//!
//! One iteration samples the toggle, ticks the engine and then paces:
//!
//! ```text
//! poll_toggle ──press──▶ on_toggle_pressed
//!      │                        │
//!      └───────────▶ tick ◀─────┘
//!                     │
//!                wait(FRAME_TIME)
//! ```

use crate::config::FRAME_TIME;
use crate::engine::{SceneEngine, TickReport};
use crate::input::{Timing, ToggleInput, poll_toggle};
use crate::surface::DisplaySurface;

/// Run one loop iteration. Call forever.
pub fn run_iteration<S, I, T>(
    engine: &mut SceneEngine,
    surface: &mut S,
    input: &mut I,
    timing: &mut T,
) -> TickReport
where
    S: DisplaySurface,
    I: ToggleInput,
    T: Timing,
{
    if poll_toggle(input, timing) {
        engine.on_toggle_pressed();
    }
    let report = engine.tick_reporting(surface);
    timing.wait(FRAME_TIME);
    report
}

//! Toggle switch and timing collaborators for the engine loop.

use core::time::Duration;

use embassy_rp::gpio::Input;
use weather_common::input::{Timing, ToggleInput};

/// Active-low push button with the internal pull-up enabled.
pub struct Button<'d> {
    pin: Input<'d>,
}

impl<'d> Button<'d> {
    pub const fn new(pin: Input<'d>) -> Self { Self { pin } }
}

impl ToggleInput for Button<'_> {
    fn is_asserted(&mut self) -> bool { self.pin.is_low() }
}

/// Busy-wait on the embassy time driver.
///
/// The main loop never yields, matching the single-threaded superloop the
/// engine is written for.
pub struct BlockingTiming;

impl Timing for BlockingTiming {
    fn wait(
        &mut self,
        duration: Duration,
    ) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        embassy_time::block_for(embassy_time::Duration::from_micros(micros));
    }
}

//! Frame-throttled icon blink animation.
//!
//! The icon alternates between a normal and a blink frame, switching every
//! [`ANIMATION_PERIOD`] ticks. The animator redraws only when the phase
//! actually changes: at most one icon blit every `ANIMATION_PERIOD` ticks,
//! never one per tick.
//!
//! ```text
//! tick:   1 .. 9 | 10 .. 19 | 20 .. 29 | ...
//! phase:  Normal | Blink    | Normal   | ...
//! draw:   ^ tick 1 (unset)  ^ 10       ^ 20
//! ```

use embedded_graphics::pixelcolor::Rgb565;

use crate::assets;
use crate::config::ANIMATION_PERIOD;
use crate::scaler::{IconPlacement, draw_centered_scaled};
use crate::scene::Scene;
use crate::surface::DisplaySurface;

/// Blink sub-state of a scene's icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Normal,
    Blink,
}

impl Phase {
    /// Phase for a frame counter value.
    #[inline]
    pub const fn for_frame(frame: u32) -> Self {
        if (frame / ANIMATION_PERIOD).is_multiple_of(2) { Self::Normal } else { Self::Blink }
    }
}

/// Blink timing state.
///
/// Owned by [`SceneEngine`](crate::engine::SceneEngine) and only mutated
/// through [`AnimationState::advance`] and [`AnimationState::reset`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AnimationState {
    /// Ticks since the last reset.
    frame_counter: u32,
    /// Phase currently on screen; `None` until the first draw.
    last_drawn_phase: Option<Phase>,
}

impl AnimationState {
    /// Fresh state: no ticks counted, nothing drawn.
    pub const fn new() -> Self {
        Self {
            frame_counter: 0,
            last_drawn_phase: None,
        }
    }

    #[inline]
    pub const fn frame_counter(&self) -> u32 { self.frame_counter }

    #[inline]
    pub const fn last_drawn_phase(&self) -> Option<Phase> { self.last_drawn_phase }

    /// Forget timing and the drawn phase. The next advance draws the normal
    /// frame.
    #[inline]
    pub const fn reset(&mut self) { *self = Self::new(); }

    /// Count one tick and blit the icon for `scene` if the phase changed.
    ///
    /// Returns the phase that was drawn, or `None` when nothing was drawn.
    pub fn advance<S>(
        &mut self,
        surface: &mut S,
        scene: Scene,
        placement: IconPlacement,
    ) -> Option<Phase>
    where
        S: DisplaySurface,
    {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let phase = Phase::for_frame(self.frame_counter);

        if self.last_drawn_phase == Some(phase) {
            return None;
        }

        let icon = assets::icon(scene, phase);
        draw_centered_scaled(surface, icon, background_of(scene), placement);
        self.last_drawn_phase = Some(phase);

        #[cfg(feature = "defmt")]
        defmt::trace!("icon {} -> {}", scene, phase);

        Some(phase)
    }
}

#[inline]
fn background_of(scene: Scene) -> Rgb565 { scene.background() }

//! Scene state machine.
//!
//! Tracks the active scene and whether the static background needs repainting,
//! and dispatches each tick to the renderer and the animator.
//!
//! # Tick Order
//!
//! | Step | When | Action |
//! |------|------|--------|
//! | 1 | `needs_redraw` | [`draw_static`] full repaint, clear flag, reset animation |
//! | 2 | Always | [`AnimationState::advance`] (draws only on phase change) |
//!
//! Step 1 finishes before step 2 starts, so the icon is never blitted onto a
//! stale or half-drawn background.
//!
//! # Animation Reset
//!
//! The animation state is reset together with every static repaint. A scene
//! that was just entered therefore starts in the normal phase, and its icon is
//! drawn in the same tick as its background.

use crate::animator::{AnimationState, Phase};
use crate::renderer::draw_static;
use crate::scaler::IconPlacement;
use crate::scene::Scene;
use crate::surface::DisplaySurface;

/// Scene state plus the blink animation it owns.
#[derive(Clone, Copy, Debug)]
pub struct SceneEngine {
    scene: Scene,
    /// Set on init and on every scene change; cleared by the next tick.
    needs_redraw: bool,
    animation: AnimationState,
    placement: IconPlacement,
}

impl SceneEngine {
    /// Engine on the sunny scene with a full redraw pending.
    pub fn new() -> Self { Self::with_placement(IconPlacement::default()) }

    /// Same as [`SceneEngine::new`] with a custom icon anchor or scale.
    pub const fn with_placement(placement: IconPlacement) -> Self {
        Self {
            scene: Scene::Sunny,
            needs_redraw: true,
            animation: AnimationState::new(),
            placement,
        }
    }

    /// Return to the initial state: sunny scene, redraw pending.
    pub const fn init(&mut self) {
        self.scene = Scene::Sunny;
        self.needs_redraw = true;
        self.animation.reset();
    }

    #[inline]
    pub const fn scene(&self) -> Scene { self.scene }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.needs_redraw }

    #[inline]
    pub const fn animation(&self) -> &AnimationState { &self.animation }

    #[inline]
    pub const fn placement(&self) -> IconPlacement { self.placement }

    /// Advance to the next scene. Call once per debounced press.
    pub fn on_toggle_pressed(&mut self) {
        self.scene = self.scene.next();
        self.needs_redraw = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("scene -> {}", self.scene);
    }

    /// Run one frame: repaint if needed, then advance the icon animation.
    pub fn tick<S>(
        &mut self,
        surface: &mut S,
    ) where
        S: DisplaySurface,
    {
        self.tick_reporting(surface);
    }

    /// [`SceneEngine::tick`], also reporting what was drawn. Hosts use this
    /// for logging.
    pub fn tick_reporting<S>(
        &mut self,
        surface: &mut S,
    ) -> TickReport
    where
        S: DisplaySurface,
    {
        let redrew_static = self.needs_redraw;
        if redrew_static {
            draw_static(surface, self.scene);
            self.needs_redraw = false;
            self.animation.reset();
        }

        let icon_phase = self.animation.advance(surface, self.scene, self.placement);

        TickReport {
            redrew_static,
            icon_phase,
        }
    }
}

impl Default for SceneEngine {
    fn default() -> Self { Self::new() }
}

/// What one tick drew.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickReport {
    /// The static background and text were repainted.
    pub redrew_static: bool,
    /// Icon phase blitted this tick, if any.
    pub icon_phase: Option<Phase>,
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::config::ANIMATION_PERIOD;
    use crate::testing::{Call, Recorder};

    #[test]
    fn test_engine_new() {
        let engine = SceneEngine::new();
        assert_eq!(engine.scene(), Scene::Sunny);
        assert!(engine.needs_redraw());
        assert_eq!(engine.animation(), &AnimationState::new());
        assert_eq!(engine.placement(), IconPlacement::default());
    }

    #[test]
    fn test_toggle_cycles_scenes() {
        let mut engine = SceneEngine::new();
        engine.on_toggle_pressed();
        assert_eq!(engine.scene(), Scene::Cloudy);
        engine.on_toggle_pressed();
        assert_eq!(engine.scene(), Scene::Rainy);
        engine.on_toggle_pressed();
        assert_eq!(engine.scene(), Scene::Sunny);
    }

    #[test]
    fn test_three_toggles_return_from_any_scene() {
        let mut engine = SceneEngine::new();
        for _ in 0..Scene::COUNT {
            let start = engine.scene();
            for _ in 0..3 {
                engine.on_toggle_pressed();
            }
            assert_eq!(engine.scene(), start);
            engine.on_toggle_pressed();
        }
    }

    #[test]
    fn test_redraw_flag_lifecycle() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();
        assert!(engine.needs_redraw());

        engine.tick(&mut surface);
        assert!(!engine.needs_redraw());

        for _ in 0..25 {
            engine.tick(&mut surface);
            assert!(!engine.needs_redraw());
        }

        engine.on_toggle_pressed();
        assert!(engine.needs_redraw());
        engine.tick(&mut surface);
        assert!(!engine.needs_redraw());
    }

    #[test]
    fn test_static_redraw_only_when_flagged() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();

        engine.tick(&mut surface);
        assert_eq!(surface.fill_screen_count(), 1);

        for _ in 0..3 * ANIMATION_PERIOD {
            engine.tick(&mut surface);
        }
        assert_eq!(surface.fill_screen_count(), 1);

        engine.on_toggle_pressed();
        engine.tick(&mut surface);
        assert_eq!(surface.fill_screen_count(), 2);
        assert_eq!(surface.calls.iter().rev().find_map(|c| match c {
            Call::FillScreen(color) => Some(*color),
            _ => None,
        }), Some(Scene::Cloudy.background()));
    }

    #[test]
    fn test_static_redraw_precedes_icon() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();
        engine.tick(&mut surface);

        let first_rect = surface
            .calls
            .iter()
            .position(|c| matches!(c, Call::FillRect(..)))
            .unwrap();
        let last_text = surface
            .calls
            .iter()
            .rposition(|c| matches!(c, Call::DrawString(..)))
            .unwrap();
        assert!(matches!(surface.calls[0], Call::FillScreen(_)));
        assert!(last_text < first_rect);
    }

    #[test]
    fn test_icon_drawn_with_every_repaint() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();

        // Leave sunny mid-way through its blink phase
        for _ in 0..ANIMATION_PERIOD + 3 {
            engine.tick(&mut surface);
        }
        assert_eq!(engine.animation().last_drawn_phase(), Some(Phase::Blink));

        engine.on_toggle_pressed();
        surface.clear();
        let report = engine.tick_reporting(&mut surface);

        assert!(report.redrew_static);
        assert_eq!(report.icon_phase, Some(Phase::Normal));
        assert_eq!(surface.fill_rect_count(), 400);
        assert_eq!(engine.animation().frame_counter(), 1);
    }

    #[test]
    fn test_tick_report_throttles() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();

        let first = engine.tick_reporting(&mut surface);
        assert!(first.redrew_static);
        assert_eq!(first.icon_phase, Some(Phase::Normal));

        let reports: Vec<_> = (1..ANIMATION_PERIOD)
            .map(|_| engine.tick_reporting(&mut surface))
            .collect();
        assert!(reports[..reports.len() - 1].iter().all(|r| r.icon_phase.is_none()));
        // Tick number ANIMATION_PERIOD flips to blink
        assert_eq!(reports.last().unwrap().icon_phase, Some(Phase::Blink));
        assert!(reports.iter().all(|r| !r.redrew_static));
    }

    #[test]
    fn test_toggle_does_not_draw() {
        let mut engine = SceneEngine::new();
        let surface = Recorder::new();
        engine.on_toggle_pressed();
        engine.on_toggle_pressed();
        assert!(surface.calls.is_empty());
        assert_eq!(engine.scene(), Scene::Rainy);
    }

    #[test]
    fn test_two_toggles_between_ticks_repaint_once() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();
        engine.tick(&mut surface);
        surface.clear();

        engine.on_toggle_pressed();
        engine.on_toggle_pressed();
        engine.tick(&mut surface);

        assert_eq!(surface.fill_screen_count(), 1);
        assert_eq!(surface.calls[0], Call::FillScreen(Scene::Rainy.background()));
    }

    #[test]
    fn test_init_resets_state() {
        let mut engine = SceneEngine::new();
        let mut surface = Recorder::new();
        engine.on_toggle_pressed();
        for _ in 0..12 {
            engine.tick(&mut surface);
        }

        engine.init();
        assert_eq!(engine.scene(), Scene::Sunny);
        assert!(engine.needs_redraw());
        assert_eq!(engine.animation(), &AnimationState::new());
    }

    #[test]
    fn test_custom_placement_used_for_icon() {
        let placement = IconPlacement::new(Point::new(10, 60), 2);
        let mut engine = SceneEngine::with_placement(placement);
        let mut surface = Recorder::new();
        engine.tick(&mut surface);

        let bounds = surface.fill_rect_bounds().unwrap();
        assert_eq!(bounds.top_left, Point::new(0, 40));
        assert_eq!(bounds.size, Size::new(40, 40));
    }
}

//! Weather display simulator for desktop.
//!
//! Runs the scene engine against an `embedded-graphics-simulator` window the
//! same size as the ST7735 panel. The keyboard stands in for the toggle switch:
//! SDL delivers one `KeyDown` per physical press (repeats are skipped), so no
//! extra debouncing is needed here.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `SPACE` / `T` / `Enter` | Next scene |
//! | `Q` / `ESC` | Quit |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod cli;
mod timing;

use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::{debug, info};
use weather_common::config::SCREEN_SIZE;
use weather_common::{GraphicsSurface, SceneEngine};

use crate::cli::Args;
use crate::timing::{SleepTiming, pace};

/// What the keyboard asked for this frame.
enum KeyAction {
    Toggle,
    Quit,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug { "debug" } else { "info" }))
        .format_timestamp_millis()
        .init();

    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(SCREEN_SIZE);
    let mut surface = GraphicsSurface::new(display);
    let output_settings = OutputSettingsBuilder::new().scale(args.window_scale).build();
    let mut window = Window::new("Weather Display", &output_settings);

    let frame_time = Duration::from_millis(args.frame_ms);
    let mut timing = SleepTiming;
    let mut engine = SceneEngine::new();
    let mut frame_count = 0u32;

    // The window only exists after the first update
    window.update(surface.inner());
    info!("Starting on {} scene, frame time {:?}", engine.scene().name(), frame_time);

    loop {
        let frame_start = Instant::now();

        let mut toggled = false;
        for action in window.events().filter_map(key_action) {
            match action {
                KeyAction::Quit => {
                    info!("Quit after {frame_count} frames");
                    return;
                }
                // Several presses in one frame each advance the scene
                KeyAction::Toggle => {
                    engine.on_toggle_pressed();
                    toggled = true;
                }
            }
        }
        if toggled {
            info!("Scene -> {}", engine.scene().name());
        }

        let report = engine.tick_reporting(&mut surface);
        if report.redrew_static {
            debug!("Frame {frame_count}: static repaint ({})", engine.scene().name());
        }
        if let Some(phase) = report.icon_phase {
            debug!("Frame {frame_count}: icon {phase:?}");
        }

        window.update(surface.inner());
        frame_count = frame_count.wrapping_add(1);

        pace(&mut timing, frame_start, frame_time);
    }
}

fn key_action(event: SimulatorEvent) -> Option<KeyAction> {
    match event {
        SimulatorEvent::Quit => Some(KeyAction::Quit),
        SimulatorEvent::KeyDown { repeat: true, .. } => None,
        SimulatorEvent::KeyDown { keycode, .. } => match keycode {
            Keycode::Space | Keycode::T | Keycode::Return => Some(KeyAction::Toggle),
            Keycode::Q | Keycode::Escape => Some(KeyAction::Quit),
            _ => None,
        },
        _ => None,
    }
}

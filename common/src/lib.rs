//! Scene and animation engine for the weather display.
//!
//! This crate contains the platform-agnostic core shared between the desktop
//! simulator and the Pico firmware:
//!
//! - [`engine`]: Scene state machine (current scene + redraw flag, tick dispatch)
//! - [`animator`]: Frame-throttled two-phase icon blink
//! - [`scaler`]: Integer-scaled, centered and clamped icon blit
//! - [`renderer`]: Static background and text for each scene
//! - [`scene`]: Scene enum and the per-scene content table
//! - [`assets`]: 20x20 RGB565 icon bitmaps keyed by scene and phase
//! - [`surface`]: Display surface trait and the `embedded-graphics` adapter
//! - [`input`]: Toggle input, timing collaborator and debounced polling
//! - [`driver`]: One host loop iteration (poll, tick, pace)
//! - [`colors`], [`config`], [`styles`]: Constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Tests run on the host with `std`
//! so they can record surface calls into a `Vec`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animator;
pub mod assets;
pub mod colors;
pub mod config;
pub mod driver;
pub mod engine;
pub mod input;
pub mod renderer;
pub mod scaler;
pub mod scene;
pub mod styles;
pub mod surface;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use animator::{AnimationState, Phase};
pub use engine::{SceneEngine, TickReport};
pub use scaler::IconPlacement;
pub use scene::Scene;
pub use surface::{DisplaySurface, GraphicsSurface, TextSize};

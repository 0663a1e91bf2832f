//! Color constants for the weather display.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This is the native format of the ST7735 controller, so colors are written
//! to the panel without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Icon outlines.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Condition text on light backgrounds, cloud bodies.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue (0, 0, 31). Detail text on the cloudy scene, rain drops.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure green (0, 63, 0). Detail text on the sunny scene.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Sunny title, rainy detail text, sun body.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan (0, 63, 31). Sunny background, rainy condition text.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (ST7735 palette)
// =============================================================================

/// Light grey, raw 0xC618. Cloudy background, rainy title.
pub const LIGHT_GREY: Rgb565 = Rgb565::new(24, 48, 24);

/// Dark grey, raw 0x7BEF. Cloudy title, rain cloud body.
pub const DARK_GREY: Rgb565 = Rgb565::new(15, 31, 15);

/// Dark blue, raw 0x0010. Rainy background.
pub const DARK_BLUE: Rgb565 = Rgb565::new(0, 0, 16);

/// Orange sun rays. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

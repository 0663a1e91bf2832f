//! Application configuration constants.
//!
//! Layout values are compile-time constants so no placement arithmetic is
//! repeated at runtime beyond the per-blit clamp.

use core::time::Duration;

use embedded_graphics::geometry::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7735 1.8" panel, portrait: 128x160).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 160;

/// Screen size as an `embedded-graphics` size.
pub const SCREEN_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

// =============================================================================
// Icon Configuration
// =============================================================================

/// Source icon width in pixels.
pub const ICON_WIDTH: u32 = 20;

/// Source icon height in pixels.
pub const ICON_HEIGHT: u32 = 20;

/// Pixel count of one source icon.
pub const ICON_PIXELS: usize = (ICON_WIDTH * ICON_HEIGHT) as usize;

/// Icon magnification. 1 = 20x20 (native), 2 = 40x40.
pub const ICON_SCALE: u32 = 2;

/// Screen point the icon is centered on. Slightly above the middle to keep
/// clear of the detail text at the bottom.
pub const ICON_CENTER: Point = Point::new((SCREEN_WIDTH / 2) as i32, 60);

// =============================================================================
// Timing Configuration
// =============================================================================

/// Ticks per blink phase. Higher = slower blink.
pub const ANIMATION_PERIOD: u32 = 10;

/// Pacing wait between loop iterations (two 10 ms delay units per pass).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Settle time between first seeing the toggle asserted and re-checking it.
pub const DEBOUNCE_TIME: Duration = Duration::from_millis(20);

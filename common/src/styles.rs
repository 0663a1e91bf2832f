//! Font selection for the three text sizes used on the scenes.
//!
//! Text colors vary per scene, so styles are built per draw from these font
//! references rather than stored as `const MonoTextStyle` values.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use profont::PROFONT_24_POINT;

use crate::surface::TextSize;

/// Detail line font (6x10 pixels). Fits 21 characters across the panel.
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

/// Title font (10x20 pixels).
pub const MEDIUM_FONT: &MonoFont = &FONT_10X20;

/// Condition word font (`ProFont` 24pt).
pub const LARGE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Font used for a text size.
#[inline]
pub const fn font_for(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Small => SMALL_FONT,
        TextSize::Medium => MEDIUM_FONT,
        TextSize::Large => LARGE_FONT,
    }
}

/// Horizontal advance of one character, including spacing.
#[inline]
pub const fn char_advance(size: TextSize) -> u32 {
    let font = font_for(size);
    font.character_size.width + font.character_spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_WIDTH;

    #[test]
    fn test_font_sizes_increase() {
        assert!(char_advance(TextSize::Small) < char_advance(TextSize::Medium));
        assert!(char_advance(TextSize::Medium) < char_advance(TextSize::Large));
    }

    #[test]
    fn test_detail_line_fits_panel() {
        // "Avg:85 Max:92 Min:78" is 20 characters, drawn at x = 5
        assert!(5 + 20 * char_advance(TextSize::Small) <= SCREEN_WIDTH);
    }
}

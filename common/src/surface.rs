//! Display surface used by the renderer and the scaler.
//!
//! The engine never talks to a display driver directly. It draws through the
//! [`DisplaySurface`] trait, which exposes the four operations the scenes need.
//! [`GraphicsSurface`] implements it for any `embedded-graphics` draw target,
//! so the same engine runs on the simulator window and on the ST7735.

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::styles::{char_advance, font_for};

/// Text sizes available to the scene layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Detail lines.
    Small,
    /// Title line.
    Medium,
    /// Condition word.
    Large,
}

/// Drawing operations the engine needs from a display.
///
/// All operations are synchronous and complete before returning. Origin is
/// the top-left corner.
pub trait DisplaySurface {
    /// Visible screen size in pixels.
    fn screen_size(&self) -> Size;

    /// Fill the whole screen with one color.
    fn fill_screen(
        &mut self,
        color: Rgb565,
    );

    /// Fill a solid rectangle.
    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    );

    /// Draw a single line of text with an opaque background, top-left at
    /// `position`. Characters that would overrun the right edge are dropped.
    fn draw_string(
        &mut self,
        position: Point,
        text: &str,
        color: Rgb565,
        background: Rgb565,
        size: TextSize,
    );
}

/// [`DisplaySurface`] adapter for `embedded-graphics` draw targets.
///
/// Draw errors are discarded: the display is best-effort and nothing watches
/// for diagnostics.
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target.
    pub const fn new(target: D) -> Self { Self { target } }

    /// Borrow the wrapped target (e.g. to push it to a simulator window).
    #[inline]
    pub const fn inner(&self) -> &D { &self.target }

    /// Unwrap the draw target.
    pub fn into_inner(self) -> D { self.target }
}

impl<D> DisplaySurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn screen_size(&self) -> Size { self.target.bounding_box().size }

    fn fill_screen(
        &mut self,
        color: Rgb565,
    ) {
        self.target.clear(color).ok();
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) {
        self.target.fill_solid(&area, color).ok();
    }

    fn draw_string(
        &mut self,
        position: Point,
        text: &str,
        color: Rgb565,
        background: Rgb565,
        size: TextSize,
    ) {
        let visible = visible_prefix(text, position.x, self.screen_size().width, char_advance(size));
        if visible.is_empty() {
            return;
        }

        let style = MonoTextStyleBuilder::new()
            .font(font_for(size))
            .text_color(color)
            .background_color(background)
            .build();
        Text::with_baseline(visible, position, style, Baseline::Top)
            .draw(&mut self.target)
            .ok();
    }
}

/// Longest prefix of `text` whose characters all end at or before
/// `screen_width` when drawn from `x` with a fixed `advance`.
pub fn visible_prefix(
    text: &str,
    x: i32,
    screen_width: u32,
    advance: u32,
) -> &str {
    if advance == 0 || x < 0 {
        return text;
    }
    let room = i64::from(screen_width) - i64::from(x);
    if room < i64::from(advance) {
        return "";
    }
    let max_chars = (room / i64::from(advance)) as usize;
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

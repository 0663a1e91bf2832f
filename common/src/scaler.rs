//! Integer-scaled, centered icon blit.
//!
//! An icon of W x H source pixels is magnified by `scale` and centered on a
//! fixed anchor point. The resulting rectangle is clamped so it never leaves the
//! screen:
//!
//! ```text
//! scaled = (W * scale, H * scale)
//! left   = anchor.x - scaled.w / 2      (truncating)
//! top    = anchor.y - scaled.h / 2
//! left   = clamp to [0, screen.w - scaled.w]
//! top    = clamp to [0, screen.h - scaled.h]
//! ```
//!
//! Placement depends only on the icon size, scale, anchor and screen size. It
//! never depends on the pixels, so both frames of a scene land on the same
//! rectangle and the new frame fully covers the old one.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::assets::Icon;
use crate::config::{ICON_CENTER, ICON_SCALE};
use crate::surface::DisplaySurface;

/// Where and how large the scene icon is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IconPlacement {
    /// Screen point the scaled icon is centered on.
    pub anchor: Point,
    /// Integer magnification, at least 1.
    pub scale: u32,
}

impl IconPlacement {
    pub const fn new(
        anchor: Point,
        scale: u32,
    ) -> Self {
        Self { anchor, scale }
    }
}

impl Default for IconPlacement {
    fn default() -> Self { Self::new(ICON_CENTER, ICON_SCALE) }
}

/// Screen rectangle covered by an icon of `icon_size` under `placement`.
///
/// Scales where the scaled icon is larger than the screen are not supported;
/// the result is then anchored at a negative origin. Scaled sizes saturate at
/// `i32::MAX`.
pub fn placement_rect(
    icon_size: Size,
    placement: IconPlacement,
    screen: Size,
) -> Rectangle {
    let scaled_w = scaled_len(icon_size.width, placement.scale);
    let scaled_h = scaled_len(icon_size.height, placement.scale);
    let screen_w = screen.width as i32;
    let screen_h = screen.height as i32;

    let mut left = placement.anchor.x.saturating_sub(scaled_w / 2);
    let mut top = placement.anchor.y.saturating_sub(scaled_h / 2);

    if left < 0 {
        left = 0;
    }
    if top < 0 {
        top = 0;
    }
    if left.saturating_add(scaled_w) > screen_w {
        left = screen_w.saturating_sub(scaled_w);
    }
    if top.saturating_add(scaled_h) > screen_h {
        top = screen_h.saturating_sub(scaled_h);
    }

    Rectangle::new(Point::new(left, top), Size::new(scaled_w as u32, scaled_h as u32))
}

/// `len * scale`, saturated to `i32::MAX`.
#[inline]
fn scaled_len(
    len: u32,
    scale: u32,
) -> i32 {
    i32::try_from(len.saturating_mul(scale)).unwrap_or(i32::MAX)
}

/// Blit `icon` magnified and centered per `placement`.
///
/// Each source pixel becomes one `scale x scale` filled block. Source rows are
/// stored bottom-up, so screen row `y` reads stored row `H - 1 - y`.
///
/// `_background` is not used: there is no erase pass. Frames of one scene
/// share a size, so each blit covers the previous one exactly.
pub fn draw_centered_scaled<S>(
    surface: &mut S,
    icon: &Icon,
    _background: Rgb565,
    placement: IconPlacement,
) where
    S: DisplaySurface,
{
    let area = placement_rect(icon.size(), placement, surface.screen_size());
    let scale = placement.scale;
    let block = Size::new(scale, scale);
    let Size { width, height } = icon.size();

    for y in 0..height {
        let src_y = height - 1 - y;
        for x in 0..width {
            let color = icon.stored_pixel(x, src_y);
            let offset = Point::new(scaled_len(x, scale), scaled_len(y, scale));
            let origin = Point::new(
                area.top_left.x.saturating_add(offset.x),
                area.top_left.y.saturating_add(offset.y),
            );
            surface.fill_rect(Rectangle::new(origin, block), color);
        }
    }
}

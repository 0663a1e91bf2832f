//! Test doubles for the display surface.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
use crate::surface::{DisplaySurface, TextSize};

/// A `draw_string` call as seen by the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnString {
    pub position: Point,
    pub text: String,
    pub color: Rgb565,
    pub background: Rgb565,
    pub size: TextSize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    FillScreen(Rgb565),
    FillRect(Rectangle, Rgb565),
    DrawString(DrawnString),
}

/// Surface that records every call in order.
pub struct Recorder {
    pub calls: Vec<Call>,
    size: Size,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            size: SCREEN_SIZE,
        }
    }

    pub fn clear(&mut self) { self.calls.clear(); }

    pub fn fill_rects(&self) -> impl Iterator<Item = (Rectangle, Rgb565)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            Call::FillRect(area, color) => Some((*area, *color)),
            _ => None,
        })
    }

    pub fn fill_rect_count(&self) -> usize { self.fill_rects().count() }

    /// Smallest rectangle covering every `fill_rect`.
    pub fn fill_rect_bounds(&self) -> Option<Rectangle> {
        let mut corners: Option<(Point, Point)> = None;
        for (area, _) in self.fill_rects() {
            let Some(bottom_right) = area.bottom_right() else {
                continue;
            };
            corners = Some(match corners {
                None => (area.top_left, bottom_right),
                Some((tl, br)) => (tl.component_min(area.top_left), br.component_max(bottom_right)),
            });
        }
        corners.map(|(tl, br)| Rectangle::with_corners(tl, br))
    }

    pub fn fill_screen_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::FillScreen(_)))
            .count()
    }

    pub fn strings(&self) -> Vec<&DrawnString> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawString(s) => Some(s),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySurface for Recorder {
    fn screen_size(&self) -> Size { self.size }

    fn fill_screen(
        &mut self,
        color: Rgb565,
    ) {
        self.calls.push(Call::FillScreen(color));
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) {
        self.calls.push(Call::FillRect(area, color));
    }

    fn draw_string(
        &mut self,
        position: Point,
        text: &str,
        color: Rgb565,
        background: Rgb565,
        size: TextSize,
    ) {
        self.calls.push(Call::DrawString(DrawnString {
            position,
            text: text.into(),
            color,
            background,
            size,
        }));
    }
}

/// In-memory 128x160 RGB565 draw target. Starts filled with [`Self::UNTOUCHED`].
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub const UNTOUCHED: Rgb565 = BLACK;

    pub fn new() -> Self {
        Self {
            pixels: vec![Self::UNTOUCHED; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        self.pixels[(y * SCREEN_WIDTH + x) as usize]
    }

    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { SCREEN_SIZE }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.x < SCREEN_WIDTH as i32 && point.y >= 0 && point.y < SCREEN_HEIGHT as i32 {
                self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}

//! Static scene background and text.
//!
//! A full redraw paints the whole screen with the scene background, then the
//! text fields listed in [`TEXT_FIELDS`]. Partial redraws are not supported:
//! every scene switch repaints everything.
//!
//! ```text
//! ┌────────────────┐
//! │ Carson, CA     │  y=10   title     (10x20)
//! │                │
//! │     [icon]     │  y=40..80 (animator)
//! │                │
//! │Avg:85 Max:92 M │  y=100  stats     (6x10)
//! │   Humidity: 60%│  y=110  humidity  (6x10)
//! │     CLEAR      │  y=130  condition (ProFont 24)
//! └────────────────┘
//!      128 x 160
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::scene::{Scene, SceneContent};
use crate::surface::{DisplaySurface, TextSize};

/// Which part of a [`SceneContent`] a text field shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    Title,
    Stats,
    Humidity,
    Condition,
}

impl Slot {
    /// Text and color for this slot.
    pub const fn resolve(
        self,
        content: &SceneContent,
    ) -> (&'static str, Rgb565) {
        match self {
            Self::Title => (content.title, content.title_color),
            Self::Stats => (content.stats, content.detail_color),
            Self::Humidity => (content.humidity, content.detail_color),
            Self::Condition => (content.condition, content.condition_color),
        }
    }
}

/// One fixed text position on the scene.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextField {
    pub slot: Slot,
    pub origin: Point,
    pub size: TextSize,
}

impl TextField {
    /// Top-left of the text. The condition word takes its x from the content
    /// record so each word sits centered.
    pub const fn origin_for(
        &self,
        content: &SceneContent,
    ) -> Point {
        match self.slot {
            Slot::Condition => Point::new(content.condition_x, self.origin.y),
            _ => self.origin,
        }
    }
}

/// Text layout shared by all scenes, in draw order.
pub const TEXT_FIELDS: [TextField; 4] = [
    TextField {
        slot: Slot::Title,
        origin: Point::new(4, 10),
        size: TextSize::Medium,
    },
    TextField {
        slot: Slot::Stats,
        origin: Point::new(5, 100),
        size: TextSize::Small,
    },
    TextField {
        slot: Slot::Humidity,
        origin: Point::new(35, 110),
        size: TextSize::Small,
    },
    TextField {
        slot: Slot::Condition,
        origin: Point::new(0, 130),
        size: TextSize::Large,
    },
];

/// Repaint the full static content of `scene`.
pub fn draw_static<S>(
    surface: &mut S,
    scene: Scene,
) where
    S: DisplaySurface,
{
    let content = scene.content();
    surface.fill_screen(content.background);

    for field in &TEXT_FIELDS {
        let (text, color) = field.slot.resolve(content);
        surface.draw_string(field.origin_for(content), text, color, content.background, field.size);
    }
}

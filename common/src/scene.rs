//! Weather scenes and their static content.
//!
//! Each [`Scene`] maps to exactly one [`SceneContent`] record through
//! [`SCENE_CONTENT`]. Drawing code looks records up; it never branches on the
//! scene to pick strings or colors.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, CYAN, DARK_BLUE, DARK_GREY, GREEN, LIGHT_GREY, WHITE, YELLOW};

/// The three weather displays, in toggle order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scene {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
}

impl Scene {
    /// Number of scenes.
    pub const COUNT: usize = 3;

    /// All scenes in toggle order.
    pub const ALL: [Self; Self::COUNT] = [Self::Sunny, Self::Cloudy, Self::Rainy];

    /// Advance to the next scene (Sunny -> Cloudy -> Rainy -> Sunny).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Sunny => Self::Cloudy,
            Self::Cloudy => Self::Rainy,
            Self::Rainy => Self::Sunny,
        }
    }

    /// Table index of this scene.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Static content record for this scene.
    #[inline]
    pub fn content(self) -> &'static SceneContent { &SCENE_CONTENT[self.index()] }

    /// Background color of this scene.
    #[inline]
    pub fn background(self) -> Rgb565 { self.content().background }

    /// Short name for logs and window titles.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
        }
    }
}

/// Immutable per-scene background and text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SceneContent {
    /// Full-screen fill color, also the background of every text field.
    pub background: Rgb565,
    /// Location line ("Carson, CA").
    pub title: &'static str,
    pub title_color: Rgb565,
    /// Temperature summary line.
    pub stats: &'static str,
    pub humidity: &'static str,
    /// Color of the stats and humidity lines.
    pub detail_color: Rgb565,
    /// Large condition word at the bottom ("CLEAR").
    pub condition: &'static str,
    pub condition_color: Rgb565,
    /// Left edge of the condition word, centering it in the large font.
    pub condition_x: i32,
}

/// Content table, indexed by [`Scene::index`].
pub static SCENE_CONTENT: [SceneContent; Scene::COUNT] = [
    SceneContent {
        background: CYAN,
        title: "Carson, CA",
        title_color: YELLOW,
        stats: "Avg:85 Max:92 Min:78",
        humidity: "Humidity: 60%",
        detail_color: GREEN,
        condition: "CLEAR",
        condition_color: WHITE,
        condition_x: 24,
    },
    SceneContent {
        background: LIGHT_GREY,
        title: "Dallas, TX",
        title_color: DARK_GREY,
        stats: "Avg:75 Max:81 Min:70",
        humidity: "Humidity: 75%",
        detail_color: BLUE,
        condition: "CLOUDY",
        condition_color: WHITE,
        condition_x: 16,
    },
    SceneContent {
        background: DARK_BLUE,
        title: "AUSTIN, TX",
        title_color: LIGHT_GREY,
        stats: "Avg:68 Max:72 Min:65",
        humidity: "Humidity: 88%",
        detail_color: YELLOW,
        condition: "RAINY",
        condition_color: CYAN,
        condition_x: 24,
    },
];

//! Icon bitmaps for the three scenes.
//!
//! Every scene has two 20x20 icons: the normal frame and the blink frame.
//! Icons are authored as character art below and encoded at compile time into
//! RGB565 buffers stored **bottom-up** (first stored row = bottom of the
//! icon), which is the layout the scaler expects.
//!
//! All variants of one scene must share the same dimensions. The scaler never
//! erases before drawing, so a smaller blink frame would leave the edges of the
//! previous frame on screen.
//!
//! # Art Palette
//!
//! | Char | Color |
//! |------|-------|
//! | `.` | Scene background |
//! | `Y` | Yellow |
//! | `O` | Orange |
//! | `W` | White |
//! | `L` | Light grey |
//! | `D` | Dark grey |
//! | `B` | Blue |
//! | `C` | Cyan |
//! | `K` | Black |

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb565;

use crate::animator::Phase;
use crate::colors::{BLACK, BLUE, CYAN, DARK_BLUE, DARK_GREY, LIGHT_GREY, ORANGE, WHITE, YELLOW};
use crate::config::{ICON_HEIGHT, ICON_PIXELS, ICON_WIDTH};
use crate::scene::Scene;

/// Source icon size.
pub const ICON_SIZE: Size = Size::new(ICON_WIDTH, ICON_HEIGHT);

/// A fixed-size RGB565 bitmap stored bottom-up, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Icon {
    size: Size,
    pixels: &'static [Rgb565],
}

impl Icon {
    /// Create an icon over a pixel buffer of exactly `width * height` entries.
    pub const fn new(
        size: Size,
        pixels: &'static [Rgb565],
    ) -> Self {
        assert!(pixels.len() == (size.width * size.height) as usize, "icon buffer size mismatch");
        Self { size, pixels }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Raw bottom-up pixel buffer.
    #[inline]
    pub const fn pixels(&self) -> &'static [Rgb565] { self.pixels }

    /// Pixel at storage coordinates (`row` counted from the bottom).
    #[inline]
    pub fn stored_pixel(
        &self,
        x: u32,
        row: u32,
    ) -> Rgb565 {
        self.pixels[(row * self.size.width + x) as usize]
    }
}

/// The two animation frames of one scene.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IconSet {
    pub normal: Icon,
    pub blink: Icon,
}

impl IconSet {
    /// Icon for a blink phase.
    #[inline]
    pub const fn variant(
        &self,
        phase: Phase,
    ) -> &Icon {
        match phase {
            Phase::Normal => &self.normal,
            Phase::Blink => &self.blink,
        }
    }
}

/// Icon pair for a scene.
#[inline]
pub fn icon_set(scene: Scene) -> &'static IconSet { &ICON_SETS[scene.index()] }

/// Icon for a `{scene, phase}` key.
#[inline]
pub fn icon(
    scene: Scene,
    phase: Phase,
) -> &'static Icon {
    icon_set(scene).variant(phase)
}

/// Icon table, indexed by [`Scene::index`].
pub static ICON_SETS: [IconSet; Scene::COUNT] = [
    IconSet {
        normal: Icon::new(ICON_SIZE, &SUN_NORMAL),
        blink: Icon::new(ICON_SIZE, &SUN_BLINK),
    },
    IconSet {
        normal: Icon::new(ICON_SIZE, &CLOUD_NORMAL),
        blink: Icon::new(ICON_SIZE, &CLOUD_BLINK),
    },
    IconSet {
        normal: Icon::new(ICON_SIZE, &RAIN_NORMAL),
        blink: Icon::new(ICON_SIZE, &RAIN_BLINK),
    },
];

// Backgrounds here must match the scene table so the icon square blends in.
static SUN_NORMAL: [Rgb565; ICON_PIXELS] = encode(&SUN_NORMAL_ART, CYAN);
static SUN_BLINK: [Rgb565; ICON_PIXELS] = encode(&SUN_BLINK_ART, CYAN);
static CLOUD_NORMAL: [Rgb565; ICON_PIXELS] = encode(&CLOUD_NORMAL_ART, LIGHT_GREY);
static CLOUD_BLINK: [Rgb565; ICON_PIXELS] = encode(&CLOUD_BLINK_ART, LIGHT_GREY);
static RAIN_NORMAL: [Rgb565; ICON_PIXELS] = encode(&RAIN_NORMAL_ART, DARK_BLUE);
static RAIN_BLINK: [Rgb565; ICON_PIXELS] = encode(&RAIN_BLINK_ART, DARK_BLUE);

// =============================================================================
// Encoding
// =============================================================================

/// Icon art, top row first.
type IconArt = [&'static str; ICON_HEIGHT as usize];

/// Encode top-down character art into a bottom-up RGB565 buffer.
const fn encode(
    art: &IconArt,
    background: Rgb565,
) -> [Rgb565; ICON_PIXELS] {
    let width = ICON_WIDTH as usize;
    let height = ICON_HEIGHT as usize;
    let mut pixels = [background; ICON_PIXELS];

    let mut row = 0;
    while row < height {
        let line = art[row].as_bytes();
        assert!(line.len() == width, "icon art rows must be 20 characters");

        let base = (height - 1 - row) * width;
        let mut x = 0;
        while x < width {
            pixels[base + x] = match line[x] {
                b'.' => background,
                b'Y' => YELLOW,
                b'O' => ORANGE,
                b'W' => WHITE,
                b'L' => LIGHT_GREY,
                b'D' => DARK_GREY,
                b'B' => BLUE,
                b'C' => CYAN,
                b'K' => BLACK,
                _ => panic!("unknown icon art color"),
            };
            x += 1;
        }
        row += 1;
    }
    pixels
}

// =============================================================================
// Art
// =============================================================================

const SUN_NORMAL_ART: IconArt = [
    "....................",
    "....................",
    "....................",
    "....................",
    "........OOOO........",
    "......OOYYYYOO......",
    ".....OYYYYYYYYO.....",
    ".....OYYYYYYYYO.....",
    "....OYYYYYYYYYYO....",
    "....OYYYYYYYYYYO....",
    "....OYYYYYYYYYYO....",
    "....OYYYYYYYYYYO....",
    ".....OYYYYYYYYO.....",
    ".....OYYYYYYYYO.....",
    "......OOYYYYOO......",
    "........OOOO........",
    "....................",
    "....................",
    "....................",
    "....................",
];

const SUN_BLINK_ART: IconArt = [
    ".........OO.........",
    "..O......OO......O..",
    "...O.....OO.....O...",
    "....O..........O....",
    "........OOOO........",
    "......OOYYYYOO......",
    ".....OYYYYYYYYO.....",
    ".....OYYYYYYYYO.....",
    "....OYYYYYYYYYYO....",
    "OOO.OYYYYYYYYYYO.OOO",
    "OOO.OYYYYYYYYYYO.OOO",
    "....OYYYYYYYYYYO....",
    ".....OYYYYYYYYO.....",
    ".....OYYYYYYYYO.....",
    "......OOYYYYOO......",
    "....O...OOOO...O....",
    "...O............O...",
    "..O......OO......O..",
    ".........OO.........",
    "....................",
];

const CLOUD_NORMAL_ART: IconArt = [
    "....................",
    "....................",
    "............YYY.....",
    "...........YYYYY....",
    "...........YYYYY....",
    "......DDDD.YYYYY....",
    ".....DWWWWD.YYY.....",
    "....DWWWWWWDD.......",
    "..DDWWWWWWWWWDD.....",
    ".DWWWWWWWWWWWWWD....",
    "DWWWWWWWWWWWWWWWD...",
    "DWWWWWWWWWWWWWWWD...",
    "DWWWWWWWWWWWWWWWD...",
    ".DWWWWWWWWWWWWWD....",
    "..DDDDDDDDDDDDD.....",
    "....................",
    "....................",
    "....................",
    "....................",
    "....................",
];

const CLOUD_BLINK_ART: IconArt = [
    "....................",
    "...............Y....",
    "............YYY..Y..",
    "...........YYYYY....",
    "...........YYYYYY...",
    ".......DDDD.YYYYY...",
    "......DWWWWD.YYY..Y.",
    ".....DWWWWWWDD......",
    "...DDWWWWWWWWWDD....",
    "..DWWWWWWWWWWWWWD...",
    ".DWWWWWWWWWWWWWWWD..",
    ".DWWWWWWWWWWWWWWWD..",
    ".DWWWWWWWWWWWWWWWD..",
    "..DWWWWWWWWWWWWWD...",
    "...DDDDDDDDDDDDD....",
    "....................",
    "....................",
    "....................",
    "....................",
    "....................",
];

const RAIN_NORMAL_ART: IconArt = [
    "....................",
    "....................",
    "......DDDDD.........",
    ".....DLLLLLD........",
    "...DDLLLLLLLDDD.....",
    "..DLLLLLLLLLLLLD....",
    ".DLLLLLLLLLLLLLLD...",
    ".DLLLLLLLLLLLLLLLD..",
    ".DLLLLLLLLLLLLLLLD..",
    "..DDDDDDDDDDDDDDD...",
    "....................",
    "...C.....C.....C....",
    "...C.....C.....C....",
    "....................",
    "......C.....C.......",
    "......C.....C.......",
    "....................",
    "...C.....C.....C....",
    "...C.....C.....C....",
    "....................",
];

const RAIN_BLINK_ART: IconArt = [
    "....................",
    "....................",
    "......DDDDD.........",
    ".....DLLLLLD........",
    "...DDLLLLLLLDDD.....",
    "..DLLLLLLLLLLLLD....",
    ".DLLLLLLLLLLLLLLD...",
    ".DLLLLLLLLLLLLLLLD..",
    ".DLLLLLLLLLLLLLLLD..",
    "..DDDDDDDDDDDDDDD...",
    "....................",
    "......C.....C.......",
    "......C.....C.......",
    "....................",
    "...C.....C.....C....",
    "...C.....C.....C....",
    "....................",
    "......C.....C.......",
    "......C.....C.......",
    "....................",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scene_has_equal_size_variants() {
        for scene in Scene::ALL {
            let set = icon_set(scene);
            assert_eq!(set.normal.size(), set.blink.size());
            assert_eq!(set.normal.size(), ICON_SIZE);
            assert_eq!(set.normal.pixels().len(), ICON_PIXELS);
        }
    }

    #[test]
    fn test_variants_differ() {
        for scene in Scene::ALL {
            let set = icon_set(scene);
            assert_ne!(set.normal.pixels(), set.blink.pixels());
        }
    }

    #[test]
    fn test_icon_lookup_by_phase() {
        assert_eq!(icon(Scene::Cloudy, Phase::Normal), &icon_set(Scene::Cloudy).normal);
        assert_eq!(icon(Scene::Cloudy, Phase::Blink), &icon_set(Scene::Cloudy).blink);
    }

    #[test]
    fn test_storage_is_bottom_up() {
        // Top art row of the sun blink frame has a ray at columns 9-10;
        // it is the last stored row.
        let sun = icon(Scene::Sunny, Phase::Blink);
        assert_eq!(sun.stored_pixel(9, ICON_HEIGHT - 1), ORANGE);
        assert_eq!(sun.stored_pixel(0, ICON_HEIGHT - 1), CYAN);
        // Bottom art row is blank
        assert_eq!(sun.stored_pixel(9, 0), CYAN);
    }

    #[test]
    fn test_icon_background_matches_scene() {
        for scene in Scene::ALL {
            let set = icon_set(scene);
            assert_eq!(set.normal.stored_pixel(0, 0), scene.background());
            assert_eq!(set.blink.stored_pixel(0, 0), scene.background());
        }
    }
}

use std::fmt;

use serde::Serialize;

pub const PALETTE_SIZE: usize = 5;

/// Hex color from one of the avatar palettes, e.g. `#8b7355`.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Serialize)]
pub struct Color(&'static str);

impl Color {
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// Color with a two-digit hex alpha suffix (`#rrggbbaa`).
    pub fn with_alpha(&self, alpha: &str) -> String {
        format!("{}{}", self.0, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Palette {
    pub index: usize,
    pub colors: &'static [Color; PALETTE_SIZE],
}

// Warm, earthy tones matching the rest of the site.
static PALETTES: [[Color; PALETTE_SIZE]; 6] = [
    [
        Color("#8b7355"),
        Color("#c4b5a0"),
        Color("#264e70"),
        Color("#d4a574"),
        Color("#6b5e54"),
    ],
    [
        Color("#a0522d"),
        Color("#c4a882"),
        Color("#4a6741"),
        Color("#d4a06a"),
        Color("#7b6b5a"),
    ],
    [
        Color("#6b4e3d"),
        Color("#b8a090"),
        Color("#2d5a7b"),
        Color("#c9956b"),
        Color("#8b7865"),
    ],
    [
        Color("#7a5c47"),
        Color("#baa898"),
        Color("#3d6b5e"),
        Color("#d4a882"),
        Color("#6b6058"),
    ],
    [
        Color("#5c4033"),
        Color("#c4b09c"),
        Color("#4a5568"),
        Color("#b8946b"),
        Color("#7a6e62"),
    ],
    [
        Color("#8b6e4e"),
        Color("#c9baa8"),
        Color("#2b4c6f"),
        Color("#c4a07a"),
        Color("#6b5e50"),
    ],
];

pub fn palette_count() -> usize {
    PALETTES.len()
}

pub fn palette_index(seed: u32) -> usize {
    seed as usize % PALETTES.len()
}

impl Palette {
    pub fn for_seed(seed: u32) -> Self {
        let index = palette_index(seed);
        Self {
            index,
            colors: &PALETTES[index],
        }
    }

    pub fn background(&self) -> Color {
        self.colors[0]
    }

    pub fn base(&self) -> Color {
        self.colors[PALETTE_SIZE - 1]
    }

    /// Color picked by a draw in `[0, 1)`.
    ///
    /// `floor(draw * 5)` may round up to 5 for draws a hair below 1, so the
    /// index is clamped to the last color.
    pub fn pick(&self, draw: f64) -> Color {
        let index = ((draw * PALETTE_SIZE as f64).floor() as usize)
            .min(PALETTE_SIZE - 1);
        self.colors[index]
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }
}

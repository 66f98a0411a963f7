//! Placeholder avatars for artisans without a photograph.
//!
//! A display name is hashed into a seed, the seed picks one of the palettes
//! and drives a symmetric 5x5 cell pattern, and the pattern is drawn as a
//! round SVG badge. Everything is a pure function of the name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{KogeiError, Result};

pub mod palette;
pub mod pattern;
pub mod seed;
pub mod svg;

pub use palette::{Color, Palette};
pub use pattern::{Cell, Pattern};
pub use seed::{hash_name, seeded_random};

use svg::{Document, Shape, Stroke};

pub const DEFAULT_AVATAR_SIZE: u32 = 80;

// The pattern sits on a 7x7 layout: one cell of margin around the 5x5 grid.
const LAYOUT_CELLS: f64 = 7.0;
const CELL_FILL_RATIO: f64 = 0.9;
const CELL_CORNER_RATIO: f64 = 0.15;
const CELL_OPACITY: f64 = 0.85;
const OUTLINE_OPACITY: f64 = 0.2;
const BACKGROUND_ALPHA: &str = "20";
const BASE_ALPHA: &str = "15";

// Memoised avatars kept before the cache starts over.
const CACHE_CAPACITY: usize = 1024;

lazy_static! {
    static ref PATTERNS: RwLock<HashMap<String, Arc<Avatar>>> =
        RwLock::new(HashMap::new());
}

#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    pub name: String,
    pub seed: u32,
    pub palette: Palette,
    pub pattern: Pattern,
}

impl Avatar {
    pub fn new(name: &str) -> Self {
        let seed = hash_name(name);
        let palette = Palette::for_seed(seed);
        let pattern = Pattern::generate(seed, &palette);

        Self {
            name: name.to_owned(),
            seed,
            palette,
            pattern,
        }
    }

    /// Same as [`Avatar::new`], memoised per name. The memo holds at most
    /// `CACHE_CAPACITY` names and is cleared when it fills up.
    pub fn cached(name: &str) -> Arc<Self> {
        if let Ok(patterns) = PATTERNS.read() {
            if let Some(avatar) = patterns.get(name) {
                return avatar.clone();
            }
        }

        let avatar = Arc::new(Self::new(name));
        match PATTERNS.write() {
            Ok(mut patterns) => {
                if patterns.len() >= CACHE_CAPACITY {
                    log::debug!("avatar cache full, clearing {} entries", patterns.len());
                    patterns.clear();
                }
                patterns.insert(name.to_owned(), avatar.clone());
            }
            Err(e) => log::warn!("avatar cache is poisoned: {}", e),
        }
        avatar
    }

    /// Text read out by assistive technology.
    pub fn label(&self) -> String {
        format!("{}のアバター", self.name)
    }

    /// Lay the avatar out as shapes on a `size` x `size` canvas.
    pub fn document(&self, size: u32) -> Result<Document> {
        if size == 0 {
            return Err(KogeiError::InvalidSize(size));
        }

        let size = f64::from(size);
        let half = size / 2.0;
        let cell_size = size / LAYOUT_CELLS;
        let offset = cell_size;

        let mut document = Document::new(size, self.label());
        document.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: size,
            height: size,
            rx: half,
            fill: self
                .palette
                .background()
                .with_alpha(BACKGROUND_ALPHA),
            opacity: None,
        });

        let mut children = Vec::with_capacity(self.pattern.len() + 1);
        children.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: size,
            height: size,
            rx: 0.0,
            fill: self.palette.base().with_alpha(BASE_ALPHA),
            opacity: None,
        });
        children.extend(self.pattern.cells.iter().map(|cell| Shape::Rect {
            x: offset + f64::from(cell.x) * cell_size,
            y: offset + f64::from(cell.y) * cell_size,
            width: cell_size * CELL_FILL_RATIO,
            height: cell_size * CELL_FILL_RATIO,
            rx: cell_size * CELL_CORNER_RATIO,
            fill: cell.color.to_string(),
            opacity: Some(CELL_OPACITY),
        }));

        document.push(Shape::ClipGroup {
            id: format!("clip-{}", self.seed),
            cx: half,
            cy: half,
            r: half,
            children,
        });
        document.push(Shape::Circle {
            cx: half,
            cy: half,
            r: half - 0.5,
            fill: None,
            stroke: Some(Stroke {
                color: self.palette.background().to_string(),
                width: 1.0,
            }),
            opacity: Some(OUTLINE_OPACITY),
        });

        Ok(document)
    }

    pub fn render(&self, size: u32) -> Result<String> {
        let document = self.document(size)?;
        log::debug!(
            "rendered avatar of {:?} at {}px with {} cells",
            self.name,
            size,
            self.pattern.len()
        );
        Ok(document.to_string())
    }
}

/// SVG avatar of `name`, `size` pixels wide and high.
pub fn render_avatar(name: &str, size: u32) -> Result<String> {
    Avatar::cached(name).render(size)
}

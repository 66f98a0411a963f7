use serde::Serialize;

use super::palette::{Color, Palette};
use super::seed::seeded_random;

pub const GRID_SIZE: u8 = 5;
pub const CENTER_COLUMN: u8 = GRID_SIZE / 2;

/// Draws at or below this value leave the cell empty.
pub const CELL_THRESHOLD: f64 = 0.35;

// Offset of the color draws, keeps them apart from the presence draws.
const COLOR_DRAW_OFFSET: u32 = 50;

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize)]
pub struct Cell {
    /// Column, `0..5`
    pub x: u8,
    /// Row, `0..5`
    pub y: u8,
    pub color: Color,
}

/// Left-right symmetric set of cells on a 5x5 grid.
#[derive(Eq, PartialEq, Clone, Debug, Serialize)]
pub struct Pattern {
    pub seed: u32,
    pub palette_index: usize,
    pub cells: Vec<Cell>,
}

impl Pattern {
    /// Walk the left half plus the center column row by row; every active
    /// cell off the center is followed by its mirror image.
    pub fn generate(seed: u32, palette: &Palette) -> Self {
        let mut cells = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..=CENTER_COLUMN {
                let index = u32::from(row * (CENTER_COLUMN + 1) + col);
                if seeded_random(seed, index) <= CELL_THRESHOLD {
                    continue;
                }

                let color =
                    palette.pick(seeded_random(seed, index + COLOR_DRAW_OFFSET));
                cells.push(Cell {
                    x: col,
                    y: row,
                    color,
                });
                if col < CENTER_COLUMN {
                    cells.push(Cell {
                        x: GRID_SIZE - 1 - col,
                        y: row,
                        color,
                    });
                }
            }
        }
        log::trace!("seed {} produced {} cells", seed, cells.len());

        Self {
            seed,
            palette_index: palette.index,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_at(&self, x: u8, y: u8) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|cell| cell.x == x && cell.y == y)
    }
}

//! Binary "digital rain" simulation.
//!
//! Sizes are in any unit as long as width, height and glyph size agree. The
//! console intro measures in character cells with a glyph size of 1.

use rand::Rng;

const RESET_CHANCE: f64 = 0.025;
const FADE: f32 = 0.85;
/// Cells dimmer than this are not drawn.
pub const VISIBLE: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub brightness: f32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            brightness: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    height: u32,
    font_size: u32,
    drops: Vec<u32>,
    rows: usize,
    trail: Vec<Cell>,
}

impl MatrixRain {
    pub fn new(width: u32, height: u32, font_size: u32) -> Self {
        let font_size = font_size.max(1);
        let columns = (width / font_size) as usize;
        let rows = height.div_ceil(font_size) as usize;
        Self {
            height,
            font_size,
            drops: vec![1; columns],
            rows,
            trail: vec![Cell::default(); columns * rows],
        }
    }

    /// Starts over at the new size; every drop goes back to row 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height, self.font_size);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.trail[row * self.columns() + column]
    }

    /// Advances every column by one row, writing a fresh glyph at full
    /// brightness at each drop. Drops past the bottom edge leave no trail.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.trail {
            cell.brightness *= FADE;
        }

        let columns = self.columns();
        for column in 0..columns {
            let glyph = if rng.gen_bool(0.5) { '1' } else { '0' };
            let row = self.drops[column];

            if (row as usize) < self.rows {
                self.trail[row as usize * columns + column] = Cell {
                    glyph,
                    brightness: 1.0,
                };
            }

            if row * self.font_size > self.height && rng.gen_bool(RESET_CHANCE) {
                self.drops[column] = 0;
            }
            self.drops[column] += 1;
        }
    }
}

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Attempts of uniform rejection sampling before scanning for a free cell.
const MAX_SAMPLE_ATTEMPTS: u32 = 128;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell not occupied by the snake.
    ///
    /// Samples uniformly at random and resamples on collision. Once the
    /// attempt budget is spent (only plausible on a nearly full board) the
    /// spawner falls back to a deterministic scan of free cells. Returns
    /// `None` only when the board has no free cell left.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let position = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !snake.occupies(position) {
                return Some(Self::at(position));
            }
        }

        let free: Vec<Position> = free_cells(bounds, snake);
        if free.is_empty() {
            return None;
        }
        Some(Self::at(free[rng.gen_range(0..free.len())]))
    }
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut cells = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                cells.push(position);
            }
        }
    }
    cells
}

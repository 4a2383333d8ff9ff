use log::debug;
use rand::{Rng, RngCore};

use crate::grid::{Direction, Grid, Position, Size};
use crate::orientation::Orientation;

/// The puzzle state: a grid of panel orientations. Starts with every panel
/// pointing up; a press turns the pressed panel and its in-bounds
/// cross-neighbors (no diagonals, no wraparound) one quarter step each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub grid: Grid<Orientation>,
}

impl Board {
    pub fn new(size: Size) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "board must be at least 1x1"
        );

        Self {
            grid: Grid::new(size.width, size.height, &mut |_, _| Orientation::default()),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.grid.width(), self.grid.height())
    }

    /// Applies a plus-move at `(x, y)` and returns the affected positions,
    /// pressed cell first. Coordinates must be in bounds; presses only ever
    /// come from existing panels.
    pub fn press(&mut self, x: usize, y: usize) -> Vec<Position> {
        assert!(
            x < self.grid.width() && y < self.grid.height(),
            "press out of bounds: ({}, {})",
            x,
            y
        );

        let mut affected = Vec::with_capacity(5);

        affected.push((x, y));

        for direction in Direction::ALL {
            if let Some(position) = self.grid.neighbor_position(x, y, direction) {
                affected.push(position);
            }
        }

        for &(px, py) in &affected {
            let cell = self.grid.get_mut(px, py).unwrap();

            *cell = cell.rotated();
        }

        affected
    }

    /// Scrambles the board by pressing `presses` uniformly random cells and
    /// returns the pressed positions. Zero presses leaves the board solved,
    /// which is a valid (if short) puzzle.
    pub fn scramble(&mut self, presses: usize, rng: &mut dyn RngCore) -> Vec<Position> {
        debug!("Scrambling with {} presses", presses);

        let mut trace = Vec::with_capacity(presses);

        for _ in 0..presses {
            let x = rng.gen_range(0..self.grid.width());
            let y = rng.gen_range(0..self.grid.height());

            self.press(x, y);
            trace.push((x, y));
        }

        trace
    }

    /// True when every panel points the same way; which way is irrelevant.
    pub fn is_solved(&self) -> bool {
        let mut cells = self.grid.iter().map(|(_, _, cell)| cell);

        match cells.next() {
            None => true,
            Some(first) => cells.all(|cell| cell == first),
        }
    }
}

//! Toroidal boolean grid and the generation update rule.

use rand::Rng;
use std::fmt;

/// Errors from grid construction and direct cell addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Construction with a zero-sized dimension.
    InvalidDimension { width: usize, height: usize },
    /// Direct access outside the declared range (neighbor lookups wrap instead).
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            GridError::OutOfBounds { x, y } => {
                write!(f, "cell ({}, {}) is outside the grid", x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed-size toroidal grid of cells. Edges wrap for neighbor lookups only;
/// direct addressing is bounds-checked. Cells are stored row-major in a flat
/// vector indexed `y * width + x`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Kill every cell in place.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.cells[y * self.width + x])
    }

    /// Flip the cell at (x, y) between dead and alive.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }
        self.cells[y * self.width + x] = !self.cells[y * self.width + x];
        Ok(())
    }

    pub fn count_living(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Living cells divided by total cells, in [0.0, 1.0].
    pub fn live_fraction(&self) -> f64 {
        self.count_living() as f64 / (self.width * self.height) as f64
    }

    /// Re-roll every cell, alive with probability equal to the live fraction
    /// measured before any cell is written. An empty board stays empty and a
    /// full board stays full; the weighting tracks the board's own density
    /// rather than a fixed 50%.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let density = self.live_fraction();
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
    }

    /// Compute the next generation: a live cell survives with 2 or 3 live
    /// neighbors, a dead cell is born with exactly 3, everything else dies.
    /// Returns a new grid so every neighbor count reads only the current
    /// generation's values.
    pub fn next_generation(&self) -> Grid {
        let mut next = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[y * self.width + x];
                let neighbors = self.count_neighbors(x, y);
                next[y * self.width + x] =
                    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells: next,
        }
    }

    #[inline]
    fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let xi = x as i32;
        let yi = y as i32;
        let wi = self.width as i32;
        let hi = self.height as i32;
        let mut count = 0u8;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                // rem_euclid keeps negative offsets on the torus
                let nx = (xi + dx).rem_euclid(wi) as usize;
                let ny = (yi + dy).rem_euclid(hi) as usize;
                if self.cells[ny * self.width + nx] {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.toggle(x, y).unwrap();
        }
        grid
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(17, 29).unwrap();
        assert_eq!(grid.count_living(), 0);
        assert_eq!(grid.width(), 17);
        assert_eq!(grid.height(), 29);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension { width: 5, height: 0 })
        );
    }

    #[test]
    fn toggle_out_of_bounds_is_an_error() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.toggle(4, 0), Err(GridError::OutOfBounds { x: 4, y: 0 }));
        assert_eq!(grid.toggle(0, 4), Err(GridError::OutOfBounds { x: 0, y: 4 }));
        assert_eq!(grid.get(9, 9), Err(GridError::OutOfBounds { x: 9, y: 9 }));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut grid = grid_with(6, 7, &[(1, 1), (3, 5)]);
        let before = grid.clone();
        grid.toggle(2, 4).unwrap();
        grid.toggle(2, 4).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn reset_kills_everything() {
        let mut grid = grid_with(5, 5, &[(0, 0), (2, 2), (4, 4)]);
        grid.reset();
        assert_eq!(grid.count_living(), 0);
    }

    #[test]
    fn dead_board_stays_dead() {
        let grid = Grid::new(8, 8).unwrap();
        assert_eq!(grid.next_generation().count_living(), 0);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        let next = grid.next_generation();
        assert!(!next.get(2, 2).unwrap());
        assert_eq!(next.count_living(), 0);
    }

    #[test]
    fn live_cell_with_two_or_three_neighbors_survives() {
        // (2,2) has exactly two live neighbors
        let grid = grid_with(7, 7, &[(1, 2), (2, 2), (3, 2)]);
        assert!(grid.next_generation().get(2, 2).unwrap());

        // add a third neighbor
        let grid = grid_with(7, 7, &[(1, 2), (2, 2), (3, 2), (2, 3)]);
        assert!(grid.next_generation().get(2, 2).unwrap());
    }

    #[test]
    fn live_cell_with_four_neighbors_dies() {
        let grid = grid_with(7, 7, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        assert!(!grid.next_generation().get(2, 2).unwrap());
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let grid = grid_with(7, 7, &[(1, 1), (3, 1), (2, 3)]);
        assert!(!grid.get(2, 2).unwrap());
        assert!(grid.next_generation().get(2, 2).unwrap());
    }

    #[test]
    fn dead_cell_with_two_neighbors_stays_dead() {
        let grid = grid_with(7, 7, &[(1, 1), (3, 1)]);
        assert!(!grid.next_generation().get(2, 2).unwrap());
    }

    #[test]
    fn corners_are_toroidal_neighbors() {
        // (0,0) and the far corner touch across both wrapped edges
        let grid = grid_with(9, 6, &[(0, 0), (8, 5)]);
        assert_eq!(grid.count_neighbors(0, 0), 1);
        assert_eq!(grid.count_neighbors(8, 5), 1);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let blinker = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let one = blinker.next_generation();
        assert_ne!(one, blinker);
        // horizontal after one step
        assert!(one.get(1, 2).unwrap());
        assert!(one.get(2, 2).unwrap());
        assert!(one.get(3, 2).unwrap());
        let two = one.next_generation();
        assert_eq!(two, blinker);
    }

    #[test]
    fn randomize_empty_board_stays_empty() {
        let mut grid = Grid::new(17, 29).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        grid.randomize(&mut rng);
        assert_eq!(grid.count_living(), 0);
    }

    #[test]
    fn randomize_full_board_stays_full() {
        let mut grid = Grid::new(6, 6).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                grid.toggle(x, y).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(42);
        grid.randomize(&mut rng);
        assert_eq!(grid.count_living(), 36);
    }

    #[test]
    fn randomize_uses_density_before_writing() {
        // With half the board alive, a seeded roll should land near 50%,
        // never at either extreme.
        let mut grid = Grid::new(10, 10).unwrap();
        for i in 0..50 {
            grid.toggle(i % 10, i / 10).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);
        grid.randomize(&mut rng);
        let living = grid.count_living();
        assert!(living > 0 && living < 100);
    }
}

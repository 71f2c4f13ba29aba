use std::sync::atomic::{AtomicU8, Ordering};

use rand::Rng;

use crate::config::{MAX_LEVEL, OPAQUE};
use crate::simulation::cell::{is_valid_emission, Cell};
use crate::simulation::{GridError, Point};

/// Square grid of cells, stored row-major with no gaps.
///
/// Levels live in atomics so a pass can update cells from many threads while
/// neighbors read them. All level traffic uses `Relaxed`: a pass tolerates
/// seeing a neighbor either before or after its update.
#[derive(Debug)]
pub struct Grid {
    side: usize,
    emissions: Vec<i8>,
    levels: Vec<AtomicU8>,
}

impl Grid {
    /// Largest side: coordinates are `i32`, so every column must fit one
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Create a `side` x `side` grid of empty cells (emission 0, level 0)
    pub fn new(side: usize) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cell_count = side
            .checked_mul(side)
            .filter(|_| side <= Self::MAX_SIDE)
            .ok_or(GridError::TooLarge { side })?;
        Ok(Self {
            side,
            emissions: vec![0; cell_count],
            levels: (0..cell_count).map(|_| AtomicU8::new(0)).collect(),
        })
    }

    /// Create a grid with randomly placed sources and opaque cells.
    /// Levels start at 0; run passes to light the scene.
    pub fn random<R: Rng + ?Sized>(
        side: usize,
        source_probability: f64,
        opaque_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(side)?;
        for emission in &mut grid.emissions {
            let roll = rng.gen::<f64>();
            *emission = if roll < opaque_probability {
                OPAQUE
            } else if roll < opaque_probability + source_probability {
                rng.gen_range(1..=MAX_LEVEL as i8)
            } else {
                0
            };
        }
        Ok(grid)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.emissions.len()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Storage index of `p`, or None if outside the grid
    pub fn index(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x < self.side && y < self.side {
            Some(y * self.side + x)
        } else {
            None
        }
    }

    pub fn point_at(&self, index: usize) -> Point {
        Point::new((index % self.side) as i32, (index / self.side) as i32)
    }

    /// Read a cell for rendering or input mapping
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cell_at(i))
    }

    /// Set one cell's emission, returning the cell as it was before the edit.
    ///
    /// Out-of-range points and emissions leave the grid untouched. The level is
    /// not recomputed here; the next pass picks the edit up.
    pub fn set_emission(&mut self, p: Point, emission: i8) -> Result<Cell, GridError> {
        if !is_valid_emission(emission) {
            return Err(GridError::EmissionOutOfRange { value: emission });
        }
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            point: p,
            side: self.side,
        })?;
        let previous = self.cell_at(i);
        self.emissions[i] = emission;
        Ok(previous)
    }

    /// Replace every cell with an empty one
    pub fn reset(&mut self) {
        self.emissions.fill(0);
        for level in &mut self.levels {
            *level.get_mut() = 0;
        }
    }

    /// Brightest level among the neighbors of `p` that exist. 0 if there are none.
    pub fn max_neighbor_level(&self, p: Point) -> u8 {
        p.neighbors()
            .filter_map(|n| self.index(n))
            .map(|i| self.level_at(i))
            .max()
            .unwrap_or(0)
    }

    /// Every cell with its coordinate, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        (0..self.cell_count()).map(move |i| (self.point_at(i), self.cell_at(i)))
    }

    /// Snapshot of all levels in storage order
    pub fn levels(&self) -> Vec<u8> {
        self.levels.iter().map(|l| l.load(Ordering::Relaxed)).collect()
    }

    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        Cell {
            emission: self.emissions[index],
            level: self.level_at(index),
        }
    }

    pub(crate) fn emission_at(&self, index: usize) -> i8 {
        self.emissions[index]
    }

    pub(crate) fn level_at(&self, index: usize) -> u8 {
        self.levels[index].load(Ordering::Relaxed)
    }

    /// Store a level, returning the one it replaced
    pub(crate) fn swap_level(&self, index: usize, level: u8) -> u8 {
        self.levels[index].swap(level, Ordering::Relaxed)
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            side: self.side,
            emissions: self.emissions.clone(),
            levels: self.levels().into_iter().map(AtomicU8::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(16).unwrap();
        assert_eq!(grid.cell_count(), 256);
        for (_, cell) in grid.cells() {
            assert_eq!(cell, Cell::EMPTY);
        }
    }

    #[test]
    fn test_zero_side_rejected() {
        assert_eq!(Grid::new(0).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn test_every_coordinate_present() {
        let grid = Grid::new(5).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert!(grid.get(Point::new(x, y)).is_some());
            }
        }
        assert!(grid.get(Point::new(-1, 0)).is_none());
        assert!(grid.get(Point::new(0, 5)).is_none());
        assert!(grid.get(Point::new(5, 0)).is_none());
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = Grid::new(7).unwrap();
        for i in 0..grid.cell_count() {
            assert_eq!(grid.index(grid.point_at(i)), Some(i));
        }
    }

    #[test]
    fn test_set_emission() {
        let mut grid = Grid::new(4).unwrap();
        let before = grid.set_emission(Point::new(2, 3), 9).unwrap();
        assert_eq!(before, Cell::EMPTY);
        assert_eq!(grid.get(Point::new(2, 3)).unwrap().emission, 9);
        // level only moves on the next pass
        assert_eq!(grid.get(Point::new(2, 3)).unwrap().level, 0);
    }

    #[test]
    fn test_set_emission_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4).unwrap();
        let err = grid.set_emission(Point::new(4, 0), 5).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                point: Point::new(4, 0),
                side: 4
            }
        );
        assert!(grid.cells().all(|(_, c)| c == Cell::EMPTY));
    }

    #[test]
    fn test_set_emission_rejects_bad_values() {
        let mut grid = Grid::new(4).unwrap();
        assert_eq!(
            grid.set_emission(Point::new(0, 0), 16).unwrap_err(),
            GridError::EmissionOutOfRange { value: 16 }
        );
        assert_eq!(
            grid.set_emission(Point::new(0, 0), -3).unwrap_err(),
            GridError::EmissionOutOfRange { value: -3 }
        );
        assert_eq!(grid.get(Point::new(0, 0)), Some(Cell::EMPTY));
    }

    #[test]
    fn test_max_neighbor_level_skips_missing() {
        let grid = Grid::new(3).unwrap();
        grid.swap_level(grid.index(Point::new(1, 0)).unwrap(), 7);
        grid.swap_level(grid.index(Point::new(0, 1)).unwrap(), 4);
        // corner: two neighbors exist, two are off-grid
        assert_eq!(grid.max_neighbor_level(Point::new(0, 0)), 7);
        // diagonal does not count
        assert_eq!(grid.max_neighbor_level(Point::new(1, 1)), 7);
        assert_eq!(grid.max_neighbor_level(Point::new(2, 2)), 0);
    }

    #[test]
    fn test_oversized_side_rejected() {
        let side = usize::MAX / 2;
        assert_eq!(Grid::new(side).unwrap_err(), GridError::TooLarge { side });
        let side = Grid::MAX_SIDE + 1;
        assert_eq!(Grid::new(side).unwrap_err(), GridError::TooLarge { side });
    }

    #[test]
    fn test_max_neighbor_level_far_off_grid() {
        let grid = Grid::new(4).unwrap();
        grid.swap_level(grid.index(Point::new(3, 0)).unwrap(), 9);
        assert_eq!(grid.max_neighbor_level(Point::new(i32::MAX, 0)), 0);
        assert_eq!(grid.max_neighbor_level(Point::new(i32::MAX, i32::MIN)), 0);
        assert_eq!(grid.max_neighbor_level(Point::new(i32::MIN, i32::MAX)), 0);
        // one step past the edge still sees the edge cell
        assert_eq!(grid.max_neighbor_level(Point::new(4, 0)), 9);
    }

    #[test]
    fn test_max_neighbor_level_single_cell() {
        let grid = Grid::new(1).unwrap();
        assert_eq!(grid.max_neighbor_level(Point::new(0, 0)), 0);
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_emission(Point::new(1, 1), 12).unwrap();
        grid.swap_level(4, 12);
        grid.reset();
        assert!(grid.cells().all(|(_, c)| c == Cell::EMPTY));
    }

    #[test]
    fn test_random_grid_emissions_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(20, 0.1, 0.2, &mut rng).unwrap();
        assert!(grid.cells().all(|(_, c)| is_valid_emission(c.emission)));
        assert!(grid.cells().any(|(_, c)| c.is_opaque()));
        assert!(grid.cells().any(|(_, c)| c.is_source()));
        assert!(grid.levels().iter().all(|&l| l == 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(2).unwrap();
        let copy = grid.clone();
        grid.set_emission(Point::new(0, 0), 3).unwrap();
        assert_eq!(copy.get(Point::new(0, 0)), Some(Cell::EMPTY));
    }
}

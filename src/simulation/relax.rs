use rayon::prelude::*;

use crate::simulation::{Grid, GridError};

/// How a pass schedules its per-cell updates.
///
/// Every strategy reaches the same fixed point: the rule is monotone in
/// neighbor levels and bounded to [0, 15]. Only the pass count differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassStrategy {
    /// Sequential row-major sweep, updating in place
    #[default]
    Sweep,
    /// One rayon task per cell, in place. Neighbor reads race with neighbor
    /// writes and may see either value.
    Parallel,
    /// Levels snapshotted before the pass; each cell reads only the snapshot
    Synchronous,
}

/// Outcome of running passes until a quiet one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Convergence {
    /// Passes run, including the final pass with no changes
    pub passes: usize,
    /// Sum of changed counts over all passes
    pub changed: usize,
}

/// Next level of a cell given its emission and its brightest neighbor.
///
/// Opaque cells are always dark. Light loses one level per step, floored at 0.
/// Sources hold at least their own emission but a brighter neighbor can push
/// them higher.
pub fn relaxed_level(emission: i8, brightest_neighbor: u8) -> u8 {
    if emission < 0 {
        return 0;
    }
    let ambient = brightest_neighbor.saturating_sub(1);
    ambient.max(emission as u8)
}

impl Grid {
    /// Advance one pass with the default strategy. Returns the changed count.
    pub fn evolve(&mut self) -> usize {
        self.evolve_with(PassStrategy::default())
    }

    /// Advance one pass. Returns how many cells changed level; 0 means converged.
    pub fn evolve_with(&mut self, strategy: PassStrategy) -> usize {
        let changed = match strategy {
            PassStrategy::Sweep => (0..self.cell_count())
                .filter(|&i| self.relax_cell(i))
                .count(),
            PassStrategy::Parallel => {
                let grid = &*self;
                (0..grid.cell_count())
                    .into_par_iter()
                    .filter(|&i| grid.relax_cell(i))
                    .count()
            }
            PassStrategy::Synchronous => {
                let snapshot = self.levels();
                let grid = &*self;
                (0..grid.cell_count())
                    .into_par_iter()
                    .filter(|&i| {
                        let brightest = grid
                            .point_at(i)
                            .neighbors()
                            .filter_map(|n| grid.index(n))
                            .map(|n| snapshot[n])
                            .max()
                            .unwrap_or(0);
                        let next = relaxed_level(grid.emission_at(i), brightest);
                        grid.swap_level(i, next) != next
                    })
                    .count()
            }
        };

        log::debug!("Number changed: {}", changed);
        changed
    }

    /// Run passes until one changes nothing.
    ///
    /// Fails with `NotConverged` once `pass_limit` passes have all changed something.
    pub fn converge(
        &mut self,
        strategy: PassStrategy,
        pass_limit: usize,
    ) -> Result<Convergence, GridError> {
        let mut total = 0;
        for pass in 1..=pass_limit {
            let changed = self.evolve_with(strategy);
            if changed == 0 {
                log::info!(
                    "Converged after {} passes ({} level changes, {:?})",
                    pass,
                    total,
                    strategy
                );
                return Ok(Convergence {
                    passes: pass,
                    changed: total,
                });
            }
            total += changed;
        }

        log::warn!("No fixed point within {} passes", pass_limit);
        Err(GridError::NotConverged { passes: pass_limit })
    }

    /// Recompute one cell in place from the current neighbor levels.
    /// Returns whether its level changed.
    fn relax_cell(&self, index: usize) -> bool {
        let next = relaxed_level(
            self.emission_at(index),
            self.max_neighbor_level(self.point_at(index)),
        );
        self.swap_level(index, next) != next
    }
}

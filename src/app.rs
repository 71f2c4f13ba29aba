use crate::config::SolverConfig;
use crate::simulation::{cycle_emission, toggle_opaque, Convergence, Grid, GridError, Point};

/// User actions the shell forwards to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Step the cell's emission to the next value (left click)
    Cycle(Point),
    /// Make the cell opaque, or clear it if it already is (right click)
    ToggleOpaque(Point),
    /// Throw the grid away and start empty (R key)
    Reset,
}

/// Application state: the grid plus the solver settings driving it
pub struct App {
    grid: Grid,
    config: SolverConfig,
    frame_number: u64,
}

impl App {
    pub fn new(config: SolverConfig) -> Result<Self, GridError> {
        log::info!(
            "Grid size: {}x{}, strategy {:?}",
            config.side,
            config.side,
            config.strategy
        );
        Ok(Self {
            grid: Grid::new(config.side)?,
            config,
            frame_number: 0,
        })
    }

    /// Wrap an existing grid; the config's side is taken from the grid
    pub fn with_grid(grid: Grid, mut config: SolverConfig) -> Self {
        config.side = grid.side();
        Self {
            grid,
            config,
            frame_number: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Apply one input. Inputs that miss the grid are logged and dropped.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Cycle(p) => self.edit(p, cycle_emission),
            Input::ToggleOpaque(p) => self.edit(p, toggle_opaque),
            Input::Reset => {
                self.grid.reset();
                log::info!("Grid reset");
            }
        }
    }

    fn edit(&mut self, p: Point, next: fn(i8) -> i8) {
        let Some(cell) = self.grid.get(p) else {
            // No big deal if the guess misses, note it and move on
            log::warn!("Input outside grid at {}", p);
            return;
        };
        let emission = next(cell.emission);
        match self.grid.set_emission(p, emission) {
            Ok(_) => log::debug!("Emission at {}: {} -> {}", p, cell.emission, emission),
            Err(e) => log::warn!("Edit at {} rejected: {}", p, e),
        }
    }

    /// One frame: a single relaxation pass. Returns the changed count.
    pub fn tick(&mut self) -> usize {
        let changed = self.grid.evolve_with(self.config.strategy);
        self.frame_number = self.frame_number.wrapping_add(1);
        changed
    }

    /// Run passes until the light settles
    pub fn settle(&mut self) -> Result<Convergence, GridError> {
        self.grid.converge(self.config.strategy, self.config.pass_limit)
    }
}

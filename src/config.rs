use crate::simulation::PassStrategy;

/// Grid side length (16x16 = 256 cells, one Minecraft chunk slice)
pub const GRID_SIDE: usize = 16;

/// Brightest light level a cell can hold or emit
pub const MAX_LEVEL: u8 = 15;

/// Emission sentinel marking a light-blocking cell
pub const OPAQUE: i8 = -1;

// ============================================
// Demo scene
// ============================================

/// Starter light source position and strength
pub const DEMO_SOURCE: (i32, i32) = (1, 1);
pub const DEMO_SOURCE_EMISSION: i8 = 15;

/// Random scene parameters
pub const SOURCE_PROBABILITY: f64 = 0.03;
pub const OPAQUE_PROBABILITY: f64 = 0.15;

/// Fixed seed so the demo scene is reproducible
pub const DEMO_SEED: u64 = 0x5eed_0f_11647;

/// Pass budget for a grid of the given side.
///
/// Light reaches at most 15 cells from a source and every pass moves a
/// front by at least one cell, so `15 x diameter` passes suffice. The extra
/// pass per step of diameter covers the final quiet pass on tiny grids.
pub fn default_pass_limit(side: usize) -> usize {
    (MAX_LEVEL as usize + 1).saturating_mul(side.max(1).saturating_mul(2) - 1)
}

/// Runtime solver parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub side: usize,
    pub strategy: PassStrategy,
    pub pass_limit: usize,
}

impl SolverConfig {
    /// Config for a grid of the given side with the default strategy and budget
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            strategy: PassStrategy::default(),
            pass_limit: default_pass_limit(side),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::with_side(GRID_SIDE)
    }
}

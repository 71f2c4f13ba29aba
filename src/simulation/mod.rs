pub mod cell;
mod error;
mod grid;
mod point;
mod relax;

pub use cell::{cycle_emission, toggle_opaque, Cell};
pub use error::GridError;
pub use grid::Grid;
pub use point::Point;
pub use relax::{relaxed_level, Convergence, PassStrategy};

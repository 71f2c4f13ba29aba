use std::fmt;

use crate::simulation::Point;

/// Errors from grid construction, edits and convergence runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one cell
    EmptyGrid,
    /// The side is too large to address or allocate
    TooLarge { side: usize },
    /// The point has no cell in this grid
    OutOfBounds { point: Point, side: usize },
    /// Emission is neither a level in [0, 15] nor the opaque sentinel
    EmissionOutOfRange { value: i8 },
    /// The pass budget ran out before a quiet pass
    NotConverged { passes: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::TooLarge { side } => write!(f, "grid side {side} is too large"),
            Self::OutOfBounds { point, side } => {
                write!(f, "point {point} outside {side}x{side} grid")
            }
            Self::EmissionOutOfRange { value } => {
                write!(f, "emission {value} out of range, expected -1 or 0..=15")
            }
            Self::NotConverged { passes } => {
                write!(f, "light did not converge after {passes} passes")
            }
        }
    }
}

impl std::error::Error for GridError {}

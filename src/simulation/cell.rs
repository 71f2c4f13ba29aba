use crate::config::{MAX_LEVEL, OPAQUE};

/// Emission status and light level of one grid location.
///
/// - emission: [0, 15] source strength (0 = not a source), negative = opaque
/// - level: [0, 15] computed light level, never set directly
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// If light source, then >0. Negative blocks light.
    pub emission: i8,

    /// Light level, derived from neighbors and own emission
    pub level: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        emission: 0,
        level: 0,
    };

    pub fn is_opaque(&self) -> bool {
        self.emission < 0
    }

    pub fn is_source(&self) -> bool {
        self.emission > 0
    }
}

/// Whether `emission` may be stored in a cell: a level in [0, 15] or the opaque sentinel
pub fn is_valid_emission(emission: i8) -> bool {
    emission == OPAQUE || (0..=MAX_LEVEL as i8).contains(&emission)
}

/// Next emission in the cycle 0, 1, ..., 15, opaque, 0, ...
///
/// Any negative emission counts as opaque and wraps back to 0.
pub fn cycle_emission(emission: i8) -> i8 {
    if emission < 0 {
        0
    } else if emission >= MAX_LEVEL as i8 {
        OPAQUE
    } else {
        emission + 1
    }
}

/// Opaque cells become empty, everything else becomes opaque
pub fn toggle_opaque(emission: i8) -> i8 {
    if emission < 0 {
        0
    } else {
        OPAQUE
    }
}

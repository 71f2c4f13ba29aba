use std::fmt;

/// Integer grid coordinate. May lie outside any grid; lookups then miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The axis-aligned neighbors in order west, east, north, south.
    /// No diagonals and no wraparound, so edge points yield out-of-grid
    /// neighbors. Neighbors past the `i32` range are left out.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        [
            self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            self.x.checked_add(1).map(|x| Point::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            self.y.checked_add(1).map(|y| Point::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
    }

    /// Manhattan (L1) distance
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

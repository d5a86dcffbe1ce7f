use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Integer 2D vector, used both for maze-space and grid-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

/// Position in the world, before it's snapped to the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos(pub f32, pub f32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Iterates row by row, top to bottom in screen order (`y` descending).
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1)
            .rev()
            .flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

impl WorldPos {
    pub fn floor(self) -> Dims {
        Dims(self.0.floor() as i32, self.1.floor() as i32)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

impl From<(f32, f32)> for WorldPos {
    fn from(tuple: (f32, f32)) -> Self {
        WorldPos(tuple.0, tuple.1)
    }
}

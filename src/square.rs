use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A square on the board as `(file, rank)`.
///
/// Coordinates are signed and unchecked: a `Square` may lie off the board, which is
/// how the move generators describe candidates before they are bounds checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

impl Square {
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub const fn is_out_of_bounds(self, board_size: i32) -> bool {
        self.file < 0 || self.file >= board_size || self.rank < 0 || self.rank >= board_size
    }

    /// Squares along `dir`, nearest first, `len` of them. The square itself is excluded.
    pub fn ray(self, dir: Offset, len: i32) -> impl Iterator<Item = Square> {
        (1..=len).map(move |dist| self + dir * dist)
    }

    /// Squares reached by applying each offset in order.
    pub fn offsets(self, offsets: &[Offset]) -> impl Iterator<Item = Square> + '_ {
        offsets.iter().map(move |&offset| self + offset)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

impl From<(i32, i32)> for Square {
    fn from((file, rank): (i32, i32)) -> Self {
        Square::new(file, rank)
    }
}

/// A displacement between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub file: i32,
    pub rank: i32,
}

impl Offset {
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }
}

impl Add<Offset> for Square {
    type Output = Square;

    fn add(self, rhs: Offset) -> Square {
        Square::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl Mul<i32> for Offset {
    type Output = Offset;

    fn mul(self, rhs: i32) -> Offset {
        Offset::new(self.file * rhs, self.rank * rhs)
    }
}

// Row-major around the origin: file -1..=1, then rank -1..=1.
pub(crate) const KING_OFFSETS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(1, -2),
    Offset::new(2, -1),
    Offset::new(-1, 2),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
];

pub(crate) const DIAGONAL_DIRS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(-1, -1),
];

pub(crate) const STRAIGHT_DIRS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

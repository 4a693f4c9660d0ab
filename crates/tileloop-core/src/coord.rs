//! Integer cell coordinates and cardinal travel directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate on a 2D tile grid.
///
/// `y` grows upward, so [`Direction::Up`] adds one to `y`. Ordering is
/// lexicographic by `(x, y)`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ZERO: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// Overflows like `i32` addition. Use
    /// [`checked_step`](Self::checked_step) for cells that may sit on the
    /// `i32` edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, Direction};
    ///
    /// assert_eq!(Coord::new(-3, 0).step(Direction::Left), Coord::new(-4, 0));
    /// assert_eq!(Coord::new(0, 0).step(Direction::Up), Coord::new(0, 1));
    /// ```
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Like [`step`](Self::step), but `None` if the result leaves the `i32` range.
    pub fn checked_step(self, direction: Direction) -> Option<Self> {
        let d = direction.offset();
        Some(Coord::new(self.x.checked_add(d.x)?, self.y.checked_add(d.y)?))
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Component-wise addition. Overflows like `i32` addition.
impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Component-wise subtraction. Overflows like `i32` subtraction.
impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal travel directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Toward `+y`.
    Up,
    /// Toward `-y`.
    Down,
    /// Toward `-x`.
    Left,
    /// Toward `+x`.
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse direction. `d.opposite().opposite() == d`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit offset of one step in this direction.
    pub const fn offset(self) -> Coord {
        match self {
            Self::Up => Coord::new(0, 1),
            Self::Down => Coord::new(0, -1),
            Self::Left => Coord::new(-1, 0),
            Self::Right => Coord::new(1, 0),
        }
    }

    /// Axis this direction moves along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

impl Axis {
    /// The two directions along this axis.
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::Vertical => [Direction::Down, Direction::Up],
        }
    }
}

/// One side of a rectangular room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    /// Top row (`y == max.y`).
    North,
    /// Bottom row (`y == min.y`).
    South,
    /// Right column (`x == max.x`).
    East,
    /// Left column (`x == min.x`).
    West,
}

impl Edge {
    /// All four edges.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    /// The edge across the room.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Direction that leaves the room through this edge.
    pub const fn outward(self) -> Direction {
        match self {
            Self::North => Direction::Up,
            Self::South => Direction::Down,
            Self::East => Direction::Right,
            Self::West => Direction::Left,
        }
    }

    /// Axis that runs along this edge.
    pub const fn along(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Horizontal,
            Self::East | Self::West => Axis::Vertical,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Edge::West.opposite(), Edge::East);
        assert_eq!(Edge::North.opposite(), Edge::South);
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Coord::ZERO);
        }
    }

    #[test]
    fn outward_direction_matches_edge() {
        assert_eq!(Edge::West.outward(), Direction::Left);
        assert_eq!(Edge::North.outward(), Direction::Up);
        for e in Edge::ALL {
            assert_eq!(e.opposite().outward(), e.outward().opposite());
            assert_ne!(e.along(), e.outward().axis());
        }
    }

    #[test]
    fn checked_step_stops_at_i32_edge() {
        assert_eq!(Coord::new(i32::MAX, 0).checked_step(Direction::Right), None);
        assert_eq!(Coord::new(0, i32::MIN).checked_step(Direction::Down), None);
        assert_eq!(
            Coord::new(0, 0).checked_step(Direction::Left),
            Some(Coord::new(-1, 0))
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(-4, 0).manhattan(Coord::new(4, 0)), 8);
        assert_eq!(Coord::new(1, -2).manhattan(Coord::new(-1, 1)), 5);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn opposite_is_involution(d in arb_direction()) {
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }

        #[test]
        fn step_then_step_back_returns(x in -1000i32..1000, y in -1000i32..1000, d in arb_direction()) {
            let c = Coord::new(x, y);
            prop_assert_eq!(c.step(d).step(d.opposite()), c);
        }
    }
}

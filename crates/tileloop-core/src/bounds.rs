//! Inclusive rectangular grid extents.

use crate::coord::{Coord, Direction};
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// An inclusive, non-empty rectangle of cells `[min, max]`.
///
/// Bounds the flood fill and the perimeter scans: nothing outside a
/// grid's bounds is ever visited. Construction rejects empty extents, so
/// every `GridBounds` holds at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct GridBounds {
    min: Coord,
    max: Coord,
}

impl GridBounds {
    /// Largest width or height: every cell index must fit `i32` arithmetic.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create bounds spanning `min..=max` on both axes.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `min` exceeds `max` on
    /// either axis, or `Err(GridError::DimensionTooLarge)` if a side is
    /// longer than [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(min: Coord, max: Coord) -> Result<Self, GridError> {
        if min.x > max.x || min.y > max.y {
            return Err(GridError::EmptyGrid);
        }
        let width = i64::from(max.x) - i64::from(min.x) + 1;
        let height = i64::from(max.y) - i64::from(min.y) + 1;
        for (name, value) in [("width", width), ("height", height)] {
            if value > i64::from(Self::MAX_DIM) {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value: value as u64,
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Create bounds of `width x height` cells whose bottom-left cell is `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, GridBounds};
    ///
    /// let b = GridBounds::from_origin_size(Coord::new(-4, -4), 9, 9).unwrap();
    /// assert_eq!(b.max(), Coord::new(4, 4));
    /// assert_eq!(b.cell_count(), 81);
    /// assert!(GridBounds::from_origin_size(Coord::ZERO, 0, 3).is_err());
    /// ```
    pub fn from_origin_size(origin: Coord, width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value: u64::from(value),
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        let max_x = i64::from(origin.x) + i64::from(width) - 1;
        let max_y = i64::from(origin.y) + i64::from(height) - 1;
        let max_x = i32::try_from(max_x).map_err(|_| GridError::DimensionTooLarge {
            name: "width",
            value: u64::from(width),
            max: (i64::from(i32::MAX) - i64::from(origin.x) + 1) as u64,
        })?;
        let max_y = i32::try_from(max_y).map_err(|_| GridError::DimensionTooLarge {
            name: "height",
            value: u64::from(height),
            max: (i64::from(i32::MAX) - i64::from(origin.y) + 1) as u64,
        })?;
        Self::new(origin, Coord::new(max_x, max_y))
    }

    /// Smallest bounds holding exactly one cell.
    pub fn single(coord: Coord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Bottom-left cell (inclusive).
    pub fn min(&self) -> Coord {
        self.min
    }

    /// Top-right cell (inclusive).
    pub fn max(&self) -> Coord {
        self.max
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u32
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u32
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Always `false`: construction rejects empty bounds.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies inside the bounds.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Whether `other` lies entirely inside these bounds.
    pub fn contains_bounds(&self, other: &GridBounds) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Smallest bounds covering both `self` and `coord`.
    pub fn expanded_to(&self, coord: Coord) -> Self {
        Self {
            min: Coord::new(self.min.x.min(coord.x), self.min.y.min(coord.y)),
            max: Coord::new(self.max.x.max(coord.x), self.max.y.max(coord.y)),
        }
    }

    /// Row-major index of `coord` (bottom row first), or `None` outside.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let col = (i64::from(coord.x) - i64::from(self.min.x)) as usize;
        let row = (i64::from(coord.y) - i64::from(self.min.y)) as usize;
        Some(row * self.width() as usize + col)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        let width = self.width() as usize;
        let col = (index % width) as i64;
        let row = (index / width) as i64;
        Some(Coord::new(
            (i64::from(self.min.x) + col) as i32,
            (i64::from(self.min.y) + row) as i32,
        ))
    }

    /// The 4-connected neighbours of `coord` that lie inside the bounds,
    /// in [`Direction::ALL`] order.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        for d in Direction::ALL {
            if let Some(n) = coord.checked_step(d) {
                if self.contains(n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// All cells in row-major order, bottom row first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.coord_at(i))
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min, self.max)
    }
}

/// Unvalidated serde form of [`GridBounds`].
#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: Coord,
    max: Coord,
}

impl TryFrom<RawBounds> for GridBounds {
    type Error = GridError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        GridBounds::new(raw.min, raw.max)
    }
}

impl From<GridBounds> for RawBounds {
    fn from(b: GridBounds) -> Self {
        RawBounds {
            min: b.min,
            max: b.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn new_rejects_inverted_axes() {
        assert_eq!(GridBounds::new(c(1, 0), c(0, 0)), Err(GridError::EmptyGrid));
        assert_eq!(GridBounds::new(c(0, 1), c(0, 0)), Err(GridError::EmptyGrid));
        assert!(GridBounds::new(c(0, 0), c(0, 0)).is_ok());
    }

    #[test]
    fn new_rejects_sides_exceeding_i32_max() {
        assert!(matches!(
            GridBounds::new(c(i32::MIN, 0), c(i32::MAX, 0)),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridBounds::from_origin_size(c(i32::MAX, 0), 2, 1),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
    }

    #[test]
    fn dimensions_and_contains() {
        let b = GridBounds::new(c(-10, -7), c(4, 3)).unwrap();
        assert_eq!(b.width(), 15);
        assert_eq!(b.height(), 11);
        assert_eq!(b.cell_count(), 165);
        assert!(b.contains(c(-10, -7)));
        assert!(b.contains(c(4, 3)));
        assert!(!b.contains(c(5, 0)));
        assert!(!b.contains(c(0, -8)));
    }

    #[test]
    fn neighbours_clip_at_corner() {
        let b = GridBounds::new(c(0, 0), c(3, 3)).unwrap();
        let n = b.neighbours(c(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 0)));
        assert_eq!(b.neighbours(c(1, 1)).len(), 4);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let b = GridBounds::single(c(7, -7));
        assert_eq!(b.cell_count(), 1);
        assert!(b.neighbours(c(7, -7)).is_empty());
    }

    #[test]
    fn iter_is_row_major_bottom_first() {
        let b = GridBounds::new(c(0, 0), c(1, 1)).unwrap();
        let cells: Vec<_> = b.iter().collect();
        assert_eq!(cells, vec![c(0, 0), c(1, 0), c(0, 1), c(1, 1)]);
    }

    #[test]
    fn expanded_to_grows_both_corners() {
        let b = GridBounds::single(c(0, 0)).expanded_to(c(-2, 3));
        assert_eq!(b.min(), c(-2, 0));
        assert_eq!(b.max(), c(0, 3));
    }

    proptest! {
        #[test]
        fn index_round_trips(
            x in -50i32..50, y in -50i32..50,
            w in 1u32..20, h in 1u32..20,
            i in 0usize..400,
        ) {
            let b = GridBounds::from_origin_size(c(x, y), w, h).unwrap();
            let i = i % b.cell_count();
            let coord = b.coord_at(i).unwrap();
            prop_assert!(b.contains(coord));
            prop_assert_eq!(b.index_of(coord), Some(i));
        }
    }
}

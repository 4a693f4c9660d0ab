//! Error types for grid construction and grid queries.

use crate::bounds::GridBounds;
use crate::coord::Coord;
use thiserror::Error;

/// Errors arising from grid construction or coordinate validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell")]
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate space.
    #[error("{name} = {value} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
    /// A coordinate lies outside the grid bounds.
    #[error("coordinate {coord} out of bounds {bounds}")]
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The grid's bounds.
        bounds: GridBounds,
    },
    /// ASCII map rows have differing widths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Zero-based row index, top row first.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// An ASCII map uses a glyph missing from its palette.
    #[error("glyph {glyph:?} at row {row}, column {col} is not in the palette")]
    UnknownGlyph {
        /// The unmapped character.
        glyph: char,
        /// Zero-based row index, top row first.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

//! Error types for loop table construction and lookup.

use thiserror::Error;
use tileloop_core::Coord;

/// Precondition violations around loop tables.
///
/// A room with no border pairs is not an error; it builds an empty table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoopError {
    /// The scan region has zero width or height.
    #[error("loop scan region {width}x{height} is degenerate")]
    DegenerateRegion {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The scan region does not fit the `i32` coordinate space.
    #[error("loop scan region {width}x{height} around {anchor} does not fit i32 coordinates")]
    RegionTooLarge {
        /// Requested centre.
        anchor: Coord,
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A loop table was queried before it was built.
    #[error("loop table queried before it was built")]
    NotBuilt,
    /// A second build was attempted on an already built slot.
    #[error("loop table already built")]
    AlreadyBuilt,
}

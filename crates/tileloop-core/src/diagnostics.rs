//! Injected reporting of non-fatal anomalies.
//!
//! Components that notice something suspicious but recoverable (a border
//! tile without a partner, a room larger than its grid) report it through
//! a [`DiagnosticSink`] handed to them by the host, instead of writing to
//! a process-wide logger. [`LogSink`] forwards to the `log` facade and is
//! the default everywhere a sink is optional.

use crate::bounds::GridBounds;
use crate::coord::{Coord, Edge};
use crate::id::TileFilter;
use std::fmt;

/// A recoverable anomaly observed while scanning a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A border tile on one edge has no counterpart on the opposite edge.
    /// Movement into it is treated as hitting a wall.
    UnpairedBorderTile {
        /// Position of the tile.
        coord: Coord,
        /// Edge it lies on.
        edge: Edge,
    },
    /// The scanned room reaches outside the grid; cells out there read as empty.
    RoomExceedsGrid {
        /// The room that was scanned.
        room: GridBounds,
        /// The grid's declared bounds.
        grid: GridBounds,
    },
    /// An area query was seeded outside the grid bounds.
    SeedOutsideGrid {
        /// The seed.
        seed: Coord,
        /// The filter that was requested.
        filter: TileFilter,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnpairedBorderTile { coord, edge } => {
                write!(f, "border tile at {coord} on {edge} edge has no opposite partner")
            }
            Self::RoomExceedsGrid { room, grid } => {
                write!(f, "loop room {room} extends outside grid bounds {grid}")
            }
            Self::SeedOutsideGrid { seed, filter } => {
                write!(f, "area seed {seed} ({filter}) lies outside the grid")
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s.
///
/// `Send + Sync` so a sink can be shared between a world and anything the
/// host runs on other threads.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!(target: "tileloop", "{diagnostic}");
    }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

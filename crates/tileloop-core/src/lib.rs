//! Core types and traits for the tileloop workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by area detection, loop resolution and the world
//! layer: integer cell coordinates, travel directions, tile identifiers,
//! grid bounds, the read-only [`TileGrid`] contract and the injected
//! [`DiagnosticSink`] used to report anomalies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod coord;
pub mod diagnostics;
pub mod error;
pub mod id;
pub mod traits;

pub use bounds::GridBounds;
pub use coord::{Axis, Coord, Direction, Edge};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use error::GridError;
pub use id::{TileFilter, TileId};
pub use traits::TileGrid;

//! Border-loop discovery and wrap-around lookup for tileloop.
//!
//! A room wraps when border tiles on opposite edges face each other: an
//! actor stepping into the west border tile of row `y` re-emerges on the
//! east border tile of the same row, still heading west. This crate scans
//! a room once, pairs its border tiles and freezes the result into a
//! [`LoopTable`] that answers `(cell, direction)` queries in O(1).
//!
//! - [`LoopScan`]: which room to scan and which tile marks its border
//! - [`LoopResolver`]: the single-pass perimeter scan
//! - [`LoopTable`]: the frozen lookup, defaulting to [`CollisionAnswer::NoValidMovement`]
//! - [`LoopSlot`]: build-once holder distinguishing built from unbuilt

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod answer;
pub mod error;
pub mod resolver;
pub mod scan;
pub mod slot;
pub mod table;

pub use answer::CollisionAnswer;
pub use error::LoopError;
pub use resolver::{build_loop_table, LoopResolver};
pub use scan::LoopScan;
pub use slot::LoopSlot;
pub use table::{BorderPair, LoopTable, UnpairedTile};

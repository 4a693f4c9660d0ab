//! Tile map backends and area detection for tileloop.
//!
//! This crate provides concrete [`TileGrid`](tileloop_core::TileGrid)
//! implementations and the flood-fill [`detect_area`] operation.
//!
//! # Backends
//!
//! - [`TileMap`]: dense row-major storage over a fixed [`GridBounds`](tileloop_core::GridBounds)
//! - [`SparseTileMap`]: only occupied cells are stored, bounds are declared or derived
//!
//! Both can be loaded from ASCII art through a [`Palette`].
//!
//! # Area detection
//!
//! [`detect_area`] returns the [`TravelableArea`] reachable from a seed
//! cell through 4-connected cells of one classification. [`components`]
//! partitions a whole grid the same way.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod palette;
pub mod sparse;
pub mod tile_map;

#[cfg(test)]
pub(crate) mod compliance;

pub use area::{components, detect_area, TravelableArea};
pub use palette::Palette;
pub use sparse::SparseTileMap;
pub use tile_map::TileMap;

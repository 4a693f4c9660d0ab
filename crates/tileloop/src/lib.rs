//! Tileloop: tile connectivity and wrap-around border loops for grid games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all tileloop sub-crates. For most users, adding `tileloop` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tileloop::prelude::*;
//!
//! let border = TileId(2);
//! let palette = Palette::new().empty('.').tile('#', TileId(1)).tile('B', border);
//! let map = TileMap::from_ascii(
//!     Coord::new(-2, -1),
//!     &["#####", "B...B", "#####"],
//!     &palette,
//! )
//! .unwrap();
//!
//! // Which cells can an actor at the origin reach?
//! let corridor = detect_area(&map, TileFilter::Empty, Coord::ZERO);
//! assert_eq!(corridor.len(), 3);
//!
//! // Build the level once, then step an actor through the west border.
//! let world = WorldInfo::new(&map, WorldSettings::new(LoopScan::new(Coord::ZERO, border, 5, 3)));
//! world.initialize().unwrap();
//! let mut actor = Actor::new(Coord::new(-1, 0), Direction::Left);
//! assert_eq!(
//!     actor.tick(&world).unwrap(),
//!     MoveOutcome::Wrapped { from: Coord::new(-1, 0), to: Coord::new(2, 0) },
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tileloop-core` | Coordinates, directions, tile ids, bounds, the grid trait, diagnostics |
//! | [`grid`] | `tileloop-grid` | Dense and sparse tile maps, ASCII palettes, area detection |
//! | [`loops`] | `tileloop-loop` | Loop scans, loop tables, the resolver and the build-once slot |
//! | [`world`] | `tileloop-world` | Level definitions, per-level world info, actors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits and diagnostics (`tileloop-core`).
///
/// Contains [`types::Coord`], [`types::Direction`], [`types::TileId`],
/// [`types::GridBounds`], the [`types::TileGrid`] trait and the injected
/// [`types::DiagnosticSink`].
pub use tileloop_core as types;

/// Tile maps and area detection (`tileloop-grid`).
///
/// Provides [`grid::TileMap`], [`grid::SparseTileMap`] and
/// [`grid::detect_area`].
pub use tileloop_grid as grid;

/// Border-loop tables (`tileloop-loop`).
///
/// Build a [`loops::LoopTable`] with [`loops::LoopResolver`] and hold it in
/// a [`loops::LoopSlot`].
pub use tileloop_loop as loops;

/// Level definitions and per-level state (`tileloop-world`).
///
/// [`world::LevelDef`] loads levels from RON, [`world::WorldInfo`] owns the
/// per-level caches and [`world::Actor`] moves through them.
pub use tileloop_world as world;

/// Common imports for typical tileloop usage.
///
/// ```rust
/// use tileloop::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tileloop_core::{
        Coord, Diagnostic, DiagnosticSink, Direction, Edge, GridBounds, LogSink, TileFilter,
        TileGrid, TileId,
    };

    // Errors
    pub use tileloop_core::GridError;
    pub use tileloop_loop::LoopError;
    pub use tileloop_world::{ConfigError, WorldError};

    // Grids and areas
    pub use tileloop_grid::{detect_area, Palette, SparseTileMap, TileMap, TravelableArea};

    // Loops
    pub use tileloop_loop::{build_loop_table, CollisionAnswer, LoopResolver, LoopScan, LoopTable};

    // World
    pub use tileloop_world::{Actor, LevelDef, MoveOutcome, WorldInfo, WorldSettings};
}

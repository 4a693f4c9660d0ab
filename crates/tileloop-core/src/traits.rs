//! The read-only tile grid contract consumed by the core algorithms.

use crate::bounds::GridBounds;
use crate::coord::Coord;
use crate::id::TileId;

/// Read-only access to a tile grid.
///
/// This is the only view of the host's map the core needs: a finite
/// declared extent and a per-cell lookup. Area detection and loop
/// resolution never write to the grid and never hold it past the call.
///
/// Cells outside [`bounds`](Self::bounds) must read as `None`.
pub trait TileGrid {
    /// Declared extent of the grid. Always non-empty.
    fn bounds(&self) -> GridBounds;

    /// The tile at `coord`, or `None` for an empty cell.
    fn tile_at(&self, coord: Coord) -> Option<TileId>;
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    fn bounds(&self) -> GridBounds {
        (**self).bounds()
    }

    fn tile_at(&self, coord: Coord) -> Option<TileId> {
        (**self).tile_at(coord)
    }
}

impl<G: TileGrid + ?Sized> TileGrid for Box<G> {
    fn bounds(&self) -> GridBounds {
        (**self).bounds()
    }

    fn tile_at(&self, coord: Coord) -> Option<TileId> {
        (**self).tile_at(coord)
    }
}

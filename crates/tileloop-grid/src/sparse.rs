//! Sparse tile map storing only occupied cells.

use crate::palette::{ascii_bounds, parse_rows, Palette};
use indexmap::IndexMap;
use tileloop_core::{Coord, GridBounds, GridError, TileGrid, TileId};

/// A tile map that stores only occupied cells.
///
/// Suited to large, mostly empty levels. The declared bounds still limit
/// every query: area detection over empty cells visits the whole declared
/// extent, not just the stored tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseTileMap {
    bounds: GridBounds,
    tiles: IndexMap<Coord, TileId>,
}

impl SparseTileMap {
    /// Create an empty map with declared `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            tiles: IndexMap::new(),
        }
    }

    /// Build a map whose bounds are the tight box around `tiles`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `tiles` is empty.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Coord, TileId)>,
    {
        let tiles: IndexMap<Coord, TileId> = tiles.into_iter().collect();
        let mut coords = tiles.keys().copied();
        let first = coords.next().ok_or(GridError::EmptyGrid)?;
        let bounds = coords.fold(GridBounds::single(first), |b, c| b.expanded_to(c));
        Ok(Self { bounds, tiles })
    }

    /// Parse an ASCII map; see [`TileMap::from_ascii`](crate::TileMap::from_ascii).
    ///
    /// The declared bounds cover the full text, including empty glyphs.
    pub fn from_ascii<S: AsRef<str>>(
        origin: Coord,
        rows: &[S],
        palette: &Palette,
    ) -> Result<Self, GridError> {
        let (parsed, width) = parse_rows(rows, palette)?;
        let height = parsed.len();
        let bounds = ascii_bounds(origin, width, height)?;
        let top = bounds.max().y;
        let mut map = Self::new(bounds);
        for (row, cells) in parsed.into_iter().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                if let Some(tile) = cell {
                    let coord = Coord::new(origin.x + col as i32, top - row as i32);
                    map.tiles.insert(coord, tile);
                }
            }
        }
        Ok(map)
    }

    /// Set or clear the tile at `coord`. The coordinate must be inside the bounds.
    pub fn set_tile(&mut self, coord: Coord, tile: Option<TileId>) -> Result<(), GridError> {
        if !self.bounds.contains(coord) {
            return Err(GridError::CoordOutOfBounds {
                coord,
                bounds: self.bounds,
            });
        }
        match tile {
            Some(t) => {
                self.tiles.insert(coord, t);
            }
            None => {
                self.tiles.shift_remove(&coord);
            }
        }
        Ok(())
    }

    /// Shrink the declared bounds to the occupied cells.
    ///
    /// A map with no tiles keeps its bounds.
    pub fn compress_bounds(&mut self) {
        let mut coords = self.tiles.keys().copied();
        if let Some(first) = coords.next() {
            self.bounds = coords.fold(GridBounds::single(first), |b, c| b.expanded_to(c));
        }
    }

    /// Number of stored tiles.
    pub fn occupied_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over stored tiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileId)> + '_ {
        self.tiles.iter().map(|(&c, &t)| (c, t))
    }
}

impl TileGrid for SparseTileMap {
    fn bounds(&self) -> GridBounds {
        self.bounds
    }

    fn tile_at(&self, coord: Coord) -> Option<TileId> {
        self.tiles.get(&coord).copied()
    }
}

//! Dense tile map backed by a row-major cell vector.

use crate::palette::{ascii_bounds, parse_rows, Palette};
use tileloop_core::{Coord, GridBounds, GridError, TileGrid, TileId};

/// A dense tile map over a fixed rectangular extent.
///
/// Every cell inside [`bounds`](TileGrid::bounds) has a slot; reads
/// outside return `None`. Storage is row-major with the bottom row first,
/// matching [`GridBounds::index_of`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    bounds: GridBounds,
    cells: Vec<Option<TileId>>,
}

impl TileMap {
    /// Create a map where every cell is empty.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.cell_count()],
        }
    }

    /// Create a map where every cell holds `tile`.
    pub fn filled(bounds: GridBounds, tile: TileId) -> Self {
        Self {
            bounds,
            cells: vec![Some(tile); bounds.cell_count()],
        }
    }

    /// Parse an ASCII map.
    ///
    /// `rows` are read top row first; `origin` is the coordinate of the
    /// bottom-left glyph. Every row must have the same width and every
    /// glyph must appear in `palette`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, TileGrid, TileId};
    /// use tileloop_grid::{Palette, TileMap};
    ///
    /// let palette = Palette::new().empty('.').tile('#', TileId(1));
    /// let map = TileMap::from_ascii(Coord::new(-1, -1), &["#..", "...", "..#"], &palette).unwrap();
    /// assert_eq!(map.tile_at(Coord::new(-1, 1)), Some(TileId(1)));
    /// assert_eq!(map.tile_at(Coord::new(1, -1)), Some(TileId(1)));
    /// assert_eq!(map.tile_at(Coord::new(0, 0)), None);
    /// ```
    pub fn from_ascii<S: AsRef<str>>(
        origin: Coord,
        rows: &[S],
        palette: &Palette,
    ) -> Result<Self, GridError> {
        let (parsed, width) = parse_rows(rows, palette)?;
        let height = parsed.len();
        let bounds = ascii_bounds(origin, width, height)?;
        // Text rows run top to bottom, storage runs bottom to top.
        let cells = parsed.into_iter().rev().flatten().collect();
        Ok(Self { bounds, cells })
    }

    /// Set or clear the tile at `coord`.
    pub fn set_tile(&mut self, coord: Coord, tile: Option<TileId>) -> Result<(), GridError> {
        let index = self
            .bounds
            .index_of(coord)
            .ok_or(GridError::CoordOutOfBounds {
                coord,
                bounds: self.bounds,
            })?;
        self.cells[index] = tile;
        Ok(())
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Render back to ASCII rows, top row first.
    ///
    /// Cells whose contents have no glyph in `palette` render as `'?'`.
    pub fn render(&self, palette: &Palette) -> Vec<String> {
        let width = self.bounds.width() as usize;
        self.cells
            .chunks(width)
            .rev()
            .map(|row| {
                row.iter()
                    .map(|&cell| palette.glyph_for(cell).unwrap_or('?'))
                    .collect::<String>()
            })
            .collect()
    }
}

impl TileGrid for TileMap {
    fn bounds(&self) -> GridBounds {
        self.bounds
    }

    fn tile_at(&self, coord: Coord) -> Option<TileId> {
        self.bounds
            .index_of(coord)
            .and_then(|index| self.cells[index])
    }
}

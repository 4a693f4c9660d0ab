//! Tile identifiers and tile classification filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a tile type on a grid.
///
/// The numbering is owned by the host: a level definition assigns ids to
/// glyphs, a game engine might map them to tile assets. The core only
/// compares ids for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Classification used when grouping cells into connected areas.
///
/// `Empty` selects cells with no tile at all; `Tile(id)` selects cells
/// holding exactly that tile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TileFilter {
    /// Cells without a tile.
    #[default]
    Empty,
    /// Cells holding this tile.
    Tile(TileId),
}

impl TileFilter {
    /// Whether a cell's contents fall under this filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{TileFilter, TileId};
    ///
    /// assert!(TileFilter::Empty.matches(None));
    /// assert!(!TileFilter::Empty.matches(Some(TileId(1))));
    /// assert!(TileFilter::Tile(TileId(1)).matches(Some(TileId(1))));
    /// ```
    pub fn matches(self, tile: Option<TileId>) -> bool {
        match self {
            Self::Empty => tile.is_none(),
            Self::Tile(id) => tile == Some(id),
        }
    }

    /// Filter that selects exactly `tile` (empty when `None`).
    pub fn of(tile: Option<TileId>) -> Self {
        tile.map_or(Self::Empty, Self::Tile)
    }
}

impl From<Option<TileId>> for TileFilter {
    fn from(tile: Option<TileId>) -> Self {
        Self::of(tile)
    }
}

impl fmt::Display for TileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Tile(id) => write!(f, "tile {id}"),
        }
    }
}

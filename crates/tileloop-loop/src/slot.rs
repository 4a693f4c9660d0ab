//! Build-once holder for a level's loop table.

use crate::answer::CollisionAnswer;
use crate::error::LoopError;
use crate::table::LoopTable;
use std::sync::OnceLock;
use tileloop_core::{Coord, Direction};

/// A loop table that is either unbuilt or built exactly once.
///
/// Queries before the build fail with [`LoopError::NotBuilt`] instead of
/// answering from an empty table.
#[derive(Debug, Default)]
pub struct LoopSlot {
    table: OnceLock<LoopTable>,
}

impl LoopSlot {
    /// An unbuilt slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `build` and store its table.
    ///
    /// Returns [`LoopError::AlreadyBuilt`] without calling `build` if a
    /// table is already stored. A failing `build` leaves the slot unbuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, Direction, TileId};
    /// use tileloop_grid::{Palette, TileMap};
    /// use tileloop_loop::{build_loop_table, LoopError, LoopScan, LoopSlot};
    ///
    /// let palette = Palette::new().empty('.');
    /// let map = TileMap::from_ascii(Coord::new(-1, -1), &["...", "...", "..."], &palette).unwrap();
    /// let scan = LoopScan::new(Coord::ZERO, TileId(2), 3, 3);
    ///
    /// let slot = LoopSlot::new();
    /// assert_eq!(slot.query(Coord::ZERO, Direction::Up), Err(LoopError::NotBuilt));
    /// slot.build_with(|| build_loop_table(&map, &scan)).unwrap();
    /// assert!(slot.is_built());
    /// assert_eq!(
    ///     slot.build_with(|| build_loop_table(&map, &scan)).unwrap_err(),
    ///     LoopError::AlreadyBuilt,
    /// );
    /// ```
    pub fn build_with<F>(&self, build: F) -> Result<&LoopTable, LoopError>
    where
        F: FnOnce() -> Result<LoopTable, LoopError>,
    {
        if self.table.get().is_some() {
            return Err(LoopError::AlreadyBuilt);
        }
        let table = build()?;
        self.table.set(table).map_err(|_| LoopError::AlreadyBuilt)?;
        self.table()
    }

    /// Whether a table has been stored.
    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }

    /// The stored table.
    pub fn table(&self) -> Result<&LoopTable, LoopError> {
        self.table.get().ok_or(LoopError::NotBuilt)
    }

    /// [`LoopTable::query`] on the stored table.
    pub fn query(&self, coord: Coord, direction: Direction) -> Result<CollisionAnswer, LoopError> {
        Ok(self.table()?.query(coord, direction))
    }

    /// Remove the table, returning the slot to unbuilt.
    pub fn take(&mut self) -> Option<LoopTable> {
        self.table.take()
    }
}

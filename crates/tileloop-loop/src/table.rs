//! The frozen `(cell, direction) -> answer` lookup.

use crate::answer::CollisionAnswer;
use indexmap::IndexMap;
use tileloop_core::{Axis, Coord, Direction, Edge, GridBounds, TileId};

/// Two border tiles facing each other across a room.
///
/// `low` lies on the west (horizontal pairs) or south (vertical pairs)
/// edge, `high` on the east or north edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BorderPair {
    /// Tile on the west or south edge.
    pub low: Coord,
    /// Tile on the east or north edge.
    pub high: Coord,
    /// Axis an actor travels along when wrapping through this pair.
    pub axis: Axis,
}

impl BorderPair {
    /// The edges `low` and `high` lie on.
    pub fn edges(&self) -> (Edge, Edge) {
        match self.axis {
            Axis::Horizontal => (Edge::West, Edge::East),
            Axis::Vertical => (Edge::South, Edge::North),
        }
    }
}

/// A border tile with no partner on the opposite edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnpairedTile {
    /// Position of the tile.
    pub coord: Coord,
    /// Edge it was found on. Corner tiles can appear once per edge.
    pub edge: Edge,
}

/// Immutable wrap-around lookup for one room.
///
/// Built by [`LoopResolver`](crate::LoopResolver). Keys that were never
/// populated answer [`CollisionAnswer::NoValidMovement`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopTable {
    room: GridBounds,
    border: TileId,
    entries: IndexMap<(Coord, Direction), CollisionAnswer>,
    pairs: Vec<BorderPair>,
    unpaired: Vec<UnpairedTile>,
}

impl LoopTable {
    pub(crate) fn new(
        room: GridBounds,
        border: TileId,
        entries: IndexMap<(Coord, Direction), CollisionAnswer>,
        pairs: Vec<BorderPair>,
        unpaired: Vec<UnpairedTile>,
    ) -> Self {
        Self {
            room,
            border,
            entries,
            pairs,
            unpaired,
        }
    }

    /// What happens when an actor at `coord` moves one step in `direction`.
    ///
    /// Constant time and allocation free.
    pub fn query(&self, coord: Coord, direction: Direction) -> CollisionAnswer {
        self.entries
            .get(&(coord, direction))
            .copied()
            .unwrap_or_default()
    }

    /// Whether `(coord, direction)` has an explicit entry.
    pub fn contains_key(&self, coord: Coord, direction: Direction) -> bool {
        self.entries.contains_key(&(coord, direction))
    }

    /// The room this table was built for.
    pub fn room(&self) -> GridBounds {
        self.room
    }

    /// The border tile type that was scanned for.
    pub fn border(&self) -> TileId {
        self.border
    }

    /// Matched border pairs, horizontal pairs first.
    pub fn pairs(&self) -> &[BorderPair] {
        &self.pairs
    }

    /// Border tiles that found no partner.
    pub fn unpaired(&self) -> &[UnpairedTile] {
        &self.unpaired
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the room had no border pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ((Coord, Direction), CollisionAnswer)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Explicit entries that redirect the actor.
    pub fn redirects(&self) -> impl Iterator<Item = ((Coord, Direction), CollisionAnswer)> + '_ {
        self.iter().filter(|(_, answer)| answer.is_redirect())
    }
}

//! Single-pass perimeter scan that pairs border tiles into a [`LoopTable`].

use crate::answer::CollisionAnswer;
use crate::error::LoopError;
use crate::scan::LoopScan;
use crate::table::{BorderPair, LoopTable, UnpairedTile};
use indexmap::IndexMap;
use tileloop_core::{
    Axis, Coord, Diagnostic, DiagnosticSink, Direction, Edge, GridBounds, LogSink, TileGrid,
    TileId,
};

/// Builds loop tables, reporting anomalies to an injected sink.
///
/// # Examples
///
/// ```
/// use tileloop_core::{Coord, Direction, NullSink, TileId};
/// use tileloop_grid::{Palette, TileMap};
/// use tileloop_loop::{CollisionAnswer, LoopResolver, LoopScan};
///
/// let border = TileId(2);
/// let palette = Palette::new().empty('.').tile('B', border);
/// let map = TileMap::from_ascii(Coord::new(-1, 0), &["B.B"], &palette).unwrap();
///
/// let scan = LoopScan::new(Coord::ZERO, border, 3, 1);
/// let table = LoopResolver::new(&NullSink).build(&map, &scan).unwrap();
/// assert_eq!(
///     table.query(Coord::ZERO, Direction::Left),
///     CollisionAnswer::CorrectNewPosition { position: Coord::new(1, 0), direction: Direction::Left },
/// );
/// ```
#[derive(Clone, Copy)]
pub struct LoopResolver<'s> {
    sink: &'s dyn DiagnosticSink,
}

impl<'s> LoopResolver<'s> {
    /// Create a resolver reporting to `sink`.
    pub fn new(sink: &'s dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Scan the room described by `scan` and freeze its loop table.
    ///
    /// Fails only on a malformed scan. A room without any border pairs
    /// builds an empty table. Unpaired border tiles and a room reaching
    /// past the grid are reported to the sink, not returned as errors.
    pub fn build<G: TileGrid + ?Sized>(
        &self,
        grid: &G,
        scan: &LoopScan,
    ) -> Result<LoopTable, LoopError> {
        let room = scan.room()?;
        let grid_bounds = grid.bounds();
        if !grid_bounds.contains_bounds(&room) {
            self.sink.report(&Diagnostic::RoomExceedsGrid {
                room,
                grid: grid_bounds,
            });
        }

        let edges = EdgeTiles::collect(grid, room, scan.border);
        let (pairs, unpaired) = edges.pair_up();
        for tile in &unpaired {
            self.sink.report(&Diagnostic::UnpairedBorderTile {
                coord: tile.coord,
                edge: tile.edge,
            });
        }

        let mut entries = IndexMap::new();
        for pair in &pairs {
            let (low_edge, high_edge) = pair.edges();
            insert_wrap(&mut entries, room, pair.low, low_edge, pair.high);
            insert_wrap(&mut entries, room, pair.high, high_edge, pair.low);
        }
        // Pass-through steps go in last so corner redirects win.
        for pair in &pairs {
            let (low_edge, high_edge) = pair.edges();
            insert_pass_through(&mut entries, room, pair.low, low_edge);
            insert_pass_through(&mut entries, room, pair.high, high_edge);
        }

        log::debug!(
            target: "tileloop",
            "loop table for room {room}: {} pairs, {} unpaired, {} entries",
            pairs.len(),
            unpaired.len(),
            entries.len()
        );
        Ok(LoopTable::new(room, scan.border, entries, pairs, unpaired))
    }
}

/// Build a loop table, forwarding diagnostics to the `log` facade.
pub fn build_loop_table<G: TileGrid + ?Sized>(
    grid: &G,
    scan: &LoopScan,
) -> Result<LoopTable, LoopError> {
    LoopResolver::new(&LogSink).build(grid, scan)
}

/// Entry and exit redirects for `from`, which wraps to `to` across the room.
fn insert_wrap(
    entries: &mut IndexMap<(Coord, Direction), CollisionAnswer>,
    room: GridBounds,
    from: Coord,
    from_edge: Edge,
    to: Coord,
) {
    let out = from_edge.outward();
    // Stepping from the interior onto `from` lands on `to`.
    if let Some(key) = from.checked_step(out.opposite()).filter(|&k| room.contains(k)) {
        entries.insert(
            (key, out),
            CollisionAnswer::CorrectNewPosition {
                position: to,
                direction: out,
            },
        );
    }
    // Stepping off `from` out of the room lands just inside `to`.
    if let Some(dest) = to.checked_step(out).filter(|&d| room.contains(d)) {
        entries.insert(
            (from, out),
            CollisionAnswer::CorrectNewPosition {
                position: dest,
                direction: out,
            },
        );
    }
}

/// Steps onto `tile` from its neighbours along `edge`.
fn insert_pass_through(
    entries: &mut IndexMap<(Coord, Direction), CollisionAnswer>,
    room: GridBounds,
    tile: Coord,
    edge: Edge,
) {
    for dir in edge.along().directions() {
        if let Some(key) = tile.checked_step(dir.opposite()).filter(|&k| room.contains(k)) {
            entries
                .entry((key, dir))
                .or_insert(CollisionAnswer::NoMovementNeeded);
        }
    }
}

/// Border tiles found on each edge, keyed by their offset along it.
#[derive(Debug, Default)]
struct EdgeTiles {
    west: IndexMap<i32, Coord>,
    east: IndexMap<i32, Coord>,
    south: IndexMap<i32, Coord>,
    north: IndexMap<i32, Coord>,
}

impl EdgeTiles {
    fn collect<G: TileGrid + ?Sized>(grid: &G, room: GridBounds, border: TileId) -> Self {
        let (min, max) = (room.min(), room.max());
        let mut tiles = Self::default();
        for y in min.y..=max.y {
            for (edge, x) in [(Edge::West, min.x), (Edge::East, max.x)] {
                let coord = Coord::new(x, y);
                if grid.tile_at(coord) == Some(border) {
                    tiles.edge_mut(edge).insert(y, coord);
                }
            }
        }
        for x in min.x..=max.x {
            for (edge, y) in [(Edge::South, min.y), (Edge::North, max.y)] {
                let coord = Coord::new(x, y);
                if grid.tile_at(coord) == Some(border) {
                    tiles.edge_mut(edge).insert(x, coord);
                }
            }
        }
        tiles
    }

    fn edge(&self, edge: Edge) -> &IndexMap<i32, Coord> {
        match edge {
            Edge::West => &self.west,
            Edge::East => &self.east,
            Edge::South => &self.south,
            Edge::North => &self.north,
        }
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut IndexMap<i32, Coord> {
        match edge {
            Edge::West => &mut self.west,
            Edge::East => &mut self.east,
            Edge::South => &mut self.south,
            Edge::North => &mut self.north,
        }
    }

    /// Match opposite edges by offset. Unpaired tiles come out west, east,
    /// south, north.
    fn pair_up(&self) -> (Vec<BorderPair>, Vec<UnpairedTile>) {
        let mut pairs = Vec::new();
        let mut unpaired = Vec::new();
        for (axis, low_edge, high_edge) in [
            (Axis::Horizontal, Edge::West, Edge::East),
            (Axis::Vertical, Edge::South, Edge::North),
        ] {
            let (low, high) = (self.edge(low_edge), self.edge(high_edge));
            for (offset, &coord) in low {
                match high.get(offset) {
                    Some(&partner) => pairs.push(BorderPair {
                        low: coord,
                        high: partner,
                        axis,
                    }),
                    None => unpaired.push(UnpairedTile {
                        coord,
                        edge: low_edge,
                    }),
                }
            }
            unpaired.extend(
                high.iter()
                    .filter(|(offset, _)| !low.contains_key(*offset))
                    .map(|(_, &coord)| UnpairedTile {
                        coord,
                        edge: high_edge,
                    }),
            );
        }
        (pairs, unpaired)
    }
}

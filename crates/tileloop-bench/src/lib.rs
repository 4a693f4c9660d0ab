//! Benchmark maps for the tileloop workspace.
//!
//! - [`scattered_walls`]: square map with deterministic pseudo-random walls
//! - [`bordered_room`]: square room whose whole perimeter is border tiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tileloop_core::{Coord, GridBounds, GridError, TileId};
use tileloop_grid::TileMap;
use tileloop_loop::LoopScan;

/// Wall tile used by the benchmark maps.
pub const WALL: TileId = TileId(1);
/// Border tile used by the benchmark maps.
pub const BORDER: TileId = TileId(2);

fn centred_bounds(size: u32) -> Result<GridBounds, GridError> {
    let half = i32::try_from(size / 2).unwrap_or(i32::MAX);
    GridBounds::from_origin_size(Coord::new(-half, -half), size, size)
}

/// A `size x size` map centred on the origin with roughly one cell in
/// `wall_one_in` walled. Deterministic in `seed`; the origin is always open.
pub fn scattered_walls(size: u32, wall_one_in: u64, seed: u64) -> Result<TileMap, GridError> {
    let bounds = centred_bounds(size)?;
    let mut map = TileMap::new(bounds);
    for (i, coord) in bounds.iter().enumerate() {
        let h = (i as u64 ^ seed).wrapping_mul(6364136223846793007) >> 33;
        if coord != Coord::ZERO && h % wall_one_in.max(1) == 0 {
            map.set_tile(coord, Some(WALL))?;
        }
    }
    Ok(map)
}

/// A `size x size` room centred on the origin, perimeter entirely border
/// tiles, so every row and every column forms a pair.
pub fn bordered_room(size: u32) -> Result<(TileMap, LoopScan), GridError> {
    let bounds = centred_bounds(size)?;
    let mut map = TileMap::new(bounds);
    let (min, max) = (bounds.min(), bounds.max());
    for coord in bounds.iter() {
        if coord.x == min.x || coord.x == max.x || coord.y == min.y || coord.y == max.y {
            map.set_tile(coord, Some(BORDER))?;
        }
    }
    Ok((map, LoopScan::new(Coord::ZERO, BORDER, size, size)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileloop_core::TileGrid;
    use tileloop_loop::build_loop_table;

    #[test]
    fn scattered_walls_is_deterministic() {
        let a = scattered_walls(64, 4, 7).unwrap();
        let b = scattered_walls(64, 4, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.tile_at(Coord::ZERO), None);
        assert!(a.occupied_count() > 0);
    }

    #[test]
    fn bordered_room_pairs_every_line() {
        let (map, scan) = bordered_room(32).unwrap();
        assert_eq!(map.bounds(), scan.room().unwrap());
        let table = build_loop_table(&map, &scan).unwrap();
        assert_eq!(table.pairs().len(), 64);
        assert!(table.unpaired().is_empty());
    }
}

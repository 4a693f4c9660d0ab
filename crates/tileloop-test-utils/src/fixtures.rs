//! Reference maps shared by the workspace's tests and benchmarks.
//!
//! - [`reference_map`]: the area-detection regression map. A walled 3x3
//!   pocket, a 59-cell irregular region touching the grid edge, and a
//!   separate two-column strip.
//! - [`loop_room`]: a walled 9x9 room centred on the origin with one
//!   west/east border pair on row `y = 0`.
//! - [`wrap_room`]: a 7x5 room with paired, unpaired and corner border
//!   tiles on all four edges.

use tileloop_core::{Coord, TileId};
use tileloop_grid::{Palette, TileMap};

/// Solid wall tile (`#`).
pub const WALL: TileId = TileId(1);
/// Loop border tile (`B`).
pub const BORDER: TileId = TileId(2);
/// Decorative floor tile (`g`), walkable only when a level says so.
pub const GRASS: TileId = TileId(3);

const fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// Glyphs used by every fixture map.
pub fn palette() -> Palette {
    Palette::new()
        .empty('.')
        .tile('#', WALL)
        .tile('B', BORDER)
        .tile('g', GRASS)
}

/// Bottom-left cell of [`REFERENCE_ROWS`].
pub const REFERENCE_ORIGIN: Coord = c(-10, -7);

/// Area-detection regression map, x in `-10..=4`, y in `-7..=3`, top row first.
pub const REFERENCE_ROWS: [&str; 11] = [
    "........#####..",
    ".#..#.#.#####..",
    ".#..#...#####..",
    "...##.#.#...#..",
    "#.#....##...#..",
    "#.#..#.##...#..",
    "#...#..######..",
    "#...##.######..",
    "#......######..",
    "#....#.######..",
    "...#...######..",
];

pub fn reference_map() -> TileMap {
    TileMap::from_ascii(REFERENCE_ORIGIN, &REFERENCE_ROWS, &palette())
        .expect("reference map fixture is well-formed")
}

/// Seed inside the walled pocket.
pub const POCKET_SEED: Coord = c(0, -1);

/// The pocket: `{-1, 0, 1} x {-2, -1, 0}`.
pub const POCKET_CELLS: [Coord; 9] = [
    c(-1, -2),
    c(-1, -1),
    c(-1, 0),
    c(0, -2),
    c(0, -1),
    c(0, 0),
    c(1, -2),
    c(1, -1),
    c(1, 0),
];

/// Seed inside the large irregular region.
pub const REGION_SEED: Coord = c(-6, -2);

/// The large irregular region, sorted by `(x, y)`.
pub const REGION_CELLS: [Coord; 59] = [
    c(-10, -7), c(-10, 0), c(-10, 1), c(-10, 2), c(-10, 3), c(-9, -7), c(-9, -6), c(-9, -5),
    c(-9, -4), c(-9, -3), c(-9, -2), c(-9, -1), c(-9, 0), c(-9, 3), c(-8, -7), c(-8, -6),
    c(-8, -5), c(-8, -4), c(-8, -3), c(-8, 0), c(-8, 1), c(-8, 2), c(-8, 3), c(-7, -6),
    c(-7, -5), c(-7, -4), c(-7, -3), c(-7, -2), c(-7, -1), c(-7, 1), c(-7, 2), c(-7, 3),
    c(-6, -7), c(-6, -6), c(-6, -5), c(-6, -2), c(-6, -1), c(-6, 3), c(-5, -7), c(-5, -5),
    c(-5, -3), c(-5, -1), c(-5, 0), c(-5, 1), c(-5, 2), c(-5, 3), c(-4, -7), c(-4, -6),
    c(-4, -5), c(-4, -4), c(-4, -3), c(-4, -2), c(-4, -1), c(-4, 1), c(-4, 3), c(-3, 0),
    c(-3, 1), c(-3, 2), c(-3, 3),
];

/// Number of cells in the open strip along the map's east side (`x` in `3..=4`).
pub const STRIP_LEN: usize = 22;

/// Bottom-left cell of [`LOOP_ROOM_ROWS`].
pub const LOOP_ROOM_ORIGIN: Coord = c(-4, -4);

/// Walled 9x9 room, border tiles at `(-4, 0)` and `(4, 0)`.
pub const LOOP_ROOM_ROWS: [&str; 9] = [
    "#########",
    "#.......#",
    "#.......#",
    "#.......#",
    "B.......B",
    "#.......#",
    "#.......#",
    "#.......#",
    "#########",
];

pub fn loop_room() -> TileMap {
    TileMap::from_ascii(LOOP_ROOM_ORIGIN, &LOOP_ROOM_ROWS, &palette())
        .expect("loop room fixture is well-formed")
}

/// Bottom-left cell of [`WRAP_ROOM_ROWS`].
pub const WRAP_ROOM_ORIGIN: Coord = c(-3, -2);

/// 7x5 room centred on the origin.
///
/// Pairs: west/east at `y = 1`; north/south at `x = -3` (both corners)
/// and `x = -1`. Unpaired: west `(-3, 2)`, `(-3, 0)`, `(-3, -2)`;
/// east `(3, -1)`; north `(1, 2)`; south `(2, -2)`.
pub const WRAP_ROOM_ROWS: [&str; 5] = [
    "B#B#B##",
    "B.....B",
    "B.....#",
    "#.....B",
    "B#B##B#",
];

pub fn wrap_room() -> TileMap {
    TileMap::from_ascii(WRAP_ROOM_ORIGIN, &WRAP_ROOM_ROWS, &palette())
        .expect("wrap room fixture is well-formed")
}

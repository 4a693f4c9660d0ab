//! Flood-fill area detection over 4-connected tile grids.

use indexmap::IndexSet;
use std::collections::VecDeque;
use tileloop_core::{Coord, GridBounds, TileFilter, TileGrid};

/// A connected region of same-classification cells.
///
/// Every cell is reachable from [`seed`](Self::seed) through a chain of
/// cardinally adjacent cells that all satisfy [`filter`](Self::filter).
/// Cells are kept in discovery order (breadth-first from the seed);
/// equality compares them as a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravelableArea {
    filter: TileFilter,
    seed: Coord,
    cells: IndexSet<Coord>,
}

impl TravelableArea {
    /// An area holding no cells.
    pub fn empty(filter: TileFilter, seed: Coord) -> Self {
        Self {
            filter,
            seed,
            cells: IndexSet::new(),
        }
    }

    /// The classification every cell satisfies.
    pub fn filter(&self) -> TileFilter {
        self.filter
    }

    /// The cell the search started from.
    pub fn seed(&self) -> Coord {
        self.seed
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the seed did not match and nothing was found.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` belongs to the area.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// The cells as a set.
    pub fn cells(&self) -> &IndexSet<Coord> {
        &self.cells
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Cell at discovery position `index`.
    pub fn get_index(&self, index: usize) -> Option<Coord> {
        self.cells.get_index(index).copied()
    }

    /// The cells sorted by `(x, y)`.
    pub fn to_sorted_vec(&self) -> Vec<Coord> {
        let mut out: Vec<Coord> = self.cells.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Whether both areas hold exactly the same cells, whatever their seeds.
    pub fn same_cells(&self, other: &TravelableArea) -> bool {
        self.cells == other.cells
    }
}

/// Compute the connected area around `seed`.
///
/// Returns every cell reachable from `seed` by 4-connected steps through
/// cells matching `filter`, limited to `grid.bounds()`. A seed outside the
/// bounds, or one whose own cell does not match, yields an empty area:
/// that is an answer ("no such area here"), not an error.
///
/// The search is an iterative breadth-first walk with a visited bitmap
/// sized to the grid, so deep or winding regions cannot exhaust the stack
/// and no cell is examined twice.
///
/// # Examples
///
/// ```
/// use tileloop_core::{Coord, TileFilter, TileId};
/// use tileloop_grid::{detect_area, Palette, TileMap};
///
/// let palette = Palette::new().empty('.').tile('#', TileId(1));
/// let map = TileMap::from_ascii(Coord::new(0, 0), &["..#.", "..#.", "###."], &palette).unwrap();
///
/// let pocket = detect_area(&map, TileFilter::Empty, Coord::new(0, 2));
/// assert_eq!(pocket.len(), 4);
/// assert!(!pocket.contains(Coord::new(3, 2)));
///
/// // Seeding on a wall with the empty filter finds nothing.
/// assert!(detect_area(&map, TileFilter::Empty, Coord::new(2, 2)).is_empty());
/// ```
pub fn detect_area<G: TileGrid + ?Sized>(
    grid: &G,
    filter: TileFilter,
    seed: Coord,
) -> TravelableArea {
    let bounds = grid.bounds();
    let mut visited = vec![false; bounds.cell_count()];
    let cells = flood(grid, &bounds, filter, seed, &mut visited);
    TravelableArea {
        filter,
        seed,
        cells,
    }
}

/// Partition every cell matching `filter` into connected areas.
///
/// Areas are returned in the row-major order of their first cell, which
/// is also each area's seed.
pub fn components<G: TileGrid + ?Sized>(grid: &G, filter: TileFilter) -> Vec<TravelableArea> {
    let bounds = grid.bounds();
    let mut visited = vec![false; bounds.cell_count()];
    let mut out = Vec::new();
    for (index, coord) in bounds.iter().enumerate() {
        if visited[index] || !filter.matches(grid.tile_at(coord)) {
            continue;
        }
        let cells = flood(grid, &bounds, filter, coord, &mut visited);
        out.push(TravelableArea {
            filter,
            seed: coord,
            cells,
        });
    }
    out
}

/// Breadth-first fill from `seed`, sharing `visited` across calls.
///
/// Non-matching cells are marked visited when first examined; they can
/// never join an area under the same filter.
fn flood<G: TileGrid + ?Sized>(
    grid: &G,
    bounds: &GridBounds,
    filter: TileFilter,
    seed: Coord,
    visited: &mut [bool],
) -> IndexSet<Coord> {
    let mut cells = IndexSet::new();
    let Some(start) = bounds.index_of(seed) else {
        return cells;
    };
    if visited[start] || !filter.matches(grid.tile_at(seed)) {
        return cells;
    }

    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(seed);

    while let Some(coord) = queue.pop_front() {
        cells.insert(coord);
        for next in bounds.neighbours(coord) {
            let Some(i) = bounds.index_of(next) else {
                continue;
            };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            if filter.matches(grid.tile_at(next)) {
                queue.push_back(next);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Palette, SparseTileMap, TileMap};
    use proptest::prelude::*;
    use tileloop_core::{Direction, TileId};

    const WALL: TileId = TileId(1);
    const GRASS: TileId = TileId(3);

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn palette() -> Palette {
        Palette::new().empty('.').tile('#', WALL).tile('g', GRASS)
    }

    fn map(rows: &[&str]) -> TileMap {
        TileMap::from_ascii(c(0, 0), rows, &palette()).unwrap()
    }

    #[test]
    fn seed_not_matching_gives_empty_area() {
        let m = map(&["#.", ".#"]);
        let area = detect_area(&m, TileFilter::Empty, c(0, 1));
        assert!(area.is_empty());
        assert_eq!(area.seed(), c(0, 1));
        assert!(detect_area(&m, TileFilter::Tile(GRASS), c(1, 1)).is_empty());
    }

    #[test]
    fn seed_outside_bounds_gives_empty_area() {
        let m = map(&["..", ".."]);
        assert!(detect_area(&m, TileFilter::Empty, c(5, 5)).is_empty());
        assert!(detect_area(&m, TileFilter::Empty, c(i32::MAX, i32::MIN)).is_empty());
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let m = map(&[".#", "#."]);
        let area = detect_area(&m, TileFilter::Empty, c(0, 1));
        assert_eq!(area.to_sorted_vec(), vec![c(0, 1)]);
    }

    #[test]
    fn tile_filter_follows_only_that_tile() {
        let m = map(&["gg#", "#g#", "ggg"]);
        let area = detect_area(&m, TileFilter::Tile(GRASS), c(0, 2));
        assert_eq!(area.len(), 6);
        assert!(area.iter().all(|p| m.tile_at(p) == Some(GRASS)));
    }

    #[test]
    fn discovery_order_is_breadth_first() {
        let m = map(&["....."]);
        let area = detect_area(&m, TileFilter::Empty, c(2, 0));
        assert_eq!(area.get_index(0), Some(c(2, 0)));
        let d1: Vec<_> = (1..3).filter_map(|i| area.get_index(i)).collect();
        assert!(d1.contains(&c(1, 0)) && d1.contains(&c(3, 0)));
    }

    #[test]
    fn sparse_empty_fill_covers_declared_bounds() {
        let bounds = GridBounds::from_origin_size(c(-2, -2), 5, 5).unwrap();
        let mut sparse = SparseTileMap::new(bounds);
        sparse.set_tile(c(0, 0), Some(WALL)).unwrap();
        let area = detect_area(&sparse, TileFilter::Empty, c(-2, -2));
        assert_eq!(area.len(), 24);
    }

    #[test]
    fn long_corridor_does_not_overflow_stack() {
        let bounds = GridBounds::from_origin_size(c(0, 0), 200_000, 1).unwrap();
        let m = TileMap::new(bounds);
        let area = detect_area(&m, TileFilter::Empty, c(0, 0));
        assert_eq!(area.len(), 200_000);
    }

    #[test]
    fn components_partition_matching_cells() {
        let m = map(&["..#..", "###..", "..#.."]);
        let parts = components(&m, TileFilter::Empty);
        assert_eq!(parts.len(), 3);
        let total: usize = parts.iter().map(TravelableArea::len).sum();
        assert_eq!(total, 10);
        assert_eq!(parts[0].seed(), c(0, 0));
        assert_eq!(parts[0].len(), 2);
    }

    #[test]
    fn components_of_absent_tile_is_empty() {
        let m = map(&["..", ".."]);
        assert!(components(&m, TileFilter::Tile(WALL)).is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_map() -> impl Strategy<Value = TileMap> {
        (1u32..9, 1u32..9, -5i32..5, -5i32..5).prop_flat_map(|(w, h, ox, oy)| {
            proptest::collection::vec(0u8..3, (w * h) as usize).prop_map(move |cells| {
                let bounds = GridBounds::from_origin_size(Coord::new(ox, oy), w, h).unwrap();
                let mut m = TileMap::new(bounds);
                for (i, v) in cells.into_iter().enumerate() {
                    let tile = match v {
                        0 => None,
                        1 => Some(WALL),
                        _ => Some(GRASS),
                    };
                    let coord = bounds.coord_at(i).unwrap();
                    m.set_tile(coord, tile).unwrap();
                }
                m
            })
        })
    }

    fn arb_filter() -> impl Strategy<Value = TileFilter> {
        prop_oneof![
            Just(TileFilter::Empty),
            Just(TileFilter::Tile(WALL)),
            Just(TileFilter::Tile(GRASS)),
        ]
    }

    proptest! {
        #[test]
        fn area_is_closed_connected_and_in_bounds(
            m in arb_map(),
            filter in arb_filter(),
            sx in -7i32..7, sy in -7i32..7,
        ) {
            let seed = Coord::new(sx, sy);
            let area = detect_area(&m, filter, seed);
            let bounds = m.bounds();

            let seed_matches = bounds.contains(seed) && filter.matches(m.tile_at(seed));
            prop_assert_eq!(area.contains(seed), seed_matches);
            prop_assert_eq!(area.is_empty(), !seed_matches);

            for cell in area.iter() {
                prop_assert!(bounds.contains(cell));
                prop_assert!(filter.matches(m.tile_at(cell)));
                for d in Direction::ALL {
                    let n = cell.step(d);
                    if bounds.contains(n) && filter.matches(m.tile_at(n)) {
                        prop_assert!(area.contains(n), "{:?} matches but is missing", n);
                    }
                }
            }
        }

        #[test]
        fn any_member_reseeds_to_the_same_area(
            m in arb_map(),
            start in 0usize..64,
            pick in 0usize..64,
        ) {
            let bounds = m.bounds();
            let seed = bounds.coord_at(start % bounds.cell_count()).unwrap();
            let filter = TileFilter::of(m.tile_at(seed));
            let area = detect_area(&m, filter, seed);
            prop_assert!(area.contains(seed));
            let other_seed = area.get_index(pick % area.len()).unwrap();
            let again = detect_area(&m, filter, other_seed);
            prop_assert!(area.same_cells(&again));
        }

        #[test]
        fn detection_is_idempotent(
            m in arb_map(),
            filter in arb_filter(),
            sx in -7i32..7, sy in -7i32..7,
        ) {
            let seed = Coord::new(sx, sy);
            prop_assert_eq!(detect_area(&m, filter, seed), detect_area(&m, filter, seed));
        }
    }
}

//! TileGrid trait compliance test helpers.
//!
//! These functions verify that a grid implementation satisfies the
//! invariants the core algorithms rely on. Reused across the dense and
//! sparse backend test modules.

use crate::area::{components, detect_area};
use indexmap::IndexSet;
use tileloop_core::{Coord, Direction, TileFilter, TileGrid};

/// Assert that every cell just outside the bounds reads as empty.
///
/// Ring cells past the `i32` range are skipped.
pub fn assert_outside_reads_empty(grid: &dyn TileGrid) {
    let b = grid.bounds();
    let (min, max) = (b.min(), b.max());
    let (left, right) = (min.x.checked_sub(1), max.x.checked_add(1));
    let (below, above) = (min.y.checked_sub(1), max.y.checked_add(1));
    let xs = left.unwrap_or(min.x)..=right.unwrap_or(max.x);
    for x in xs {
        for y in [below, above].into_iter().flatten() {
            let coord = Coord::new(x, y);
            assert_eq!(grid.tile_at(coord), None, "tile outside bounds at {coord}");
        }
    }
    for y in min.y..=max.y {
        for x in [left, right].into_iter().flatten() {
            let coord = Coord::new(x, y);
            assert_eq!(grid.tile_at(coord), None, "tile outside bounds at {coord}");
        }
    }
}

/// Assert that `tile_at` gives the same answer on repeated calls.
pub fn assert_reads_deterministic(grid: &dyn TileGrid) {
    for coord in grid.bounds().iter() {
        assert_eq!(grid.tile_at(coord), grid.tile_at(coord), "at {coord}");
    }
}

/// Assert that the bounds iterator visits `cell_count` unique cells.
pub fn assert_bounds_iteration_complete(grid: &dyn TileGrid) {
    let b = grid.bounds();
    let unique: IndexSet<Coord> = b.iter().collect();
    assert_eq!(unique.len(), b.cell_count(), "bounds iteration has duplicates");
    assert!(unique.iter().all(|&c| b.contains(c)));
}

/// Assert that the connected components of every classification present
/// partition the grid's cells exactly once.
pub fn assert_components_partition(grid: &dyn TileGrid) {
    let b = grid.bounds();
    let filters: IndexSet<TileFilter> = b.iter().map(|c| TileFilter::of(grid.tile_at(c))).collect();
    let mut seen: IndexSet<Coord> = IndexSet::new();
    for filter in filters {
        for area in components(grid, filter) {
            for cell in area.iter() {
                assert!(seen.insert(cell), "cell {cell} in two components");
            }
        }
    }
    assert_eq!(seen.len(), b.cell_count());
}

/// Assert that the component found from any cell is closed under
/// same-classification adjacency.
pub fn assert_areas_closed(grid: &dyn TileGrid) {
    let b = grid.bounds();
    for seed in b.iter() {
        let filter = TileFilter::of(grid.tile_at(seed));
        let area = detect_area(grid, filter, seed);
        assert!(area.contains(seed));
        for cell in area.iter() {
            for d in Direction::ALL {
                let Some(n) = cell.checked_step(d) else { continue };
                if b.contains(n) && filter.matches(grid.tile_at(n)) {
                    assert!(area.contains(n), "area from {seed} misses {n}");
                }
            }
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &dyn TileGrid) {
    assert_outside_reads_empty(grid);
    assert_reads_deterministic(grid);
    assert_bounds_iteration_complete(grid);
    assert_components_partition(grid);
    assert_areas_closed(grid);
}

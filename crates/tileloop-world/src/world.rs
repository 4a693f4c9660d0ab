//! Per-level state shared by every actor in a level.

use crate::actor::Actor;
use crate::config::LevelDef;
use crate::error::WorldError;
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;
use tileloop_core::{
    Coord, Diagnostic, DiagnosticSink, Direction, LogSink, TileFilter, TileGrid,
};
use tileloop_grid::{detect_area, TravelableArea};
use tileloop_loop::{CollisionAnswer, LoopResolver, LoopScan, LoopSlot, LoopTable};

/// The parts of a level the world needs at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldSettings {
    /// The wrapping room.
    pub loop_scan: LoopScan,
    /// Cells actors may move onto.
    pub walkable: TileFilter,
    /// Cells eligible as spawn points.
    pub spawn_filter: TileFilter,
}

impl WorldSettings {
    /// Settings with empty cells walkable and eligible for spawning.
    pub fn new(loop_scan: LoopScan) -> Self {
        Self {
            loop_scan,
            walkable: TileFilter::Empty,
            spawn_filter: TileFilter::Empty,
        }
    }
}

impl From<&LevelDef> for WorldSettings {
    fn from(level: &LevelDef) -> Self {
        Self {
            loop_scan: level.loop_scan,
            walkable: level.walkable,
            spawn_filter: level.spawn_filter,
        }
    }
}

/// Loop table, area cache and diagnostics for one loaded level.
///
/// Created unbuilt; the host calls [`initialize`](Self::initialize) once
/// when the level loads. Loop queries before that fail with
/// [`LoopError::NotBuilt`](tileloop_loop::LoopError::NotBuilt).
///
/// # Examples
///
/// ```
/// use tileloop_core::{Coord, Direction, TileId};
/// use tileloop_grid::{Palette, TileMap};
/// use tileloop_loop::{CollisionAnswer, LoopScan};
/// use tileloop_world::{WorldInfo, WorldSettings};
///
/// let border = TileId(2);
/// let palette = Palette::new().empty('.').tile('B', border);
/// let map = TileMap::from_ascii(Coord::new(-2, 0), &["B...B"], &palette).unwrap();
/// let world = WorldInfo::new(&map, WorldSettings::new(LoopScan::new(Coord::ZERO, border, 5, 1)));
///
/// assert!(world.query_loop(Coord::new(-1, 0), Direction::Left).is_err());
/// world.initialize().unwrap();
/// assert!(matches!(
///     world.query_loop(Coord::new(-1, 0), Direction::Left),
///     Ok(CollisionAnswer::CorrectNewPosition { .. })
/// ));
/// ```
pub struct WorldInfo<'g, G: TileGrid + ?Sized> {
    grid: &'g G,
    settings: WorldSettings,
    loops: LoopSlot,
    areas: IndexMap<TileFilter, Vec<TravelableArea>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl<'g, G: TileGrid + ?Sized> WorldInfo<'g, G> {
    /// An unbuilt world over `grid`, reporting diagnostics to the `log` facade.
    pub fn new(grid: &'g G, settings: WorldSettings) -> Self {
        Self {
            grid,
            settings,
            loops: LoopSlot::new(),
            areas: IndexMap::new(),
            sink: Arc::new(LogSink),
        }
    }

    /// Report diagnostics to `sink` instead.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the loop table. Call once per level load.
    ///
    /// Returns [`WorldError::Loop`] with `AlreadyBuilt` on a repeat call
    /// and with the scan error if the room is malformed.
    pub fn initialize(&self) -> Result<&LoopTable, WorldError> {
        let table = self.loops.build_with(|| {
            LoopResolver::new(self.sink.as_ref()).build(self.grid, &self.settings.loop_scan)
        })?;
        log::debug!(
            target: "tileloop",
            "world initialised: room {}, {} border pairs",
            table.room(),
            table.pairs().len()
        );
        Ok(table)
    }

    /// Whether [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.loops.is_built()
    }

    /// The built loop table.
    pub fn loop_table(&self) -> Result<&LoopTable, WorldError> {
        Ok(self.loops.table()?)
    }

    /// Look up the loop answer for a step.
    pub fn query_loop(
        &self,
        coord: Coord,
        direction: Direction,
    ) -> Result<CollisionAnswer, WorldError> {
        Ok(self.loops.query(coord, direction)?)
    }

    /// The grid this world runs on.
    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// The level settings.
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// The connected area of `filter` cells around `seed`.
    ///
    /// Computed on first request and cached; any later seed inside a cached
    /// area reuses it. A seed outside the grid is reported and yields an
    /// empty area.
    pub fn travelable_area(&mut self, filter: TileFilter, seed: Coord) -> &TravelableArea {
        let cached = self.areas.entry(filter).or_default();
        let hit = cached
            .iter()
            .position(|a| a.contains(seed) || (a.is_empty() && a.seed() == seed));
        let index = match hit {
            Some(index) => index,
            None => {
                if !self.grid.bounds().contains(seed) {
                    self.sink
                        .report(&Diagnostic::SeedOutsideGrid { seed, filter });
                }
                let area = detect_area(self.grid, filter, seed);
                log::trace!(
                    target: "tileloop",
                    "area {filter} from {seed}: {} cells",
                    area.len()
                );
                cached.push(area);
                cached.len() - 1
            }
        };
        &cached[index]
    }

    /// The walkable area the actor stands in.
    pub fn travelable_area_for(&mut self, actor: &Actor) -> &TravelableArea {
        let walkable = self.settings.walkable;
        self.travelable_area(walkable, actor.position())
    }

    /// Drop every cached area.
    pub fn clear_area_cache(&mut self) {
        self.areas.clear();
    }

    /// Whether `coord` is a legal spawn point for something the actor can reach.
    ///
    /// The cell must match the spawn filter, lie in a spawn-filter area
    /// that the actor stands in or that touches the actor's walkable area,
    /// and must not be the actor's own cell.
    pub fn is_valid_spawn(&mut self, coord: Coord, actor: &Actor) -> bool {
        coord != actor.position() && self.spawn_cells(actor).contains(&coord)
    }

    /// Every legal spawn point for `actor`, sorted by `(x, y)`.
    pub fn spawn_candidates(&mut self, actor: &Actor) -> Vec<Coord> {
        let own = actor.position();
        let mut candidates: Vec<Coord> = self
            .spawn_cells(actor)
            .into_iter()
            .filter(|&c| c != own)
            .collect();
        candidates.sort_unstable();
        candidates
    }

    /// Pick the `n`-th spawn candidate, wrapping `n` around the candidate count.
    ///
    /// Returns `None` when the actor has nowhere to spawn things.
    pub fn spawn_point(&mut self, actor: &Actor, n: usize) -> Option<Coord> {
        let candidates = self.spawn_candidates(actor);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[n % candidates.len()])
    }

    /// Spawn-filter cells reachable from the actor's walkable area.
    fn spawn_cells(&mut self, actor: &Actor) -> IndexSet<Coord> {
        let spawn = self.settings.spawn_filter;
        let bounds = self.grid.bounds();
        let walked: Vec<Coord> = self.travelable_area_for(actor).iter().collect();
        let seeds = std::iter::once(actor.position()).chain(
            walked
                .iter()
                .flat_map(|&cell| std::iter::once(cell).chain(bounds.neighbours(cell))),
        );
        let mut cells = IndexSet::new();
        for seed in seeds {
            if cells.contains(&seed)
                || !bounds.contains(seed)
                || !spawn.matches(self.grid.tile_at(seed))
            {
                continue;
            }
            cells.extend(self.travelable_area(spawn, seed).iter());
        }
        cells
    }
}

//! Level definitions, loading and validation.
//!
//! A [`LevelDef`] is the serialisable description of one level: its ASCII
//! map, what each glyph means, which room wraps and what actors may walk
//! on. [`validate()`](LevelDef::validate) checks every structural
//! invariant up front so a level that loads can always be built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tileloop_core::{Coord, GridError, TileFilter, TileId};
use tileloop_grid::{Palette, TileMap};
use tileloop_loop::{LoopError, LoopScan};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors raised while loading or validating a [`LevelDef`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The level file could not be read.
    #[error("cannot read level file {}: {source}", .path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The text is not a valid RON level.
    #[error("cannot parse level: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The level could not be written as RON.
    #[error("cannot serialise level: {0}")]
    Serialize(#[from] ron::Error),
    /// The map rows do not form a valid grid.
    #[error("level map is malformed: {0}")]
    Grid(#[from] GridError),
    /// The level has a blank name.
    #[error("level name is empty")]
    EmptyName,
    /// A glyph appears more than once in the legend.
    #[error("legend defines glyph {glyph:?} more than once")]
    LegendConflict {
        /// The repeated glyph.
        glyph: char,
    },
    /// The loop scan describes no valid room.
    #[error("loop scan is invalid: {0}")]
    InvalidScan(#[source] LoopError),
}

// ── LevelDef ───────────────────────────────────────────────────────

/// One glyph of a level legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Character used in the map rows.
    pub glyph: char,
    /// Tile it stands for, `None` for an empty cell.
    pub tile: Option<TileId>,
}

impl LegendEntry {
    /// Glyph for an empty cell.
    pub fn empty(glyph: char) -> Self {
        Self { glyph, tile: None }
    }

    /// Glyph for `tile`.
    pub fn tile(glyph: char, tile: TileId) -> Self {
        Self {
            glyph,
            tile: Some(tile),
        }
    }
}

/// Serialisable description of a level.
///
/// # Examples
///
/// ```
/// use tileloop_core::Coord;
/// use tileloop_world::LevelDef;
///
/// let level = LevelDef::from_ron_str(r#"(
///     name: "corridor",
///     origin: (x: -2, y: 0),
///     rows: ["B...B"],
///     legend: [(glyph: '.', tile: None), (glyph: 'B', tile: Some(2))],
///     loop_scan: (anchor: (x: 0, y: 0), border: 2, width: 5, height: 1),
/// )"#).unwrap();
///
/// let map = level.build_map().unwrap();
/// assert_eq!(level.name, "corridor");
/// assert_eq!(level.loop_scan.anchor, Coord::ZERO);
/// # let _ = map;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Display name.
    pub name: String,
    /// Coordinate of the bottom-left cell of `rows`.
    pub origin: Coord,
    /// Map rows, top row first.
    pub rows: Vec<String>,
    /// Meaning of each glyph in `rows`.
    pub legend: Vec<LegendEntry>,
    /// The wrapping room.
    pub loop_scan: LoopScan,
    /// Cells actors may move onto. Defaults to empty cells.
    #[serde(default)]
    pub walkable: TileFilter,
    /// Cells eligible as spawn points. Defaults to empty cells.
    #[serde(default)]
    pub spawn_filter: TileFilter,
}

impl LevelDef {
    /// Parse and validate a level from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let level: Self = ron::from_str(text)?;
        level.validate()?;
        Ok(level)
    }

    /// Read, parse and validate a level file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_ron_str(&text)?;
        log::debug!(target: "tileloop", "loaded level {:?} from {}", level.name, path.display());
        Ok(level)
    }

    /// The level as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Check the level's structural invariants.
    ///
    /// 1. The name is not blank.
    /// 2. Every legend glyph is unique.
    /// 3. The loop scan describes a room (non-zero extent within `i32`).
    /// 4. The rows form a rectangular grid using only legend glyphs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let mut seen = HashSet::new();
        if let Some(entry) = self.legend.iter().find(|e| !seen.insert(e.glyph)) {
            return Err(ConfigError::LegendConflict { glyph: entry.glyph });
        }
        self.loop_scan.room().map_err(ConfigError::InvalidScan)?;
        self.build_map()?;
        Ok(())
    }

    /// Glyph lookup for the map rows.
    pub fn palette(&self) -> Palette {
        self.legend.iter().map(|e| (e.glyph, e.tile)).collect()
    }

    /// Build the dense map described by `rows`.
    pub fn build_map(&self) -> Result<TileMap, ConfigError> {
        Ok(TileMap::from_ascii(self.origin, self.rows.as_slice(), &self.palette())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileloop_core::TileGrid;
    use tileloop_test_utils::{BORDER, LOOP_ROOM_ORIGIN, LOOP_ROOM_ROWS, WALL};

    fn loop_level() -> LevelDef {
        LevelDef {
            name: "loop room".into(),
            origin: LOOP_ROOM_ORIGIN,
            rows: LOOP_ROOM_ROWS.iter().map(|r| r.to_string()).collect(),
            legend: vec![
                LegendEntry::empty('.'),
                LegendEntry::tile('#', WALL),
                LegendEntry::tile('B', BORDER),
            ],
            loop_scan: LoopScan::new(Coord::ZERO, BORDER, 9, 9),
            walkable: TileFilter::Empty,
            spawn_filter: TileFilter::Empty,
        }
    }

    #[test]
    fn well_formed_level_validates() {
        let level = loop_level();
        level.validate().unwrap();
        let map = level.build_map().unwrap();
        assert_eq!(map.tile_at(Coord::new(-4, 0)), Some(BORDER));
        assert_eq!(map.tile_at(Coord::new(-4, 1)), Some(WALL));
    }

    #[test]
    fn ron_round_trip_preserves_level() {
        let level = loop_level();
        let text = level.to_ron_string().unwrap();
        assert_eq!(LevelDef::from_ron_str(&text).unwrap(), level);
    }

    #[test]
    fn filters_default_to_empty() {
        let level = LevelDef::from_ron_str(
            r#"(
                name: "tiny",
                origin: (x: 0, y: 0),
                rows: ["."],
                legend: [(glyph: '.', tile: None)],
                loop_scan: (anchor: (x: 0, y: 0), border: 2, width: 1, height: 1),
            )"#,
        )
        .unwrap();
        assert_eq!(level.walkable, TileFilter::Empty);
        assert_eq!(level.spawn_filter, TileFilter::Empty);
    }

    #[test]
    fn explicit_tile_filter_parses() {
        let level = LevelDef::from_ron_str(
            r#"(
                name: "lawn",
                origin: (x: 0, y: 0),
                rows: ["gg"],
                legend: [(glyph: 'g', tile: Some(3))],
                loop_scan: (anchor: (x: 1, y: 0), border: 2, width: 2, height: 1),
                walkable: Tile(3),
            )"#,
        )
        .unwrap();
        assert_eq!(level.walkable, TileFilter::Tile(TileId(3)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut level = loop_level();
        level.name = "   ".into();
        assert!(matches!(level.validate(), Err(ConfigError::EmptyName)));
    }

    #[test]
    fn repeated_glyph_is_rejected() {
        let mut level = loop_level();
        level.legend.push(LegendEntry::tile('.', WALL));
        assert!(matches!(
            level.validate(),
            Err(ConfigError::LegendConflict { glyph: '.' })
        ));
    }

    #[test]
    fn degenerate_scan_is_rejected() {
        let mut level = loop_level();
        level.loop_scan.width = 0;
        assert!(matches!(
            level.validate(),
            Err(ConfigError::InvalidScan(LoopError::DegenerateRegion { .. }))
        ));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let mut level = loop_level();
        level.rows[3].push('.');
        assert!(matches!(
            level.validate(),
            Err(ConfigError::Grid(GridError::RaggedRows { .. }))
        ));

        let mut level = loop_level();
        level.rows[0] = "####?####".into();
        assert!(matches!(
            level.validate(),
            Err(ConfigError::Grid(GridError::UnknownGlyph { glyph: '?', .. }))
        ));

        let mut level = loop_level();
        level.rows.clear();
        assert!(matches!(level.validate(), Err(ConfigError::Grid(_))));
    }

    #[test]
    fn bad_ron_is_a_parse_error() {
        assert!(matches!(
            LevelDef::from_ron_str("(name: \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LevelDef::from_file("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.ron"));
    }
}

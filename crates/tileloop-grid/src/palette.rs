//! Glyph-to-tile mappings for ASCII maps.

use indexmap::IndexMap;
use tileloop_core::{Coord, GridBounds, GridError, TileId};

/// Maps ASCII glyphs to cell contents.
///
/// A glyph maps either to a tile or to `None` for an empty cell. Rows of
/// an ASCII map are read top row first; see
/// [`TileMap::from_ascii`](crate::TileMap::from_ascii).
///
/// # Examples
///
/// ```
/// use tileloop_core::TileId;
/// use tileloop_grid::Palette;
///
/// let palette = Palette::new().empty('.').tile('#', TileId(1));
/// assert_eq!(palette.lookup('#', 0, 0), Ok(Some(TileId(1))));
/// assert_eq!(palette.lookup('.', 0, 1), Ok(None));
/// assert!(palette.lookup('?', 0, 2).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    glyphs: IndexMap<char, Option<TileId>>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `glyph` to an empty cell.
    pub fn empty(mut self, glyph: char) -> Self {
        self.glyphs.insert(glyph, None);
        self
    }

    /// Map `glyph` to `tile`.
    pub fn tile(mut self, glyph: char, tile: TileId) -> Self {
        self.glyphs.insert(glyph, Some(tile));
        self
    }

    /// Insert or replace a mapping.
    pub fn insert(&mut self, glyph: char, contents: Option<TileId>) {
        self.glyphs.insert(glyph, contents);
    }

    /// Resolve a glyph found at `(row, col)` of an ASCII map.
    pub fn lookup(&self, glyph: char, row: usize, col: usize) -> Result<Option<TileId>, GridError> {
        self.glyphs
            .get(&glyph)
            .copied()
            .ok_or(GridError::UnknownGlyph { glyph, row, col })
    }

    /// First glyph mapped to `contents`, used when rendering maps back to text.
    pub fn glyph_for(&self, contents: Option<TileId>) -> Option<char> {
        self.glyphs
            .iter()
            .find(|(_, c)| **c == contents)
            .map(|(&g, _)| g)
    }

    /// Number of mapped glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no glyph is mapped.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over `(glyph, contents)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<TileId>)> + '_ {
        self.glyphs.iter().map(|(&g, &c)| (g, c))
    }
}

impl FromIterator<(char, Option<TileId>)> for Palette {
    fn from_iter<I: IntoIterator<Item = (char, Option<TileId>)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// Validate row widths and resolve every glyph.
///
/// Returns the cells top row first, plus the common width.
pub(crate) fn parse_rows<S: AsRef<str>>(
    rows: &[S],
    palette: &Palette,
) -> Result<(Vec<Vec<Option<TileId>>>, usize), GridError> {
    let Some(first) = rows.first() else {
        return Err(GridError::EmptyGrid);
    };
    let width = first.as_ref().chars().count();
    if width == 0 {
        return Err(GridError::EmptyGrid);
    }
    let mut parsed = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            return Err(GridError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }
        let cells = line
            .chars()
            .enumerate()
            .map(|(col, glyph)| palette.lookup(glyph, row, col))
            .collect::<Result<Vec<_>, _>>()?;
        parsed.push(cells);
    }
    Ok((parsed, width))
}

/// Bounds of a parsed ASCII map with bottom-left cell `origin`.
pub(crate) fn ascii_bounds(
    origin: Coord,
    width: usize,
    height: usize,
) -> Result<GridBounds, GridError> {
    let side = |name: &'static str, value: usize| {
        u32::try_from(value).map_err(|_| GridError::DimensionTooLarge {
            name,
            value: value as u64,
            max: u64::from(GridBounds::MAX_DIM),
        })
    };
    GridBounds::from_origin_size(origin, side("width", width)?, side("height", height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new().empty('.').tile('#', TileId(1)).tile('B', TileId(2))
    }

    #[test]
    fn glyph_for_finds_first_mapping() {
        let p = palette().empty(' ');
        assert_eq!(p.glyph_for(None), Some('.'));
        assert_eq!(p.glyph_for(Some(TileId(2))), Some('B'));
        assert_eq!(p.glyph_for(Some(TileId(9))), None);
    }

    #[test]
    fn parse_rows_rejects_ragged_input() {
        let err = parse_rows(&["###", "#."], &palette()).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rows_reports_unknown_glyph_position() {
        let err = parse_rows(&["#.#", "#x#"], &palette()).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownGlyph {
                glyph: 'x',
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn parse_rows_rejects_no_rows_or_blank_rows() {
        let none: [&str; 0] = [];
        assert_eq!(parse_rows(&none, &palette()), Err(GridError::EmptyGrid));
        assert_eq!(parse_rows(&[""], &palette()), Err(GridError::EmptyGrid));
    }

    #[test]
    fn ascii_bounds_match_text_extent() {
        let b = ascii_bounds(Coord::new(-2, 5), 4, 3).unwrap();
        assert_eq!(b.min(), Coord::new(-2, 5));
        assert_eq!(b.max(), Coord::new(1, 7));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn ascii_bounds_reject_sides_past_u32() {
        let wide = u32::MAX as usize + 1;
        assert!(matches!(
            ascii_bounds(Coord::ZERO, wide, 1),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            ascii_bounds(Coord::ZERO, 1, wide),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }
}

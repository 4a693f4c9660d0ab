//! Description of the room a loop table is built for.

use crate::error::LoopError;
use serde::{Deserialize, Serialize};
use tileloop_core::{Coord, GridBounds, TileId};

/// Which room to scan for border loops.
///
/// The room is `width x height` cells centred on `anchor`. For even sizes
/// the extra cell falls on the low side: a width of 10 around `x = 0`
/// spans `-5..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoopScan {
    /// Centre of the room.
    pub anchor: Coord,
    /// Tile type marking loop borders.
    pub border: TileId,
    /// Room width in cells.
    pub width: u32,
    /// Room height in cells.
    pub height: u32,
}

impl LoopScan {
    /// Create a scan description.
    pub fn new(anchor: Coord, border: TileId, width: u32, height: u32) -> Self {
        Self {
            anchor,
            border,
            width,
            height,
        }
    }

    /// The inclusive cell rectangle this scan covers.
    ///
    /// Returns `Err(LoopError::DegenerateRegion)` for a zero width or height
    /// and `Err(LoopError::RegionTooLarge)` if the room leaves `i32` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, TileId};
    /// use tileloop_loop::LoopScan;
    ///
    /// let room = LoopScan::new(Coord::ZERO, TileId(2), 9, 9).room().unwrap();
    /// assert_eq!(room.min(), Coord::new(-4, -4));
    /// assert_eq!(room.max(), Coord::new(4, 4));
    /// ```
    pub fn room(&self) -> Result<GridBounds, LoopError> {
        if self.width == 0 || self.height == 0 {
            return Err(LoopError::DegenerateRegion {
                width: self.width,
                height: self.height,
            });
        }
        let too_large = || LoopError::RegionTooLarge {
            anchor: self.anchor,
            width: self.width,
            height: self.height,
        };
        let axis = |centre: i32, len: u32| -> Option<(i32, i32)> {
            let lo = i64::from(centre) - i64::from(len / 2);
            let hi = lo + i64::from(len) - 1;
            Some((i32::try_from(lo).ok()?, i32::try_from(hi).ok()?))
        };
        let (x_min, x_max) = axis(self.anchor.x, self.width).ok_or_else(too_large)?;
        let (y_min, y_max) = axis(self.anchor.y, self.height).ok_or_else(too_large)?;
        GridBounds::new(Coord::new(x_min, y_min), Coord::new(x_max, y_max))
            .map_err(|_| too_large())
    }
}

//! Answers to "what happens if I step into this border?".

use serde::{Deserialize, Serialize};
use tileloop_core::{Coord, Direction};

/// Result of a loop-table query.
///
/// Only [`CorrectNewPosition`](Self::CorrectNewPosition) carries a target;
/// the other answers have nothing to redirect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionAnswer {
    /// The step wraps: continue from `position`, heading `direction`.
    CorrectNewPosition {
        /// Cell the actor lands on.
        position: Coord,
        /// Heading after the wrap.
        direction: Direction,
    },
    /// The step needs no redirection; take it as is.
    NoMovementNeeded,
    /// The step is blocked, as by a wall.
    NoValidMovement,
}

impl CollisionAnswer {
    /// Where an actor at `from` heading `direction` ends up, or `None` if blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileloop_core::{Coord, Direction};
    /// use tileloop_loop::CollisionAnswer;
    ///
    /// let from = Coord::new(-3, 0);
    /// let wrap = CollisionAnswer::CorrectNewPosition {
    ///     position: Coord::new(4, 0),
    ///     direction: Direction::Left,
    /// };
    /// assert_eq!(wrap.resolve(from, Direction::Left), Some((Coord::new(4, 0), Direction::Left)));
    /// assert_eq!(
    ///     CollisionAnswer::NoMovementNeeded.resolve(from, Direction::Left),
    ///     Some((Coord::new(-4, 0), Direction::Left)),
    /// );
    /// assert_eq!(CollisionAnswer::NoValidMovement.resolve(from, Direction::Left), None);
    /// ```
    pub fn resolve(self, from: Coord, direction: Direction) -> Option<(Coord, Direction)> {
        match self {
            Self::CorrectNewPosition {
                position,
                direction,
            } => Some((position, direction)),
            Self::NoMovementNeeded => from.checked_step(direction).map(|to| (to, direction)),
            Self::NoValidMovement => None,
        }
    }

    /// Whether this answer redirects the actor.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::CorrectNewPosition { .. })
    }
}

impl Default for CollisionAnswer {
    /// Unknown cells are walls.
    fn default() -> Self {
        Self::NoValidMovement
    }
}

//! Runtime errors for the world layer.

use thiserror::Error;
use tileloop_core::Direction;
use tileloop_loop::LoopError;

/// Errors raised while running a level.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The loop table is missing or was built twice.
    #[error(transparent)]
    Loop(#[from] LoopError),
}

/// Why [`Actor::queue_direction`](crate::Actor::queue_direction) refused a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueRejection {
    /// The turn would reverse the last queued or current heading.
    #[error("turning {requested} would reverse the current heading")]
    Reversal {
        /// The refused direction.
        requested: Direction,
    },
    /// The direction is already the last queued or current heading.
    #[error("already heading {requested}")]
    Duplicate {
        /// The refused direction.
        requested: Direction,
    },
    /// The queue holds [`QUEUE_CAPACITY`](crate::QUEUE_CAPACITY) turns already.
    #[error("direction queue is full")]
    Full,
}

//! Grid-stepping actors driven one tick at a time.

use crate::error::{QueueRejection, WorldError};
use crate::world::WorldInfo;
use std::collections::VecDeque;
use tileloop_core::{Coord, Direction, TileGrid};
use tileloop_loop::CollisionAnswer;

/// Maximum number of buffered turns.
pub const QUEUE_CAPACITY: usize = 3;

/// What one [`Actor::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped to an adjacent cell.
    Moved {
        /// New position.
        to: Coord,
    },
    /// Stepped through a border and came out on the paired side.
    Wrapped {
        /// Position before the step.
        from: Coord,
        /// Position after the wrap.
        to: Coord,
    },
    /// The step was refused; the actor did not move.
    Blocked {
        /// Position the actor stays on.
        at: Coord,
    },
}

/// An actor moving cell by cell, with a short queue of pending turns.
///
/// The host queues turns from player input and calls [`tick`](Self::tick)
/// once per simulation step. With nothing queued the actor keeps its
/// current heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    position: Coord,
    heading: Direction,
    queue: VecDeque<Direction>,
}

impl Actor {
    /// An actor at `position` facing `heading`.
    pub fn new(position: Coord, heading: Direction) -> Self {
        Self {
            position,
            heading,
            queue: VecDeque::with_capacity(QUEUE_CAPACITY),
        }
    }

    /// Current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Direction of the last successful step, or the initial heading.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Pending turns, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = Direction> + '_ {
        self.queue.iter().copied()
    }

    /// Buffer a turn for a later tick.
    ///
    /// Turns are checked against the last queued direction, or the heading
    /// if nothing is queued: repeating it or reversing it is refused.
    pub fn queue_direction(&mut self, direction: Direction) -> Result<(), QueueRejection> {
        let last = self.queue.back().copied().unwrap_or(self.heading);
        if direction == last {
            return Err(QueueRejection::Duplicate {
                requested: direction,
            });
        }
        if direction == last.opposite() {
            return Err(QueueRejection::Reversal {
                requested: direction,
            });
        }
        if self.queue.len() >= QUEUE_CAPACITY {
            return Err(QueueRejection::Full);
        }
        self.queue.push_back(direction);
        Ok(())
    }

    /// Drop every pending turn.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Move to `position` without a step, e.g. on respawn. Pending turns are dropped.
    pub fn place(&mut self, position: Coord, heading: Direction) {
        self.position = position;
        self.heading = heading;
        self.queue.clear();
    }

    /// Advance one step.
    ///
    /// Takes the next queued turn (or keeps the heading) and tries to step.
    /// Steps that leave the loop room or land on a border tile are resolved
    /// through the loop table; other steps succeed if the target cell is
    /// walkable. A blocked step still consumes its queued turn.
    pub fn tick<G: TileGrid + ?Sized>(
        &mut self,
        world: &WorldInfo<'_, G>,
    ) -> Result<MoveOutcome, WorldError> {
        let table = world.loop_table()?;
        let direction = self.queue.pop_front().unwrap_or(self.heading);
        let from = self.position;
        let grid = world.grid();

        let next = from
            .checked_step(direction)
            .filter(|&n| table.room().contains(n) && grid.tile_at(n) != Some(table.border()));
        let outcome = match next {
            Some(next) if world.settings().walkable.matches(grid.tile_at(next)) => {
                MoveOutcome::Moved { to: next }
            }
            Some(_) => MoveOutcome::Blocked { at: from },
            None => match table.query(from, direction) {
                CollisionAnswer::CorrectNewPosition { position, .. } => MoveOutcome::Wrapped {
                    from,
                    to: position,
                },
                CollisionAnswer::NoMovementNeeded => match from.checked_step(direction) {
                    Some(to) => MoveOutcome::Moved { to },
                    None => MoveOutcome::Blocked { at: from },
                },
                CollisionAnswer::NoValidMovement => MoveOutcome::Blocked { at: from },
            },
        };

        match outcome {
            MoveOutcome::Moved { to } | MoveOutcome::Wrapped { to, .. } => {
                self.position = to;
                self.heading = direction;
            }
            MoveOutcome::Blocked { .. } => {}
        }
        Ok(outcome)
    }
}

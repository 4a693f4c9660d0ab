//! Level-scoped glue for hosts that run tileloop inside a game loop.
//!
//! A host loads a [`LevelDef`] (RON), builds its map, wraps it in a
//! [`WorldInfo`], calls [`WorldInfo::initialize`] once at level load and
//! then advances each [`Actor`] with [`Actor::tick`] every simulation step.
//! Nothing here runs implicitly: every step is a call the host makes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod config;
pub mod error;
pub mod world;

pub use actor::{Actor, MoveOutcome, QUEUE_CAPACITY};
pub use config::{ConfigError, LegendEntry, LevelDef};
pub use error::{QueueRejection, WorldError};
pub use world::{WorldInfo, WorldSettings};

//! Core engine types: card uids, seats, RNG, configuration, errors.
//!
//! Everything here is independent of card semantics; the rest of the crate
//! builds on these types.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardUid, UidAllocator};
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, ScorchRule};
pub use error::{ErrorKind, GameError};

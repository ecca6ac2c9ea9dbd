//! # rust-gwent
//!
//! Rules engine for a two-player Gwent-style card battle.
//!
//! Players draw from a shared deck, deploy cards into three combat lanes
//! (Close, Ranged, Siege), and resolve deploy effects, hero abilities,
//! ability cards and weather. A round goes to the higher total power; the
//! first player to win two rounds takes the match.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: The engine exposes commands and queries only.
//!    Rendering, input and animation belong to the front-end.
//!
//! 2. **Closed card variants**: `Card` is a tagged union over Unit, Hero,
//!    Ability and Weather. Effect code asks capability questions
//!    (`is_hero_unit`, `is_spy_unit`) instead of downcasting.
//!
//! 3. **Explicit ownership**: `Game` owns the board, players, deck and RNG.
//!    No globals, no back-pointers; effects receive an `EffectContext`.
//!
//! 4. **All-or-nothing commands**: A rejected command returns a
//!    `GameError` and changes nothing.
//!
//! ## Modules
//!
//! - `core`: Card uids, seats, RNG, configuration, errors
//! - `cards`: Card vocabulary, the `Card` type, the JSON loader
//! - `zones`: The board and weather registry
//! - `deck`: The shared draw pile and `DeckBuilder`
//! - `effects`: Effect resolution for every card variant
//! - `rules`: Round scoring and match results
//! - `game`: `Player` and the `Game` session

pub mod core;
pub mod cards;
pub mod zones;
pub mod deck;
pub mod effects;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardUid, PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, ScorchRule,
    ErrorKind, GameError,
};

pub use crate::cards::{
    Card, CardKind, CardType, Zone, Faction,
    DeployEffect, HeroAbility, AbilityEffect, WeatherType,
    LoadReport,
};

pub use crate::zones::{Board, DestroyedUnit};
pub use crate::deck::{Deck, DeckBuilder};
pub use crate::effects::{EffectOutcome, HeroActivation, Placement, PlayOutcome};
pub use crate::rules::{GamePhase, MatchResult, RoundResult};
pub use crate::game::{Game, Player};

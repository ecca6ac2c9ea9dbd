//! Players and the match session.
//!
//! - `Player`: hand, hero-ability gate, round and lifepoint bookkeeping
//! - `Game`: turn/round/match state machine and the command surface that
//!   front-ends drive (`play_card`, `pass`, `activate_hero_ability`, ...)

pub mod player;
pub mod session;

pub use player::Player;
pub use session::Game;

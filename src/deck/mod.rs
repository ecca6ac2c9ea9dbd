//! Draw pile and deck construction.
//!
//! - `Deck`: the shared draw pile, with graveyard reshuffle on empty draws
//! - `DeckBuilder`: fluent construction from JSON data or hand-built cards

pub mod builder;
pub mod pile;

pub use builder::DeckBuilder;
pub use pile::Deck;

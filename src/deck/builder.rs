//! Fluent deck construction.
//!
//! ```
//! use rust_gwent::cards::{Faction, Zone};
//! use rust_gwent::deck::DeckBuilder;
//!
//! let deck = DeckBuilder::new()
//!     .unit("Footman", 3, Zone::Close, Faction::North)
//!     .unit("Archer", 4, Zone::Ranged, Faction::North)
//!     .build();
//!
//! assert_eq!(deck.size(), 2);
//! ```

use log::warn;
use std::path::Path;

use super::pile::Deck;
use crate::cards::{parse_cards, Card, Faction, LoadReport, Zone};
use crate::core::{CardUid, GameError, GameRng, UidAllocator};

/// Builds a `Deck`, optionally with a pre-seeded graveyard pile.
///
/// Split the result with [`into_parts`] and hand both halves to
/// `Game::set_deck_with_graveyard` to start a match with a graveyard.
///
/// [`into_parts`]: DeckBuilder::into_parts
#[derive(Debug, Default)]
pub struct DeckBuilder {
    uids: UidAllocator,
    cards: Vec<Card>,
    graveyard: Vec<Card>,
    shuffle_seed: Option<u64>,
}

impl DeckBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering from an existing allocator.
    #[must_use]
    pub fn with_uids(mut self, uids: UidAllocator) -> Self {
        self.uids = uids;
        self
    }

    /// Add cards parsed from JSON card data.
    pub fn load_from_str(mut self, json: &str) -> Result<(Self, LoadReport), GameError> {
        let (cards, report) = parse_cards(json, &mut self.uids)?;
        self.cards.extend(cards);
        Ok((self, report))
    }

    /// Add cards parsed from a JSON file.
    pub fn load_from_file(self, path: impl AsRef<Path>) -> Result<(Self, LoadReport), GameError> {
        let json = std::fs::read_to_string(path)?;
        self.load_from_str(&json)
    }

    /// Mint a uid for a card built by hand.
    pub fn next_uid(&mut self) -> CardUid {
        self.uids.alloc()
    }

    /// Add a card as-is.
    #[must_use]
    pub fn add_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Add a card built from a freshly minted uid.
    #[must_use]
    pub fn add_with(mut self, build: impl FnOnce(CardUid) -> Card) -> Self {
        let uid = self.uids.alloc();
        self.cards.push(build(uid));
        self
    }

    /// Add a plain unit.
    #[must_use]
    pub fn unit(self, name: &str, power: i32, zone: Zone, faction: Faction) -> Self {
        self.add_with(|uid| Card::unit(uid, name, power, zone, faction))
    }

    /// Add `count` identical plain units.
    #[must_use]
    pub fn units(mut self, count: usize, name: &str, power: i32, zone: Zone, faction: Faction) -> Self {
        for _ in 0..count {
            self = self.unit(name, power, zone, faction);
        }
        self
    }

    /// Put a card straight into the graveyard pile.
    #[must_use]
    pub fn add_to_graveyard(mut self, card: Card) -> Self {
        self.graveyard.push(card);
        self
    }

    /// Shuffle the pile with this seed when building.
    #[must_use]
    pub fn shuffle(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Build the draw pile. Cards queued with [`add_to_graveyard`] go to
    /// the bottom of the pile so none are lost.
    ///
    /// [`add_to_graveyard`]: DeckBuilder::add_to_graveyard
    #[must_use]
    pub fn build(self) -> Deck {
        let (deck, graveyard) = self.into_parts();
        if graveyard.is_empty() {
            return deck;
        }
        warn!("{} graveyard card(s) placed at the bottom of the deck", graveyard.len());
        let mut cards = graveyard;
        cards.extend_from_slice(deck.cards());
        Deck::from_cards(cards)
    }

    /// The draw pile and the graveyard pile.
    #[must_use]
    pub fn into_parts(self) -> (Deck, Vec<Card>) {
        let mut deck = Deck::from_cards(self.cards);
        if let Some(seed) = self.shuffle_seed {
            deck.shuffle(&mut GameRng::new(seed));
        }
        (deck, self.graveyard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DeployEffect, HeroAbility};

    #[test]
    fn test_builder_mints_unique_uids() {
        let deck = DeckBuilder::new()
            .units(3, "Footman", 2, Zone::Close, Faction::North)
            .add_with(|uid| Card::hero(uid, "Geralt", 15, Zone::Close, Faction::Neutral, HeroAbility::Scorch, 0))
            .build();

        let uids: Vec<u32> = deck.cards().iter().map(|c| c.uid().raw()).collect();
        assert_eq!(uids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_into_parts_keeps_graveyard() {
        let (deck, graveyard) = DeckBuilder::new()
            .unit("Footman", 2, Zone::Close, Faction::North)
            .add_to_graveyard(Card::unit(CardUid(50), "Fallen", 4, Zone::Siege, Faction::North))
            .into_parts();

        assert_eq!(deck.size(), 1);
        assert_eq!(graveyard.len(), 1);
        assert_eq!(graveyard[0].uid(), CardUid(50));
    }

    #[test]
    fn test_build_keeps_graveyard_cards() {
        let deck = DeckBuilder::new()
            .units(20, "Footman", 2, Zone::Close, Faction::North)
            .add_to_graveyard(Card::unit(CardUid(50), "Fallen", 4, Zone::Siege, Faction::North))
            .build();

        assert_eq!(deck.size(), 21);
        // Bottom of the pile, drawn last.
        assert_eq!(deck.cards()[0].uid(), CardUid(50));
    }

    #[test]
    fn test_load_then_add() {
        let json = r#"[{"type": "UNIT", "name": "Medic", "faction": "NORTH", "zone": "SIEGE", "power": 5,
                        "effect": "MEDIC"}]"#;
        let (builder, report) = DeckBuilder::new().load_from_str(json).unwrap();
        let deck = builder.unit("Footman", 2, Zone::Close, Faction::North).build();

        assert_eq!(report.loaded, 1);
        assert_eq!(deck.size(), 2);
        assert_eq!(deck.cards()[0].unit_profile().unwrap().deploy_effect, DeployEffect::Medic);
        assert_eq!(deck.cards()[1].uid(), CardUid(1));
    }

    #[test]
    fn test_seeded_shuffle() {
        let build = || DeckBuilder::new().units(10, "Footman", 2, Zone::Close, Faction::North).shuffle(3).build();
        assert_eq!(build(), build());
    }
}

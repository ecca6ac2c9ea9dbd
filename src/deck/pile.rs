//! The shared draw pile.
//!
//! The deck owns only the draw pile. When it runs dry, a draw reshuffles the
//! drawing player's graveyard into a new pile; the graveyard itself lives on
//! the `Board`. Deck operations only move cards, so the number of cards
//! across pile and graveyard never changes.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cards::{parse_cards, Card, LoadReport};
use crate::core::{GameError, GameRng, UidAllocator};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck holding `cards`; the last card is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Append cards parsed from JSON card data.
    pub fn load_from_str(&mut self, json: &str, uids: &mut UidAllocator) -> Result<LoadReport, GameError> {
        let (cards, report) = parse_cards(json, uids)?;
        self.cards.extend(cards);
        Ok(report)
    }

    /// Append cards parsed from a JSON file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, uids: &mut UidAllocator) -> Result<LoadReport, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let report = self.load_from_str(&json, uids)?;
        info!("loaded {} cards from {}", report.loaded, path.display());
        Ok(report)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card. An empty pile is first refilled from `graveyard`;
    /// `None` means both were empty.
    pub fn draw_card(&mut self, graveyard: &mut Vec<Card>, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            self.reshuffle_graveyard(graveyard, rng);
        }
        self.cards.pop()
    }

    /// Move every graveyard card into the pile at base power and shuffle.
    /// Returns how many cards moved.
    pub fn reshuffle_graveyard(&mut self, graveyard: &mut Vec<Card>, rng: &mut GameRng) -> usize {
        let moved = graveyard.len();
        if moved == 0 {
            return 0;
        }
        for mut card in graveyard.drain(..) {
            card.reset_power();
            self.cards.push(card);
        }
        self.shuffle(rng);
        debug!("reshuffled {moved} cards from graveyard into the deck");
        moved
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pile contents, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

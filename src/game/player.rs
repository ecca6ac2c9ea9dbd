//! One seat: hand, hero-ability gate, round and lifepoint bookkeeping.
//!
//! The player does not hold its deck or graveyard. Draw operations take
//! both as arguments, which keeps `Player` free of back-references.

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, GameRng, PlayerId};
use crate::deck::Deck;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    /// Hero names whose ability was used this round.
    used_heroes: FxHashSet<String>,
    rounds_won: u32,
    rounds_lost: u32,
    lifepoints: u32,
    selected: Option<usize>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, lifepoints: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            used_heroes: FxHashSet::default(),
            rounds_won: 0,
            rounds_lost: 0,
            lifepoints,
            selected: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Hand ===

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.hand.len() {
            Ok(())
        } else {
            Err(GameError::InvalidHandIndex {
                index,
                hand_size: self.hand.len(),
            })
        }
    }

    /// Draw one card. Returns false if deck and graveyard were both empty.
    pub fn draw_card(&mut self, deck: &mut Deck, graveyard: &mut Vec<Card>, rng: &mut GameRng) -> bool {
        match deck.draw_card(graveyard, rng) {
            Some(card) => {
                debug!("{} draws {}", self.name, card.name());
                self.hand.push(card);
                true
            }
            None => {
                debug!("{} has nothing left to draw", self.name);
                false
            }
        }
    }

    /// Draw up to `count` cards; returns how many were drawn.
    pub fn draw_cards(
        &mut self,
        count: usize,
        deck: &mut Deck,
        graveyard: &mut Vec<Card>,
        rng: &mut GameRng,
    ) -> usize {
        (0..count)
            .take_while(|_| self.draw_card(deck, graveyard, rng))
            .count()
    }

    /// Remove the card at `index` from the hand so it can be played.
    ///
    /// Fails without touching the hand if `index` is out of range.
    pub fn take_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_index(index)?;
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Ok(self.hand.remove(index))
    }

    /// Throw away the card at `index`; the caller decides where it goes.
    pub fn discard_card(&mut self, index: usize) -> Result<Card, GameError> {
        let card = self.take_card(index)?;
        debug!("{} discards {}", self.name, card.name());
        Ok(card)
    }

    pub fn add_card_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    // === Selection ===

    pub fn select_card(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn deselect_card(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<usize> {
        self.selected
    }

    // === Hero gate ===

    #[must_use]
    pub fn can_use_hero_ability(&self, hero_name: &str) -> bool {
        !self.used_heroes.contains(hero_name)
    }

    pub fn mark_hero_ability_used(&mut self, hero_name: &str) {
        self.used_heroes.insert(hero_name.to_string());
    }

    pub fn reset_hero_abilities_for_new_round(&mut self) {
        self.used_heroes.clear();
    }

    // === Rounds and lifepoints ===

    #[must_use]
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    #[must_use]
    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }

    pub fn add_round_win(&mut self) {
        self.rounds_won += 1;
    }

    pub fn add_round_loss(&mut self) {
        self.rounds_lost += 1;
    }

    #[must_use]
    pub fn lifepoints(&self) -> u32 {
        self.lifepoints
    }

    /// Lose one lifepoint; never drops below zero.
    pub fn lose_lifepoint(&mut self) {
        self.lifepoints = self.lifepoints.saturating_sub(1);
    }

    pub fn gain_lifepoint(&mut self) {
        self.lifepoints += 1;
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.lifepoints == 0
    }
}

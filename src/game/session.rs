//! The match state machine and the engine's command/query surface.
//!
//! ```text
//! NotStarted --start_game--> InProgress(round 1, Player 0)
//! InProgress --both passed--> round scored --> next_round --> InProgress(round N+1)
//!                                          \-> GameOver
//! ```
//!
//! Commands validate everything before touching state, so a rejected
//! command leaves the match exactly as it was.
//!
//! ```
//! use rust_gwent::cards::{Faction, Zone};
//! use rust_gwent::core::{GameConfig, PlayerId};
//! use rust_gwent::deck::DeckBuilder;
//! use rust_gwent::game::Game;
//!
//! let deck = DeckBuilder::new().units(24, "Footman", 3, Zone::Close, Faction::North).build();
//! let mut game = Game::with_config("Geralt", "Yennefer", GameConfig::default().with_seed(1));
//! game.set_deck(deck).unwrap();
//! game.start_game().unwrap();
//!
//! game.play_card(PlayerId::new(0), 0).unwrap();
//! assert!(game.is_player_turn(PlayerId::new(1)));
//! ```

use log::{info, warn};
use std::path::Path;

use super::player::Player;
use crate::cards::{Card, LoadReport};
use crate::core::{CardUid, GameConfig, GameError, GameRng, PlayerId, PlayerMap, UidAllocator};
use crate::deck::Deck;
use crate::effects::{self, EffectContext, HeroActivation, PlayOutcome};
use crate::rules::{match_result, score_round, GamePhase, MatchResult, RoundResult};
use crate::zones::Board;

/// One two-player match.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    board: Board,
    deck: Deck,
    rng: GameRng,
    uids: UidAllocator,
    phase: GamePhase,
    round: u32,
    current: PlayerId,
    passed: PlayerMap<bool>,
    result: Option<MatchResult>,
    history: Vec<RoundResult>,
}

impl Game {
    /// A match under the default rules.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::with_config(first, second, GameConfig::default())
    }

    #[must_use]
    pub fn with_config(first: impl Into<String>, second: impl Into<String>, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let lifepoints = config.starting_lifepoints;
        Self {
            players: PlayerMap::from_pair(
                Player::new(PlayerId(0), first, lifepoints),
                Player::new(PlayerId(1), second, lifepoints),
            ),
            board: Board::new(),
            deck: Deck::new(),
            rng,
            uids: UidAllocator::new(),
            phase: GamePhase::NotStarted,
            round: 0,
            current: PlayerId(0),
            passed: PlayerMap::with_value(false),
            result: None,
            history: Vec::new(),
            config,
        }
    }

    // === Setup ===

    fn ensure_not_started(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::NotStarted => Ok(()),
            _ => Err(GameError::AlreadyStarted),
        }
    }

    /// Add the cards in a JSON card-data file to the shared deck.
    pub fn load_deck(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, GameError> {
        self.ensure_not_started()?;
        self.deck.load_from_file(path, &mut self.uids)
    }

    /// Add cards from JSON card data to the shared deck.
    pub fn load_deck_from_str(&mut self, json: &str) -> Result<LoadReport, GameError> {
        self.ensure_not_started()?;
        let report = self.deck.load_from_str(json, &mut self.uids)?;
        info!("loaded {} cards ({} skipped)", report.loaded, report.skipped);
        Ok(report)
    }

    /// Replace the shared deck with a prepared one.
    pub fn set_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        self.set_deck_with_graveyard(deck, PlayerId(0), Vec::new())
    }

    /// Replace the shared deck and seed `player`'s graveyard with `graveyard`,
    /// as split by `DeckBuilder::into_parts`.
    pub fn set_deck_with_graveyard(
        &mut self,
        deck: Deck,
        player: PlayerId,
        graveyard: Vec<Card>,
    ) -> Result<(), GameError> {
        self.ensure_not_started()?;
        self.ensure_seat(player)?;
        let next = deck
            .cards()
            .iter()
            .chain(graveyard.iter())
            .map(|card| card.uid().raw() + 1)
            .max()
            .unwrap_or(0)
            .max(self.uids.issued());
        self.uids = UidAllocator::starting_at(next);
        self.deck = deck;
        self.board.graveyard_mut(player)?.extend(graveyard);
        Ok(())
    }

    /// Shuffle, deal opening hands and begin round 1 with Player 0.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.ensure_not_started()?;
        let required = self.config.min_deck_size;
        if self.deck.size() < required {
            return Err(GameError::DeckTooSmall {
                required,
                actual: self.deck.size(),
            });
        }

        self.deck.shuffle(&mut self.rng);
        for id in PlayerId::both() {
            let graveyard = self.board.graveyard_mut(id)?;
            self.players[id].draw_cards(self.config.opening_hand, &mut self.deck, graveyard, &mut self.rng);
        }

        self.round = 1;
        self.current = PlayerId(0);
        self.passed = PlayerMap::with_value(false);
        self.phase = GamePhase::InProgress;
        info!(
            "match started: {} vs {}, {} cards left in deck",
            self.players[PlayerId(0)].name(),
            self.players[PlayerId(1)].name(),
            self.deck.size()
        );
        Ok(())
    }

    // === Commands ===

    fn ensure_seat(&self, player: PlayerId) -> Result<(), GameError> {
        if player.is_valid() {
            Ok(())
        } else {
            Err(GameError::InvalidPlayer(player))
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::NotStarted => Err(GameError::NotStarted),
            GamePhase::GameOver => Err(GameError::GameOver),
            GamePhase::InProgress => Ok(()),
        }
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_seat(player)?;
        self.ensure_in_progress()?;
        if player != self.current {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn context(&mut self, player: PlayerId) -> EffectContext<'_> {
        let (owner, opponent) = self.players.pair_mut(player);
        EffectContext {
            owner,
            opponent,
            board: &mut self.board,
            deck: &mut self.deck,
            rng: &mut self.rng,
            uids: &mut self.uids,
            config: &self.config,
        }
    }

    /// Play the card at `hand_index` from `player`'s hand, then end the turn.
    pub fn play_card(&mut self, player: PlayerId, hand_index: usize) -> Result<PlayOutcome, GameError> {
        self.ensure_turn(player)?;
        let hand_size = self.players[player].hand_size();
        if hand_index >= hand_size {
            return Err(GameError::InvalidHandIndex {
                index: hand_index,
                hand_size,
            });
        }

        let outcome = effects::play_from_hand(hand_index, &mut self.context(player))?;
        self.end_turn()?;
        Ok(outcome)
    }

    /// Record that `player` passes this round, then end the turn.
    pub fn pass(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        self.passed[player] = true;
        info!("{} passes", self.players[player].name());
        self.end_turn()?;
        Ok(())
    }

    /// Hand the turn to the other player. Once both players have passed the
    /// round is scored and, unless the match is over, the next one begins.
    pub fn end_turn(&mut self) -> Result<Option<RoundResult>, GameError> {
        self.ensure_in_progress()?;
        self.current = self.current.opponent();

        if !self.passed.values().all(|&passed| passed) {
            return Ok(None);
        }
        let result = self.calculate_round_winner()?;
        if self.phase == GamePhase::InProgress {
            self.next_round()?;
        }
        Ok(Some(result))
    }

    /// Score the current round and update round, lifepoint and match state.
    pub fn calculate_round_winner(&mut self) -> Result<RoundResult, GameError> {
        self.ensure_in_progress()?;
        let result = score_round(&self.board, self.round)?;

        match result.winner {
            Some(winner) => {
                self.players[winner].add_round_win();
                let loser = &mut self.players[winner.opponent()];
                loser.add_round_loss();
                loser.lose_lifepoint();
                info!(
                    "round {} to {} ({} vs {})",
                    self.round,
                    self.players[winner].name(),
                    result.powers[PlayerId(0)],
                    result.powers[PlayerId(1)]
                );
            }
            None => info!("round {} tied at {}", self.round, result.powers[PlayerId(0)]),
        }
        self.history.push(result.clone());

        if let Some(outcome) = match_result(&self.players, self.config.rounds_to_win) {
            self.result = Some(outcome);
            self.phase = GamePhase::GameOver;
            match outcome {
                MatchResult::Winner(winner) => info!("{} wins the match", self.players[winner].name()),
                MatchResult::Draw => info!("the match ends in a draw"),
            }
        }
        Ok(result)
    }

    /// Clear the table and start the next round.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        for player in self.players.values_mut() {
            player.reset_hero_abilities_for_new_round();
        }
        self.board.clear_board();
        self.passed = PlayerMap::with_value(false);
        self.round += 1;
        self.current = PlayerId(((self.round - 1) % 2) as u8);

        for id in PlayerId::both() {
            let graveyard = self.board.graveyard_mut(id)?;
            let drawn = self.players[id].draw_cards(self.config.round_draw, &mut self.deck, graveyard, &mut self.rng);
            if drawn < self.config.round_draw {
                warn!("{} could only draw {drawn} card(s)", self.players[id].name());
            }
        }
        info!("round {} begins, {} to act", self.round, self.players[self.current].name());
        Ok(())
    }

    /// Activate the first unused hero ability on `player`'s side
    /// (scanning Close, Ranged, Siege). Does not end the turn.
    pub fn activate_hero_ability(&mut self, player: PlayerId) -> Result<HeroActivation, GameError> {
        self.ensure_turn(player)?;
        let available = effects::available_heroes(&self.board, &self.players[player])?;
        match available.first() {
            Some(&hero) => effects::activate_hero_ability(hero, &mut self.context(player)),
            None => {
                let used = self
                    .board
                    .units(player)?
                    .find(|(_, card)| card.hero_profile().is_some())
                    .map(|(_, card)| card.name().to_string());
                Err(match used {
                    Some(name) => GameError::AbilityAlreadyUsed(name),
                    None => GameError::NoHeroOnBoard(player),
                })
            }
        }
    }

    /// Activate the ability of a specific hero on `player`'s side.
    pub fn activate_hero(&mut self, player: PlayerId, hero: CardUid) -> Result<HeroActivation, GameError> {
        self.ensure_turn(player)?;
        effects::activate_hero_ability(hero, &mut self.context(player))
    }

    // === Queries ===

    /// Heroes on `player`'s side that can still act this round.
    pub fn available_heroes(&self, player: PlayerId) -> Result<Vec<CardUid>, GameError> {
        effects::available_heroes(&self.board, self.player(player)?)
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn player(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players.get(player).ok_or(GameError::InvalidPlayer(player))
    }

    /// Direct access to a player, for scenario setup.
    pub fn player_mut(&mut self, player: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(player).ok_or(GameError::InvalidPlayer(player))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the board, for scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn has_passed(&self, player: PlayerId) -> bool {
        self.passed.get(player).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn is_player_turn(&self, player: PlayerId) -> bool {
        self.phase == GamePhase::InProgress && self.current == player
    }

    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            Some(MatchResult::Winner(winner)) => Some(winner),
            _ => None,
        }
    }

    /// Name of the match winner, if there is one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(|winner| self.players[winner].name())
    }

    /// Results of every scored round, oldest first.
    #[must_use]
    pub fn round_history(&self) -> &[RoundResult] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Faction, Zone};
    use crate::deck::DeckBuilder;

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn started(cards: usize) -> Game {
        let deck = DeckBuilder::new().units(cards, "Footman", 3, Zone::Close, Faction::North).build();
        let mut game = Game::with_config("Geralt", "Yennefer", GameConfig::default().with_seed(5));
        game.set_deck(deck).unwrap();
        game.start_game().unwrap();
        game
    }

    #[test]
    fn test_start_requires_twenty_cards() {
        let deck = DeckBuilder::new().units(19, "Footman", 3, Zone::Close, Faction::North).build();
        let mut game = Game::new("A", "B");
        game.set_deck(deck).unwrap();

        let err = game.start_game().unwrap_err();
        assert!(matches!(err, GameError::DeckTooSmall { required: 20, actual: 19 }));
        assert_eq!(game.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_start_deals_opening_hands() {
        let game = started(24);
        assert_eq!(game.round(), 1);
        assert_eq!(game.current_player_id(), P0);
        assert_eq!(game.player(P0).unwrap().hand_size(), 10);
        assert_eq!(game.player(P1).unwrap().hand_size(), 10);
        assert_eq!(game.deck().size(), 4);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut game = started(20);
        assert!(matches!(game.start_game(), Err(GameError::AlreadyStarted)));
        assert!(matches!(game.load_deck_from_str("[]"), Err(GameError::AlreadyStarted)));
    }

    #[test]
    fn test_commands_before_start() {
        let mut game = Game::new("A", "B");
        assert!(matches!(game.pass(P0), Err(GameError::NotStarted)));
        assert!(matches!(game.play_card(P0, 0), Err(GameError::NotStarted)));
    }

    #[test]
    fn test_invalid_seat() {
        let mut game = started(20);
        assert!(matches!(game.pass(PlayerId(3)), Err(GameError::InvalidPlayer(_))));
        assert!(game.player(PlayerId(3)).is_err());
    }

    #[test]
    fn test_set_deck_moves_uid_allocator() {
        let deck = DeckBuilder::new().units(3, "Footman", 3, Zone::Close, Faction::North).build();
        let mut game = Game::new("A", "B");
        game.set_deck(deck).unwrap();
        let report = game
            .load_deck_from_str(r#"[{"type": "UNIT", "name": "X", "faction": "NORTH", "zone": "CLOSE", "power": 1}]"#)
            .unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(game.deck().cards()[3].uid(), CardUid(3));
    }

    #[test]
    fn test_seeded_graveyard_feeds_round_draw() {
        let (deck, graveyard) = DeckBuilder::new()
            .units(20, "Footman", 3, Zone::Close, Faction::North)
            .add_to_graveyard(Card::unit(CardUid(50), "Ghoul", 2, Zone::Close, Faction::Monsters))
            .into_parts();
        let mut game = Game::with_config("A", "B", GameConfig::default().with_seed(5));
        game.set_deck_with_graveyard(deck, P0, graveyard).unwrap();
        assert_eq!(game.board().graveyard(P0).unwrap().len(), 1);

        game.start_game().unwrap();
        assert!(game.deck().is_empty());
        game.pass(P0).unwrap();
        game.pass(P1).unwrap();

        assert_eq!(game.player(P0).unwrap().hand_size(), 11);
        assert_eq!(game.player(P1).unwrap().hand_size(), 10);
        assert!(game.board().graveyard(P0).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_graveyard_rejects_bad_seat() {
        let mut game = Game::new("A", "B");
        let err = game
            .set_deck_with_graveyard(Deck::new(), PlayerId(2), Vec::new())
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayer(_)));
    }

    #[test]
    fn test_next_round_alternates_starter() {
        let mut game = started(30);
        game.pass(P0).unwrap();
        game.pass(P1).unwrap();

        assert_eq!(game.round(), 2);
        assert_eq!(game.current_player_id(), P1);
        assert!(!game.has_passed(P0));
        assert_eq!(game.player(P0).unwrap().hand_size(), 11);
        assert_eq!(game.round_history().len(), 1);
        assert!(game.round_history()[0].is_tie());
    }
}

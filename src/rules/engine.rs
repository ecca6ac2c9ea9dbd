//! Round scoring and match results.
//!
//! A round is won by the player with the strictly higher total power across
//! all three lanes; equal totals award the round to nobody. The match ends
//! when a player reaches `rounds_to_win` round wins, or when a player runs
//! out of lifepoints.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, PlayerMap};
use crate::game::Player;
use crate::zones::Board;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    GameOver,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Winner(PlayerId),
    Draw,
}

impl MatchResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }
}

/// Final tally of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub powers: PlayerMap<i32>,
    pub winner: Option<PlayerId>,
}

impl RoundResult {
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.winner.map(PlayerId::opponent)
    }
}

/// Tally the board for `round`.
pub fn score_round(board: &Board, round: u32) -> Result<RoundResult, GameError> {
    let first = board.total_power(PlayerId(0))?;
    let second = board.total_power(PlayerId(1))?;
    let winner = match first.cmp(&second) {
        std::cmp::Ordering::Greater => Some(PlayerId(0)),
        std::cmp::Ordering::Less => Some(PlayerId(1)),
        std::cmp::Ordering::Equal => None,
    };
    Ok(RoundResult {
        round,
        powers: PlayerMap::from_pair(first, second),
        winner,
    })
}

/// Decide whether the match is over.
#[must_use]
pub fn match_result(players: &PlayerMap<Player>, rounds_to_win: u32) -> Option<MatchResult> {
    let champions: Vec<PlayerId> = players
        .iter()
        .filter(|(_, player)| player.rounds_won() >= rounds_to_win)
        .map(|(id, _)| id)
        .collect();
    let fallen: Vec<PlayerId> = players
        .iter()
        .filter(|(_, player)| player.has_lost())
        .map(|(id, _)| id)
        .collect();

    match (champions.as_slice(), fallen.as_slice()) {
        ([winner], _) => Some(MatchResult::Winner(*winner)),
        ([], [loser]) => Some(MatchResult::Winner(loser.opponent())),
        ([], []) => None,
        _ => Some(MatchResult::Draw),
    }
}

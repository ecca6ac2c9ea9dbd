//! Engine error taxonomy.
//!
//! Commands return `Result<_, GameError>`. A front-end that wants to show a
//! different message per class of failure matches on [`GameError::kind`]
//! rather than on individual variants.
//!
//! Running out of cards or finding no target for an effect is not an error;
//! those outcomes are reported through return values.

use thiserror::Error;

use super::player::PlayerId;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bad index or id was passed in.
    InvalidArgument,
    /// The command is well-formed but not legal at this point of the match.
    NotAllowedNow,
    /// The hero ability was already used this round.
    AbilityAlreadyUsed,
    /// The match cannot be set up as requested.
    Setup,
    /// External card or config data could not be read.
    Data,
}

/// Errors returned by engine commands.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{0} is not a seat at this table")]
    InvalidPlayer(PlayerId),

    #[error("hand index {index} out of range (hand holds {hand_size} cards)")]
    InvalidHandIndex { index: usize, hand_size: usize },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("the game is already over")]
    GameOver,

    #[error("the game has not started")]
    NotStarted,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("{0}'s ability already used this round")]
    AbilityAlreadyUsed(String),

    #[error("{0} has no hero on the board")]
    NoHeroOnBoard(PlayerId),

    #[error("deck holds {actual} cards, at least {required} are needed")]
    DeckTooSmall { required: usize, actual: usize },

    #[error("failed to read card data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid deck format: {0}")]
    InvalidDeckFormat(String),
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPlayer(_) | GameError::InvalidHandIndex { .. } => {
                ErrorKind::InvalidArgument
            }
            GameError::NotYourTurn(_)
            | GameError::GameOver
            | GameError::NotStarted
            | GameError::AlreadyStarted
            | GameError::NoHeroOnBoard(_) => ErrorKind::NotAllowedNow,
            GameError::AbilityAlreadyUsed(_) => ErrorKind::AbilityAlreadyUsed,
            GameError::DeckTooSmall { .. } => ErrorKind::Setup,
            GameError::Io(_) | GameError::Json(_) | GameError::InvalidDeckFormat(_) => {
                ErrorKind::Data
            }
        }
    }
}

//! Round and match rules.
//!
//! - `score_round`: compare both players' board totals
//! - `match_result`: decide whether the match is over
//! - `GamePhase`, `RoundResult`, `MatchResult`: state and result types

mod engine;

pub use engine::{match_result, score_round, GamePhase, MatchResult, RoundResult};

//! Match rules configuration.
//!
//! `GameConfig` collects the numeric rules a match is played under. The
//! defaults reproduce the standard ruleset; front-ends and tests adjust them
//! through the builder methods or load them from JSON.
//!
//! ```
//! use rust_gwent::core::{GameConfig, ScorchRule};
//!
//! let config = GameConfig::default()
//!     .with_round_draw(3)
//!     .with_scorch_rule(ScorchRule::AtOrAbove(8))
//!     .with_seed(42);
//!
//! assert_eq!(config.round_draw, 3);
//! assert_eq!(config.rounds_to_win, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Targeting rule for the SCORCH hero ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorchRule {
    /// Destroy the single strongest enemy unit (first encountered on ties).
    #[default]
    Strongest,
    /// Destroy every enemy unit whose power is at least the threshold.
    AtOrAbove(i32),
}

/// Complete rules configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum draw-pile size required by `start_game`.
    pub min_deck_size: usize,

    /// Cards dealt to each player when the match starts.
    pub opening_hand: usize,

    /// Cards each player draws at the start of every later round.
    pub round_draw: usize,

    /// Round wins needed to take the match. A player also loses once their
    /// lifepoints run out, so `starting_lifepoints` below this ends matches
    /// early.
    pub rounds_to_win: u32,

    /// Cards the owner draws after deploying a spy.
    pub spy_draw: usize,

    /// Lifepoints each player starts with. One is lost per round lost or
    /// drawn.
    pub starting_lifepoints: u32,

    /// How SCORCH selects its victims.
    pub scorch_rule: ScorchRule,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_deck_size: 20,
            opening_hand: 10,
            round_draw: 1,
            rounds_to_win: 2,
            spy_draw: 2,
            starting_lifepoints: 2,
            scorch_rule: ScorchRule::Strongest,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration document. Missing keys keep their defaults,
    /// except that a missing `starting_lifepoints` is raised to
    /// `rounds_to_win`.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let lifepoints_given = document.get("starting_lifepoints").is_some();
        let mut config: Self = serde_json::from_value(document)?;
        if !lifepoints_given {
            config.starting_lifepoints = config.starting_lifepoints.max(config.rounds_to_win);
        }
        Ok(config)
    }

    /// Set the minimum deck size.
    #[must_use]
    pub fn with_min_deck_size(mut self, size: usize) -> Self {
        self.min_deck_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand = size;
        self
    }

    /// Set the per-round draw count.
    #[must_use]
    pub fn with_round_draw(mut self, count: usize) -> Self {
        self.round_draw = count;
        self
    }

    /// Set how many round wins end the match. Starting lifepoints are raised
    /// to at least `rounds`; call [`with_starting_lifepoints`] afterwards to
    /// override.
    ///
    /// [`with_starting_lifepoints`]: Self::with_starting_lifepoints
    #[must_use]
    pub fn with_rounds_to_win(mut self, rounds: u32) -> Self {
        self.rounds_to_win = rounds;
        self.starting_lifepoints = self.starting_lifepoints.max(rounds);
        self
    }

    /// Set the spy compensation draw.
    #[must_use]
    pub fn with_spy_draw(mut self, count: usize) -> Self {
        self.spy_draw = count;
        self
    }

    /// Set starting lifepoints.
    #[must_use]
    pub fn with_starting_lifepoints(mut self, lifepoints: u32) -> Self {
        self.starting_lifepoints = lifepoints;
        self
    }

    /// Set the SCORCH targeting rule.
    #[must_use]
    pub fn with_scorch_rule(mut self, rule: ScorchRule) -> Self {
        self.scorch_rule = rule;
        self
    }

    /// Fix the RNG seed for reproducible matches.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

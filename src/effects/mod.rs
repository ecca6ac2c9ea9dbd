//! Card effect resolution.
//!
//! Every effect runs against an `EffectContext`: the acting player, the
//! opponent, the board, the deck, and the match RNG and rules. Effects are
//! dispatched on the closed card variants:
//!
//! - `play`: a card leaving the hand (placement + deploy/ability/weather)
//! - `deploy`: unit deploy effects
//! - `hero`: once-per-round hero abilities
//! - `ability`: ability cards
//! - `weather`: weather cards
//!
//! Effects that find nothing to act on report it through `EffectOutcome`
//! rather than failing; the only errors are invalid seats and the hero
//! activation gate.

mod ability;
mod context;
mod deploy;
mod hero;
mod outcome;
mod play;
mod weather;

pub use ability::{apply_ability, FOGLET_NAME, FOGLET_POWER};
pub use context::EffectContext;
pub use deploy::{trigger_deploy_effect, DeployedUnit};
pub use hero::{activate_hero_ability, available_heroes, trigger_hero_ability};
pub use outcome::{EffectOutcome, HeroActivation, Placement, PlayOutcome};
pub use play::{play_card, play_from_hand};
pub use weather::play_weather;

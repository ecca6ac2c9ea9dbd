//! Reports produced by effect resolution.
//!
//! Front-ends use these to narrate what happened. An effect with nothing to
//! act on reports `EffectOutcome::None` or `NoTarget` instead of failing.

use serde::{Deserialize, Serialize};

use crate::cards::{CardType, WeatherType, Zone, ZoneList};
use crate::core::CardUid;
use crate::zones::DestroyedUnit;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// The card has no effect.
    None,
    /// The effect had nothing to act on.
    NoTarget,
    /// One card took damage.
    Damaged {
        target: CardUid,
        name: String,
        amount: i32,
        destroyed: bool,
    },
    /// Every card in a lane took damage; some may have been destroyed.
    RowDamaged {
        zone: Zone,
        damaged: usize,
        destroyed: Vec<DestroyedUnit>,
    },
    /// A group of cards gained power.
    Boosted { count: usize, amount: i32 },
    /// A single card gained power.
    Empowered { target: CardUid, name: String, amount: i32 },
    /// Every card in a lane had its power doubled.
    Doubled { zone: Zone, count: usize },
    /// Cards were destroyed and moved to the graveyard.
    Destroyed(Vec<DestroyedUnit>),
    /// The owner drew cards.
    Drew { requested: usize, drawn: usize },
    /// Active weather was removed.
    WeatherCleared { count: usize },
    /// Weather now covers these lanes.
    WeatherApplied { weather: WeatherType, lanes: ZoneList },
    /// A card came back from the graveyard onto the board.
    Revived { uid: CardUid, name: String, zone: Zone },
    /// A card went from the board back to its owner's hand.
    ReturnedToHand { uid: CardUid, name: String },
    /// A new card was created on the board.
    Spawned { uid: CardUid, name: String, zone: Zone },
    /// Clear skies: weather removed, then the owner's lane boosted.
    ClearedAndBoosted { cleared: usize, boosted: usize },
}

impl EffectOutcome {
    /// Whether the effect changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            EffectOutcome::None | EffectOutcome::NoTarget => true,
            EffectOutcome::Destroyed(units) => units.is_empty(),
            EffectOutcome::RowDamaged { damaged, .. } => *damaged == 0,
            EffectOutcome::Boosted { count, .. } | EffectOutcome::Doubled { count, .. } => *count == 0,
            EffectOutcome::Drew { drawn, .. } => *drawn == 0,
            EffectOutcome::WeatherCleared { count } => *count == 0,
            _ => false,
        }
    }

    /// The single destroyed unit, for effects that destroy at most one.
    #[must_use]
    pub fn destroyed_unit(&self) -> Option<&DestroyedUnit> {
        match self {
            EffectOutcome::Destroyed(units) | EffectOutcome::RowDamaged { destroyed: units, .. } => {
                units.first()
            }
            _ => None,
        }
    }
}

/// Where a played card ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// On the owner's side, in this lane.
    OwnBoard(Zone),
    /// On the opponent's side (spies).
    OpponentBoard(Zone),
    /// Registered as active weather.
    Weather,
    /// Resolved and discarded.
    Graveyard,
}

/// Everything that happened when a card left the hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub uid: CardUid,
    pub name: String,
    pub card_type: CardType,
    pub placement: Placement,
    /// Cards drawn as spy compensation.
    pub spy_draws: usize,
    pub effect: EffectOutcome,
}

/// Report for one hero ability activation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroActivation {
    pub hero: CardUid,
    pub name: String,
    pub effect: EffectOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_detection() {
        assert!(EffectOutcome::None.is_noop());
        assert!(EffectOutcome::NoTarget.is_noop());
        assert!(EffectOutcome::Destroyed(Vec::new()).is_noop());
        assert!(EffectOutcome::Drew { requested: 2, drawn: 0 }.is_noop());
        assert!(!EffectOutcome::Boosted { count: 2, amount: 1 }.is_noop());
    }

    #[test]
    fn test_destroyed_unit() {
        let unit = DestroyedUnit {
            uid: CardUid(4),
            name: "Knight".into(),
            power: 7,
            zone: Zone::Close,
            was_hero: false,
        };
        let outcome = EffectOutcome::Destroyed(vec![unit.clone()]);
        assert_eq!(outcome.destroyed_unit(), Some(&unit));
        assert_eq!(EffectOutcome::NoTarget.destroyed_unit(), None);
    }
}

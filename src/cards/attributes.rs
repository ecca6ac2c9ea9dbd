//! Card vocabulary: zones, factions, card types and effect tags.
//!
//! Every enum parses from and displays as the SCREAMING_SNAKE_CASE token
//! used by the card-definition format (`"BITING_FROST"`, `"CLOSE"`), and
//! carries a `#[default]` variant used when card data names an unknown
//! token.
//!
//! ```
//! use rust_gwent::cards::Zone;
//!
//! assert_eq!("RANGED".parse::<Zone>().unwrap(), Zone::Ranged);
//! assert_eq!(Zone::Siege.to_string(), "SIEGE");
//! assert_eq!(Zone::default(), Zone::Any);
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A combat lane, or the `Any` wildcard used by weather/ability targeting.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Close,
    Ranged,
    Siege,
    #[default]
    Any,
}

impl Zone {
    /// The three real combat lanes, in board iteration order.
    pub const COMBAT: [Zone; 3] = [Zone::Close, Zone::Ranged, Zone::Siege];

    /// Slot of a combat lane (0..3). `None` for `Any`.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Zone::Close => Some(0),
            Zone::Ranged => Some(1),
            Zone::Siege => Some(2),
            Zone::Any => None,
        }
    }

    /// The lanes this zone stands for: itself, or all three for `Any`.
    #[must_use]
    pub fn lanes(self) -> &'static [Zone] {
        match self {
            Zone::Close => &[Zone::Close],
            Zone::Ranged => &[Zone::Ranged],
            Zone::Siege => &[Zone::Siege],
            Zone::Any => &Zone::COMBAT,
        }
    }

    /// Lane a card of this zone is deployed into. `Any` deploys to Close.
    #[must_use]
    pub const fn deploy_lane(self) -> Zone {
        match self {
            Zone::Any => Zone::Close,
            lane => lane,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Close => "Close",
            Zone::Ranged => "Ranged",
            Zone::Siege => "Siege",
            Zone::Any => "Any",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Faction {
    North,
    Scoiatael,
    Nilfgard,
    Monsters,
    #[default]
    Neutral,
}

/// Variant tag of a card.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Unit,
    Hero,
    Ability,
    Weather,
}

/// One-shot effect a unit triggers when deployed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeployEffect {
    DamageRandomEnemy,
    BoostAdjacent,
    DrawCard,
    DestroyWeakest,
    ClearWeather,
    Spy,
    Medic,
    MoraleBoost,
    #[default]
    None,
}

impl DeployEffect {
    /// Card text for this effect at the given magnitude.
    #[must_use]
    pub fn describe(self, value: i32) -> String {
        match self {
            DeployEffect::DamageRandomEnemy => format!("Deal {value} damage to a random enemy."),
            DeployEffect::BoostAdjacent => format!("Boost adjacent units by {value}."),
            DeployEffect::DrawCard => format!("Draw {value} card(s)."),
            DeployEffect::DestroyWeakest => "Destroy weakest enemy unit.".to_string(),
            DeployEffect::ClearWeather => "Clear all weather effects.".to_string(),
            DeployEffect::Spy => "Deploys on the opponent's side; draw cards.".to_string(),
            DeployEffect::Medic => "Revive last unit from graveyard.".to_string(),
            DeployEffect::MoraleBoost => format!("Boost all lowest-power units by {value}."),
            DeployEffect::None => String::new(),
        }
    }
}

/// Once-per-round ability of a hero on the board.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HeroAbility {
    #[default]
    CommandersHorn,
    Scorch,
    Decoy,
    Alchemy,
    Revenge,
}

impl HeroAbility {
    /// Card text for this ability at the given magnitude.
    #[must_use]
    pub fn describe(self, value: i32) -> String {
        match self {
            HeroAbility::CommandersHorn => "Double the power of an entire row.".to_string(),
            HeroAbility::Scorch => "Destroy strongest enemy unit.".to_string(),
            HeroAbility::Decoy => "Return a unit to your hand.".to_string(),
            HeroAbility::Alchemy => format!("Boost strongest unit by {value}."),
            HeroAbility::Revenge => format!("Gain +{value} per lost round."),
        }
    }
}

/// Effect of a one-shot ability card.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AbilityEffect {
    #[default]
    DamageRow,
    ClearSkies,
    FogletSpawn,
    CommandoTraining,
    VenomExtract,
}

impl AbilityEffect {
    /// Card text for this effect at the given magnitude.
    #[must_use]
    pub fn describe(self, value: i32) -> String {
        match self {
            AbilityEffect::DamageRow => format!("Damage all units in row by {value}."),
            AbilityEffect::ClearSkies => format!("Clear weather and boost row by {value}."),
            AbilityEffect::FogletSpawn => "Summon Foglet if Fog is active.".to_string(),
            AbilityEffect::CommandoTraining => format!("Boost row units by {value}."),
            AbilityEffect::VenomExtract => format!("Poison strongest enemy ({value} damage)."),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherType {
    BitingFrost,
    ImpenetrableFog,
    TorrentialRain,
    SkeligeStorm,
    DragonDream,
    #[default]
    ClearWeather,
}

impl WeatherType {
    /// Zone a weather card affects when its data lists no zones.
    #[must_use]
    pub const fn default_zone(self) -> Zone {
        match self {
            WeatherType::BitingFrost => Zone::Close,
            WeatherType::ImpenetrableFog => Zone::Ranged,
            WeatherType::TorrentialRain => Zone::Siege,
            WeatherType::SkeligeStorm | WeatherType::DragonDream | WeatherType::ClearWeather => {
                Zone::Any
            }
        }
    }

    /// Whether this weather clears instead of afflicting.
    #[must_use]
    pub const fn is_clear(self) -> bool {
        matches!(self, WeatherType::ClearWeather)
    }

    /// Card text for this weather.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            WeatherType::BitingFrost => "Freezing cold reduces Close combat units to 1 power",
            WeatherType::ImpenetrableFog => "Thick fog reduces Ranged combat units to 1 power",
            WeatherType::TorrentialRain => "Heavy rain reduces Siege combat units to 1 power",
            WeatherType::SkeligeStorm => "A storm from the Skellige isles reduces units to 1 power",
            WeatherType::DragonDream => "A dragon's dream reduces units to 1 power",
            WeatherType::ClearWeather => "Clears all weather types from all zones",
        }
    }
}

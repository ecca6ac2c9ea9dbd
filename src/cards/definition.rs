//! The `Card` type: shared identity plus a per-variant profile.
//!
//! A card is a closed tagged union over Unit, Hero, Ability and Weather.
//! Shared data (name, faction, zone, power) lives on `Card`; variant data
//! lives in the `CardKind` profile. Effect code asks capability questions
//! (`is_hero_unit`, `is_spy_unit`) instead of matching on the variant.
//!
//! ## Power
//!
//! `base_power` is fixed at construction. `power` is the current value and
//! moves with boosts, damage and weather; `power <= 0` means destroyed.
//! Clearing weather restores `base_power`.
//!
//! ```
//! use rust_gwent::cards::{Card, Faction, Zone};
//! use rust_gwent::core::CardUid;
//!
//! let mut card = Card::unit(CardUid(1), "Poor Infantry", 6, Zone::Close, Faction::North);
//! card.take_damage(2);
//!
//! assert_eq!(card.power(), 4);
//! assert_eq!(card.base_power(), 6);
//! assert!(!card.is_destroyed());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{AbilityEffect, CardType, DeployEffect, Faction, HeroAbility, WeatherType, Zone};
use crate::core::CardUid;

/// Zones affected by a weather card. Never more than a handful.
pub type ZoneList = SmallVec<[Zone; 3]>;

/// Unit-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub deploy_effect: DeployEffect,
    pub effect_value: i32,
    pub is_hero: bool,
    pub is_spy: bool,
}

/// Hero-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProfile {
    pub ability: HeroAbility,
    pub ability_value: i32,
}

/// Ability-card data. `targets_enemy` is fixed when the card is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityProfile {
    pub effect: AbilityEffect,
    pub effect_value: i32,
    pub targets_enemy: bool,
}

/// Weather-card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherProfile {
    pub weather_type: WeatherType,
    pub affected_zones: ZoneList,
    pub effect_value: i32,
}

impl WeatherProfile {
    /// Whether this weather touches `zone`, counting an `Any` entry as all lanes.
    #[must_use]
    pub fn affects(&self, zone: Zone) -> bool {
        self.affected_zones
            .iter()
            .any(|&z| z == zone || z == Zone::Any)
    }

    /// Concrete lanes covered, deduplicated, in board order.
    #[must_use]
    pub fn lanes(&self) -> ZoneList {
        Zone::COMBAT
            .iter()
            .copied()
            .filter(|&lane| self.affects(lane))
            .collect()
    }
}

/// Variant-specific payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Unit(UnitProfile),
    Hero(HeroProfile),
    Ability(AbilityProfile),
    Weather(WeatherProfile),
}

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    uid: CardUid,
    name: String,
    faction: Faction,
    zone: Zone,
    base_power: i32,
    power: i32,
    kind: CardKind,
}

impl Card {
    /// Build a card from its parts.
    #[must_use]
    pub fn new(
        uid: CardUid,
        name: impl Into<String>,
        base_power: i32,
        zone: Zone,
        faction: Faction,
        kind: CardKind,
    ) -> Self {
        Self {
            uid,
            name: name.into(),
            faction,
            zone,
            base_power,
            power: base_power,
            kind,
        }
    }

    /// A plain unit with no deploy effect.
    #[must_use]
    pub fn unit(uid: CardUid, name: impl Into<String>, power: i32, zone: Zone, faction: Faction) -> Self {
        Self::new(
            uid,
            name,
            power,
            zone,
            faction,
            CardKind::Unit(UnitProfile {
                deploy_effect: DeployEffect::None,
                effect_value: 0,
                is_hero: false,
                is_spy: false,
            }),
        )
    }

    /// A hero card.
    #[must_use]
    pub fn hero(
        uid: CardUid,
        name: impl Into<String>,
        power: i32,
        zone: Zone,
        faction: Faction,
        ability: HeroAbility,
        ability_value: i32,
    ) -> Self {
        Self::new(
            uid,
            name,
            power,
            zone,
            faction,
            CardKind::Hero(HeroProfile { ability, ability_value }),
        )
    }

    /// An ability card. Ability cards have no power of their own.
    #[must_use]
    pub fn ability(
        uid: CardUid,
        name: impl Into<String>,
        zone: Zone,
        faction: Faction,
        effect: AbilityEffect,
        effect_value: i32,
        targets_enemy: bool,
    ) -> Self {
        Self::new(
            uid,
            name,
            0,
            zone,
            faction,
            CardKind::Ability(AbilityProfile {
                effect,
                effect_value,
                targets_enemy,
            }),
        )
    }

    /// A weather card. Weather is neutral and not bound to one zone.
    #[must_use]
    pub fn weather(
        uid: CardUid,
        name: impl Into<String>,
        weather_type: WeatherType,
        affected_zones: impl IntoIterator<Item = Zone>,
        effect_value: i32,
    ) -> Self {
        Self::new(
            uid,
            name,
            0,
            Zone::Any,
            Faction::Neutral,
            CardKind::Weather(WeatherProfile {
                weather_type,
                affected_zones: affected_zones.into_iter().collect(),
                effect_value,
            }),
        )
    }

    /// Give a unit a deploy effect. No-op for other variants.
    #[must_use]
    pub fn with_deploy_effect(mut self, effect: DeployEffect, value: i32) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.deploy_effect = effect;
            unit.effect_value = value;
        }
        self
    }

    /// Mark a unit as a hero unit. No-op for other variants.
    #[must_use]
    pub fn as_hero_unit(mut self) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.is_hero = true;
        }
        self
    }

    /// Mark a unit as a spy. No-op for other variants.
    #[must_use]
    pub fn as_spy(mut self) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.is_spy = true;
        }
        self
    }

    // === Identity ===

    #[must_use]
    pub fn uid(&self) -> CardUid {
        self.uid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn faction(&self) -> Faction {
        self.faction
    }

    /// Zone printed on the card (may be `Any`).
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Unit(_) => CardType::Unit,
            CardKind::Hero(_) => CardType::Hero,
            CardKind::Ability(_) => CardType::Ability,
            CardKind::Weather(_) => CardType::Weather,
        }
    }

    /// Card text generated from the card's effect.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.kind {
            CardKind::Unit(unit) => {
                let text = unit.deploy_effect.describe(unit.effect_value);
                if text.is_empty() {
                    format!("{} unit.", self.zone.label())
                } else {
                    format!("{} unit. {text}", self.zone.label())
                }
            }
            CardKind::Hero(hero) => format!(
                "Hero with the ability: {} {}",
                hero.ability,
                hero.ability.describe(hero.ability_value)
            ),
            CardKind::Ability(ability) => ability.effect.describe(ability.effect_value),
            CardKind::Weather(weather) => weather.weather_type.describe().to_string(),
        }
    }

    // === Capabilities ===

    /// Hero cards and units flagged as heroes. Heroes ignore weather.
    #[must_use]
    pub fn is_hero_unit(&self) -> bool {
        match &self.kind {
            CardKind::Hero(_) => true,
            CardKind::Unit(unit) => unit.is_hero,
            _ => false,
        }
    }

    #[must_use]
    pub fn is_spy_unit(&self) -> bool {
        matches!(&self.kind, CardKind::Unit(unit) if unit.is_spy)
    }

    /// Whether this card occupies a zone once played (Unit or Hero).
    #[must_use]
    pub fn is_board_unit(&self) -> bool {
        matches!(self.kind, CardKind::Unit(_) | CardKind::Hero(_))
    }

    /// Non-hero board units are the ones weather and row boosts touch.
    #[must_use]
    pub fn is_regular_unit(&self) -> bool {
        self.is_board_unit() && !self.is_hero_unit()
    }

    #[must_use]
    pub fn unit_profile(&self) -> Option<&UnitProfile> {
        match &self.kind {
            CardKind::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    #[must_use]
    pub fn hero_profile(&self) -> Option<&HeroProfile> {
        match &self.kind {
            CardKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    #[must_use]
    pub fn weather_profile(&self) -> Option<&WeatherProfile> {
        match &self.kind {
            CardKind::Weather(weather) => Some(weather),
            _ => None,
        }
    }

    // === Power ===

    #[must_use]
    pub fn power(&self) -> i32 {
        self.power
    }

    #[must_use]
    pub fn base_power(&self) -> i32 {
        self.base_power
    }

    pub fn set_power(&mut self, power: i32) {
        self.power = power;
    }

    /// Raise current power, saturating at `i32::MAX`.
    pub fn boost(&mut self, amount: i32) {
        self.power = self.power.saturating_add(amount);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.power = self.power.saturating_sub(amount);
    }

    /// Return to the printed base power.
    pub fn reset_power(&mut self) {
        self.power = self.base_power;
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.power <= 0
    }
}

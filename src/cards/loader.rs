//! Card-definition loader.
//!
//! Card data is a JSON document of the shape `{"cards": [ ... ]}` (a bare
//! array is accepted too). Each record carries `type`, `name`, `faction`
//! and `zone` plus type-specific fields:
//!
//! | type      | required         | optional                                   |
//! |-----------|------------------|--------------------------------------------|
//! | `UNIT`    | `power`          | `isHero`, `isSpy`, `effect`, `effectValue` |
//! | `HERO`    | `power`, `ability` | `abilityValue`                           |
//! | `ABILITY` | `effect`         | `effectValue`, `targetsEnemy` (true)       |
//! | `WEATHER` | `weatherType`    | `effectValue`, `affectedZones`             |
//!
//! Unknown enum tokens fall back to the enum's default. A record that is
//! malformed (missing a required field, wrong JSON type, unknown card type)
//! is skipped with a warning and the rest of the document still loads.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use super::attributes::{AbilityEffect, DeployEffect, Faction, HeroAbility, WeatherType, Zone};
use super::definition::{Card, ZoneList};
use crate::core::{GameError, UidAllocator};

/// Counts from one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// One record as it appears in card data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    #[serde(rename = "type")]
    card_type: String,
    name: String,
    faction: String,
    zone: String,
    power: Option<i32>,
    #[serde(default)]
    is_hero: bool,
    #[serde(default)]
    is_spy: bool,
    effect: Option<String>,
    ability: Option<String>,
    weather_type: Option<String>,
    #[serde(default)]
    effect_value: i32,
    #[serde(default)]
    ability_value: i32,
    affected_zones: Option<Vec<String>>,
    #[serde(default = "default_targets_enemy")]
    targets_enemy: bool,
}

fn default_targets_enemy() -> bool {
    true
}

/// Parse a token, falling back to the enum default on unknown input.
fn token<T: FromStr + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_default()
}

impl CardRecord {
    /// Turn the record into a card, or explain why it cannot be.
    fn into_card(self, uids: &mut UidAllocator) -> Result<Card, String> {
        let faction: Faction = token(&self.faction);
        let zone: Zone = token(&self.zone);

        let card = match self.card_type.as_str() {
            "UNIT" => {
                let power = self.power.ok_or("unit without power")?;
                let effect: DeployEffect = self.effect.as_deref().map(token).unwrap_or_default();
                let mut card = Card::unit(uids.alloc(), self.name, power, zone, faction)
                    .with_deploy_effect(effect, self.effect_value);
                if self.is_hero {
                    card = card.as_hero_unit();
                }
                if self.is_spy {
                    card = card.as_spy();
                }
                card
            }
            "HERO" => {
                let power = self.power.ok_or("hero without power")?;
                let ability: HeroAbility = token(self.ability.as_deref().ok_or("hero without ability")?);
                Card::hero(uids.alloc(), self.name, power, zone, faction, ability, self.ability_value)
            }
            "ABILITY" => {
                let effect: AbilityEffect = token(self.effect.as_deref().ok_or("ability without effect")?);
                Card::ability(
                    uids.alloc(),
                    self.name,
                    zone,
                    faction,
                    effect,
                    self.effect_value,
                    self.targets_enemy,
                )
            }
            "WEATHER" => {
                let weather: WeatherType =
                    token(self.weather_type.as_deref().ok_or("weather without weatherType")?);
                let zones: ZoneList = match &self.affected_zones {
                    Some(list) => list.iter().map(|z| token::<Zone>(z)).collect(),
                    None => [weather.default_zone()].into_iter().collect(),
                };
                Card::weather(uids.alloc(), self.name, weather, zones, self.effect_value)
            }
            other => return Err(format!("unknown card type '{other}'")),
        };
        Ok(card)
    }
}

/// Parse card data into cards, allocating a uid for each.
///
/// Fails only when the document itself is unusable: invalid JSON, or no
/// card list at the top level.
pub fn parse_cards(json: &str, uids: &mut UidAllocator) -> Result<(Vec<Card>, LoadReport), GameError> {
    let document: Value = serde_json::from_str(json)?;
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("cards") {
            Some(Value::Array(records)) => records,
            _ => return Err(GameError::InvalidDeckFormat("missing 'cards' array".into())),
        },
        _ => return Err(GameError::InvalidDeckFormat("expected an object or array".into())),
    };

    let mut cards = Vec::with_capacity(records.len());
    let mut report = LoadReport::default();

    for (position, raw) in records.into_iter().enumerate() {
        let built = serde_json::from_value::<CardRecord>(raw)
            .map_err(|e| e.to_string())
            .and_then(|record| record.into_card(uids));
        match built {
            Ok(card) => {
                cards.push(card);
                report.loaded += 1;
            }
            Err(reason) => {
                warn!("skipping card record #{position}: {reason}");
                report.skipped += 1;
            }
        }
    }

    debug!("parsed {} cards ({} skipped)", report.loaded, report.skipped);
    Ok((cards, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardType};

    fn parse(json: &str) -> (Vec<Card>, LoadReport) {
        parse_cards(json, &mut UidAllocator::new()).unwrap()
    }

    #[test]
    fn test_parse_each_type() {
        let (cards, report) = parse(
            r#"{"cards": [
                {"type": "UNIT", "name": "Archer", "faction": "NORTH", "zone": "RANGED", "power": 4,
                 "effect": "DRAW_CARD", "effectValue": 1},
                {"type": "HERO", "name": "Geralt", "faction": "NEUTRAL", "zone": "CLOSE", "power": 15,
                 "ability": "SCORCH"},
                {"type": "ABILITY", "name": "Bomb", "faction": "NEUTRAL", "zone": "CLOSE",
                 "effect": "DAMAGE_ROW", "effectValue": 2},
                {"type": "WEATHER", "name": "Frost", "faction": "NEUTRAL", "zone": "ANY",
                 "weatherType": "BITING_FROST"}
            ]}"#,
        );

        assert_eq!(report, LoadReport { loaded: 4, skipped: 0 });
        assert_eq!(cards[0].card_type(), CardType::Unit);
        assert_eq!(cards[0].unit_profile().unwrap().deploy_effect, DeployEffect::DrawCard);
        assert_eq!(cards[1].hero_profile().unwrap().ability, HeroAbility::Scorch);
        match cards[2].kind() {
            CardKind::Ability(profile) => assert!(profile.targets_enemy),
            other => panic!("expected ability, got {other:?}"),
        }
        assert_eq!(
            cards[3].weather_profile().unwrap().affected_zones.as_slice(),
            &[Zone::Close]
        );
    }

    #[test]
    fn test_uids_are_distinct() {
        let (cards, _) = parse(
            r#"[{"type": "UNIT", "name": "A", "faction": "NORTH", "zone": "CLOSE", "power": 1},
                {"type": "UNIT", "name": "A", "faction": "NORTH", "zone": "CLOSE", "power": 1}]"#,
        );
        assert_ne!(cards[0].uid(), cards[1].uid());
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        let (cards, _) = parse(
            r#"[{"type": "UNIT", "name": "Odd", "faction": "PIRATES", "zone": "SIDEWAYS", "power": 3,
                 "effect": "JUGGLE"}]"#,
        );
        assert_eq!(cards[0].faction(), Faction::Neutral);
        assert_eq!(cards[0].zone(), Zone::Any);
        assert_eq!(cards[0].unit_profile().unwrap().deploy_effect, DeployEffect::None);
    }

    #[test]
    fn test_malformed_records_skipped() {
        let (cards, report) = parse(
            r#"{"cards": [
                {"type": "UNIT", "name": "No Power", "faction": "NORTH", "zone": "CLOSE"},
                {"type": "DRAGON", "name": "Mystery", "faction": "NORTH", "zone": "CLOSE"},
                {"name": "No Type"},
                {"type": "UNIT", "name": "Knight", "faction": "NORTH", "zone": "CLOSE", "power": "six"},
                {"type": "UNIT", "name": "Footman", "faction": "NORTH", "zone": "CLOSE", "power": 3}
            ]}"#,
        );
        assert_eq!(report, LoadReport { loaded: 1, skipped: 4 });
        assert_eq!(cards[0].name(), "Footman");
    }

    #[test]
    fn test_flags_and_target() {
        let (cards, _) = parse(
            r#"[{"type": "UNIT", "name": "Stennis", "faction": "NORTH", "zone": "CLOSE", "power": 5,
                 "isSpy": true, "isHero": true},
                {"type": "ABILITY", "name": "Horn", "faction": "NORTH", "zone": "SIEGE",
                 "effect": "COMMANDO_TRAINING", "targetsEnemy": false}]"#,
        );
        assert!(cards[0].is_spy_unit());
        assert!(cards[0].is_hero_unit());
        match cards[1].kind() {
            CardKind::Ability(profile) => assert!(!profile.targets_enemy),
            other => panic!("expected ability, got {other:?}"),
        }
    }

    #[test]
    fn test_document_errors() {
        let mut uids = UidAllocator::new();
        assert!(matches!(
            parse_cards(r#"{"deck": []}"#, &mut uids),
            Err(GameError::InvalidDeckFormat(_))
        ));
        assert!(matches!(parse_cards("not json", &mut uids), Err(GameError::Json(_))));
        assert!(matches!(parse_cards("42", &mut uids), Err(GameError::InvalidDeckFormat(_))));
    }
}

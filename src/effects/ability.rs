//! One-shot ability cards.
//!
//! Only DAMAGE_ROW and VENOM_EXTRACT honour `targets_enemy`; the other
//! effects always act on the owner's side.

use log::debug;

use super::context::EffectContext;
use super::outcome::EffectOutcome;
use crate::cards::{AbilityEffect, AbilityProfile, Card, Faction, WeatherType, Zone};
use crate::core::GameError;

/// Name and power of the unit FOGLET_SPAWN creates.
pub const FOGLET_NAME: &str = "Foglet";
pub const FOGLET_POWER: i32 = 2;

/// Resolve an ability card whose printed zone is `zone`.
pub fn apply_ability(
    profile: &AbilityProfile,
    zone: Zone,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectOutcome, GameError> {
    let owner = ctx.owner_id();
    let target = if profile.targets_enemy { ctx.opponent_id() } else { owner };
    let value = profile.effect_value;

    let outcome = match profile.effect {
        AbilityEffect::DamageRow => {
            let damaged = ctx
                .board
                .units(target)?
                .filter(|(lane, _)| zone.lanes().contains(lane))
                .count();
            let destroyed = ctx.board.damage_row(target, zone, value)?;
            EffectOutcome::RowDamaged {
                zone,
                damaged,
                destroyed,
            }
        }
        AbilityEffect::ClearSkies => {
            let cleared = ctx.board.clear_weather();
            let boosted = if ctx.board.has_units_in_zone(owner, zone)? {
                ctx.board.boost_row(owner, zone, value)?
            } else {
                0
            };
            EffectOutcome::ClearedAndBoosted { cleared, boosted }
        }
        AbilityEffect::FogletSpawn => {
            if ctx.board.has_weather(WeatherType::ImpenetrableFog) {
                let uid = ctx.uids.alloc();
                let lane = zone.deploy_lane();
                let foglet = Card::unit(uid, FOGLET_NAME, FOGLET_POWER, lane, Faction::Monsters);
                ctx.board.place_unit(owner, lane, foglet)?;
                EffectOutcome::Spawned {
                    uid,
                    name: FOGLET_NAME.to_string(),
                    zone: lane,
                }
            } else {
                EffectOutcome::NoTarget
            }
        }
        AbilityEffect::CommandoTraining => EffectOutcome::Boosted {
            count: ctx.board.boost_all_in_row(owner, zone, value)?,
            amount: value,
        },
        AbilityEffect::VenomExtract => match ctx.board.strongest_unit(target)? {
            Some((lane, uid)) => match ctx.board.card_mut(target, uid)? {
                Some(card) => {
                    card.take_damage(value);
                    let name = card.name().to_string();
                    let destroyed = ctx
                        .board
                        .cleanup_destroyed_units(target, lane)?
                        .iter()
                        .any(|unit| unit.uid == uid);
                    EffectOutcome::Damaged {
                        target: uid,
                        name,
                        amount: value,
                        destroyed,
                    }
                }
                None => EffectOutcome::NoTarget,
            },
            None => EffectOutcome::NoTarget,
        },
    };

    debug!("ability {}: {outcome:?}", profile.effect);
    Ok(outcome)
}

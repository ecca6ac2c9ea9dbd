//! Unit deploy effects.
//!
//! A deploy effect fires once, right after its unit reaches the board.

use log::debug;

use super::context::EffectContext;
use super::outcome::EffectOutcome;
use crate::cards::{DeployEffect, UnitProfile, Zone};
use crate::core::{CardUid, GameError};

/// The unit whose deploy effect is resolving.
#[derive(Clone, Copy, Debug)]
pub struct DeployedUnit<'c> {
    pub uid: CardUid,
    pub name: &'c str,
    pub lane: Zone,
}

/// Resolve `profile`'s deploy effect for a unit that has just been placed.
pub fn trigger_deploy_effect(
    profile: &UnitProfile,
    source: DeployedUnit<'_>,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectOutcome, GameError> {
    let value = profile.effect_value;
    let outcome = match profile.deploy_effect {
        DeployEffect::DamageRandomEnemy => damage_random_enemy(value, ctx)?,
        DeployEffect::BoostAdjacent => {
            let owner = ctx.owner_id();
            let count = ctx
                .board
                .boost_where(owner, source.lane, value, |card| card.name() != source.name)?;
            EffectOutcome::Boosted { count, amount: value }
        }
        DeployEffect::DrawCard => {
            let requested = usize::try_from(value).unwrap_or(0);
            let drawn = ctx.draw_for_owner(requested)?;
            EffectOutcome::Drew { requested, drawn }
        }
        DeployEffect::DestroyWeakest => {
            let opponent = ctx.opponent_id();
            match ctx.board.destroy_weakest_unit(opponent)? {
                Some(unit) => EffectOutcome::Destroyed(vec![unit]),
                None => EffectOutcome::NoTarget,
            }
        }
        DeployEffect::ClearWeather => EffectOutcome::WeatherCleared {
            count: ctx.board.clear_weather(),
        },
        DeployEffect::Medic => {
            let owner = ctx.owner_id();
            match ctx.board.revive_last_unit(owner)? {
                Some(card) => {
                    let (uid, name, zone) = (card.uid(), card.name().to_string(), card.zone().deploy_lane());
                    ctx.board.place_unit(owner, zone, card)?;
                    EffectOutcome::Revived { uid, name, zone }
                }
                None => EffectOutcome::NoTarget,
            }
        }
        DeployEffect::MoraleBoost => morale_boost(value, ctx)?,
        // Spy placement is handled when the card is played.
        DeployEffect::Spy | DeployEffect::None => EffectOutcome::None,
    };

    if !matches!(outcome, EffectOutcome::None) {
        debug!("{} deploy effect {}: {outcome:?}", source.name, profile.deploy_effect);
    }
    Ok(outcome)
}

fn damage_random_enemy(amount: i32, ctx: &mut EffectContext<'_>) -> Result<EffectOutcome, GameError> {
    let opponent = ctx.opponent_id();
    let targets: Vec<(Zone, CardUid)> = ctx
        .board
        .units(opponent)?
        .map(|(lane, card)| (lane, card.uid()))
        .collect();
    let Some(pick) = ctx.rng.choose_index(targets.len()) else {
        return Ok(EffectOutcome::NoTarget);
    };
    let (lane, target) = targets[pick];

    let Some(card) = ctx.board.card_mut(opponent, target)? else {
        return Ok(EffectOutcome::NoTarget);
    };
    card.take_damage(amount);
    let name = card.name().to_string();

    let destroyed = ctx
        .board
        .cleanup_destroyed_units(opponent, lane)?
        .iter()
        .any(|unit| unit.uid == target);

    Ok(EffectOutcome::Damaged {
        target,
        name,
        amount,
        destroyed,
    })
}

/// Boost every non-hero unit sharing the owner's lowest non-hero power.
fn morale_boost(amount: i32, ctx: &mut EffectContext<'_>) -> Result<EffectOutcome, GameError> {
    let owner = ctx.owner_id();
    let lowest = ctx
        .board
        .units(owner)?
        .filter(|(_, card)| card.is_regular_unit())
        .map(|(_, card)| card.power())
        .min();
    let Some(lowest) = lowest else {
        return Ok(EffectOutcome::NoTarget);
    };

    let count = ctx.board.boost_where(owner, Zone::Any, amount, |card| {
        card.is_regular_unit() && card.power() == lowest
    })?;
    Ok(EffectOutcome::Boosted { count, amount })
}

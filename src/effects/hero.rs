//! Hero abilities.
//!
//! A hero is deployed like any unit; its ability is activated separately
//! while the hero is on its owner's side, once per round per hero name.

use log::{debug, info};

use super::context::EffectContext;
use super::outcome::{EffectOutcome, HeroActivation};
use crate::cards::{HeroAbility, HeroProfile, Zone};
use crate::core::{CardUid, GameError, ScorchRule};
use crate::game::Player;
use crate::zones::Board;

/// Heroes on `player`'s side whose ability is still unused this round, in
/// scan order.
pub fn available_heroes(board: &Board, player: &Player) -> Result<Vec<CardUid>, GameError> {
    Ok(board
        .units(player.id())?
        .filter(|(_, card)| card.hero_profile().is_some() && player.can_use_hero_ability(card.name()))
        .map(|(_, card)| card.uid())
        .collect())
}

/// Activate the ability of the owner's hero `hero`.
///
/// Fails with `NoHeroOnBoard` if `hero` is not a hero on the owner's side,
/// and with `AbilityAlreadyUsed` if a hero of that name already acted this
/// round. Nothing changes on failure.
pub fn activate_hero_ability(hero: CardUid, ctx: &mut EffectContext<'_>) -> Result<HeroActivation, GameError> {
    let owner = ctx.owner_id();
    let (lane, name, profile) = match ctx.board.find_card(hero) {
        Some((side, lane, card)) if side == owner => match card.hero_profile() {
            Some(profile) => (lane, card.name().to_string(), profile.clone()),
            None => return Err(GameError::NoHeroOnBoard(owner)),
        },
        _ => return Err(GameError::NoHeroOnBoard(owner)),
    };
    if !ctx.owner.can_use_hero_ability(&name) {
        return Err(GameError::AbilityAlreadyUsed(name));
    }

    info!("{} activates {} ({})", ctx.owner.name(), name, profile.ability);
    let effect = trigger_hero_ability(&profile, hero, lane, ctx)?;
    ctx.owner.mark_hero_ability_used(&name);

    Ok(HeroActivation {
        hero,
        name,
        effect,
    })
}

/// Resolve a hero ability for the hero `uid` standing in `lane`.
pub fn trigger_hero_ability(
    profile: &HeroProfile,
    uid: CardUid,
    lane: Zone,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectOutcome, GameError> {
    let owner = ctx.owner_id();
    let value = profile.ability_value;

    let outcome = match profile.ability {
        HeroAbility::CommandersHorn => EffectOutcome::Doubled {
            zone: lane,
            count: ctx.board.double_row_power(owner, lane)?,
        },
        HeroAbility::Scorch => {
            let destroyed = match ctx.config.scorch_rule {
                ScorchRule::Strongest => ctx
                    .board
                    .destroy_strongest_enemy_unit(owner, Some(uid))?
                    .into_iter()
                    .collect(),
                ScorchRule::AtOrAbove(threshold) => {
                    ctx.board.destroy_units_at_or_above(owner, threshold, Some(uid))?
                }
            };
            if destroyed.is_empty() {
                EffectOutcome::NoTarget
            } else {
                EffectOutcome::Destroyed(destroyed)
            }
        }
        HeroAbility::Decoy => match ctx.board.take_first_in_zone(owner, lane)? {
            Some(mut card) => {
                card.reset_power();
                let outcome = EffectOutcome::ReturnedToHand {
                    uid: card.uid(),
                    name: card.name().to_string(),
                };
                ctx.owner.add_card_to_hand(card);
                outcome
            }
            None => EffectOutcome::NoTarget,
        },
        HeroAbility::Alchemy => {
            let target = ctx.board.strongest_unit(owner)?;
            match target {
                Some((_, target)) => match ctx.board.card_mut(owner, target)? {
                    Some(card) => {
                        card.boost(value);
                        EffectOutcome::Empowered {
                            target,
                            name: card.name().to_string(),
                            amount: value,
                        }
                    }
                    None => EffectOutcome::NoTarget,
                },
                None => EffectOutcome::NoTarget,
            }
        }
        HeroAbility::Revenge => {
            let lost = ctx.owner.rounds_lost();
            if lost == 0 {
                EffectOutcome::NoTarget
            } else {
                let amount = value.saturating_mul(i32::try_from(lost).unwrap_or(i32::MAX));
                EffectOutcome::Boosted {
                    count: ctx.board.boost_row(owner, lane, amount)?,
                    amount,
                }
            }
        }
    };

    debug!("hero ability {}: {outcome:?}", profile.ability);
    Ok(outcome)
}

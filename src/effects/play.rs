//! Playing a card from hand.
//!
//! Dispatch on the card variant:
//!
//! - Unit: placed in its lane, then its deploy effect fires. A spy goes to
//!   the opponent's side and the owner draws `spy_draw` cards first.
//! - Hero: placed in its lane. Its ability is activated separately.
//! - Ability: resolves, then goes to the owner's graveyard.
//! - Weather: registers on the board (clear weather resolves and discards).
//!
//! The card object itself moves; nothing is copied.

use log::info;

use super::ability::apply_ability;
use super::context::EffectContext;
use super::deploy::{trigger_deploy_effect, DeployedUnit};
use super::outcome::{EffectOutcome, Placement, PlayOutcome};
use super::weather::play_weather;
use crate::cards::{Card, CardKind};
use crate::core::GameError;

/// Remove the owner's card at `index` from hand and play it.
///
/// An out-of-range index fails before anything changes.
pub fn play_from_hand(index: usize, ctx: &mut EffectContext<'_>) -> Result<PlayOutcome, GameError> {
    let card = ctx.owner.take_card(index)?;
    play_card(card, ctx)
}

/// Play a card that has already left the hand.
pub fn play_card(card: Card, ctx: &mut EffectContext<'_>) -> Result<PlayOutcome, GameError> {
    let uid = card.uid();
    let name = card.name().to_string();
    let card_type = card.card_type();
    let owner = ctx.owner_id();
    info!("{} plays {} ({card_type})", ctx.owner.name(), name);

    let (placement, spy_draws, effect) = match card.kind().clone() {
        CardKind::Unit(profile) => {
            let lane = card.zone().deploy_lane();
            let (placement, spy_draws) = if card.is_spy_unit() {
                let opponent = ctx.opponent_id();
                ctx.board.place_unit(opponent, lane, card)?;
                let drawn = ctx.draw_for_owner(ctx.config.spy_draw)?;
                (Placement::OpponentBoard(lane), drawn)
            } else {
                ctx.board.place_unit(owner, lane, card)?;
                (Placement::OwnBoard(lane), 0)
            };
            let source = DeployedUnit {
                uid,
                name: &name,
                lane,
            };
            let effect = trigger_deploy_effect(&profile, source, ctx)?;
            (placement, spy_draws, effect)
        }
        CardKind::Hero(_) => {
            let lane = card.zone().deploy_lane();
            ctx.board.place_unit(owner, lane, card)?;
            (Placement::OwnBoard(lane), 0, EffectOutcome::None)
        }
        CardKind::Ability(profile) => {
            let effect = apply_ability(&profile, card.zone(), ctx)?;
            ctx.board.add_to_graveyard(owner, card)?;
            (Placement::Graveyard, 0, effect)
        }
        CardKind::Weather(_) => {
            let (placement, effect) = play_weather(card, ctx)?;
            (placement, 0, effect)
        }
    };

    Ok(PlayOutcome {
        uid,
        name,
        card_type,
        placement,
        spy_draws,
        effect,
    })
}

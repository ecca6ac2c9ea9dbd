//! Weather cards.

use super::context::EffectContext;
use super::outcome::{EffectOutcome, Placement};
use crate::cards::Card;
use crate::core::GameError;

/// Bring a weather card into play for the owner.
///
/// Clear weather wipes every active effect and goes straight to the
/// graveyard; other weather stays registered on the board.
pub fn play_weather(card: Card, ctx: &mut EffectContext<'_>) -> Result<(Placement, EffectOutcome), GameError> {
    let owner = ctx.owner_id();
    let Some(profile) = card.weather_profile() else {
        ctx.board.add_to_graveyard(owner, card)?;
        return Ok((Placement::Graveyard, EffectOutcome::None));
    };
    let weather = profile.weather_type;
    let lanes = profile.lanes();

    if weather.is_clear() {
        let count = ctx.board.weather().iter().count();
        ctx.board.apply_weather(owner, card)?;
        return Ok((Placement::Graveyard, EffectOutcome::WeatherCleared { count }));
    }
    if lanes.is_empty() {
        ctx.board.apply_weather(owner, card)?;
        return Ok((Placement::Graveyard, EffectOutcome::NoTarget));
    }

    ctx.board.apply_weather(owner, card)?;
    Ok((Placement::Weather, EffectOutcome::WeatherApplied { weather, lanes }))
}

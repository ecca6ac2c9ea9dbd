//! Resolution context handed to card effects.

use crate::core::{GameConfig, GameError, GameRng, PlayerId, UidAllocator};
use crate::deck::Deck;
use crate::game::Player;
use crate::zones::Board;

/// Mutable view of a match from the acting player's side.
///
/// `owner` is the player whose card or hero is resolving; `opponent` is the
/// other seat. The board is shared and addressed by `PlayerId`.
pub struct EffectContext<'a> {
    pub owner: &'a mut Player,
    pub opponent: &'a mut Player,
    pub board: &'a mut Board,
    pub deck: &'a mut Deck,
    pub rng: &'a mut GameRng,
    pub uids: &'a mut UidAllocator,
    pub config: &'a GameConfig,
}

impl<'a> EffectContext<'a> {
    #[must_use]
    pub fn owner_id(&self) -> PlayerId {
        self.owner.id()
    }

    #[must_use]
    pub fn opponent_id(&self) -> PlayerId {
        self.opponent.id()
    }

    /// Draw `count` cards for the owner, reshuffling the owner's graveyard
    /// when the deck runs out. Returns how many were drawn.
    pub fn draw_for_owner(&mut self, count: usize) -> Result<usize, GameError> {
        let graveyard = self.board.graveyard_mut(self.owner.id())?;
        Ok(self.owner.draw_cards(count, self.deck, graveyard, self.rng))
    }
}

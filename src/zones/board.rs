//! The battlefield: three combat lanes and a graveyard per player, plus the
//! shared weather registry.
//!
//! Cards move between lanes and graveyards by value; a card is in exactly
//! one place at a time. Power changes never remove a card on their own:
//! callers run [`Board::cleanup_destroyed_units`] when they want units at
//! power <= 0 swept to the graveyard. [`Board::damage_row`] is the one bulk
//! operation that sweeps inline.
//!
//! Scans that pick a single card walk lanes Close, Ranged, Siege and cards
//! within a lane in play order; ties go to the first card found.
//!
//! ```
//! use rust_gwent::cards::{Card, Faction, Zone};
//! use rust_gwent::core::{CardUid, PlayerId};
//! use rust_gwent::zones::Board;
//!
//! let mut board = Board::new();
//! let p0 = PlayerId::new(0);
//!
//! board.add_card(p0, Card::unit(CardUid(1), "Archer", 4, Zone::Ranged, Faction::North)).unwrap();
//! board.add_card(p0, Card::unit(CardUid(2), "Knight", 6, Zone::Close, Faction::North)).unwrap();
//!
//! assert_eq!(board.player_power(p0, Zone::Ranged).unwrap(), 4);
//! assert_eq!(board.total_power(p0).unwrap(), 10);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::weather::{ActiveWeather, WeatherRegistry};
use crate::cards::{Card, CardKind, WeatherType, Zone};
use crate::core::{CardUid, GameError, PlayerId, PlayerMap};

/// One player's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    lanes: [Vec<Card>; 3],
    graveyard: Vec<Card>,
}

impl PlayerBoard {
    fn lane(&self, zone: Zone) -> &Vec<Card> {
        &self.lanes[slot(zone)]
    }

    fn lane_mut(&mut self, zone: Zone) -> &mut Vec<Card> {
        &mut self.lanes[slot(zone)]
    }

    /// Sweep cards at power <= 0 out of one lane, keeping survivor order.
    fn sweep(&mut self, lane: Zone) -> Vec<DestroyedUnit> {
        let cards = std::mem::take(self.lane_mut(lane));
        let (alive, dead): (Vec<_>, Vec<_>) = cards.into_iter().partition(|c| !c.is_destroyed());
        *self.lane_mut(lane) = alive;

        let mut reports = Vec::with_capacity(dead.len());
        for card in dead {
            reports.push(DestroyedUnit::of(&card, lane));
            self.graveyard.push(card);
        }
        reports
    }

    fn remove_at(&mut self, lane: Zone, index: usize) -> DestroyedUnit {
        let card = self.lane_mut(lane).remove(index);
        let report = DestroyedUnit::of(&card, lane);
        self.graveyard.push(card);
        report
    }
}

/// Lane a zone maps onto for storage. `Any` stores into Close.
fn slot(zone: Zone) -> usize {
    zone.deploy_lane().index().unwrap_or(0)
}

/// What a removal took off the board, for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyedUnit {
    pub uid: CardUid,
    pub name: String,
    pub power: i32,
    pub zone: Zone,
    pub was_hero: bool,
}

impl DestroyedUnit {
    fn of(card: &Card, zone: Zone) -> Self {
        Self {
            uid: card.uid(),
            name: card.name().to_string(),
            power: card.power(),
            zone,
            was_hero: card.is_hero_unit(),
        }
    }
}

/// Both players' sides and the active weather.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    sides: PlayerMap<PlayerBoard>,
    weather: WeatherRegistry,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sides: PlayerMap::with_default(),
            weather: WeatherRegistry::new(),
        }
    }

    fn side(&self, player: PlayerId) -> Result<&PlayerBoard, GameError> {
        self.sides.get(player).ok_or(GameError::InvalidPlayer(player))
    }

    fn side_mut(&mut self, player: PlayerId) -> Result<&mut PlayerBoard, GameError> {
        self.sides.get_mut(player).ok_or(GameError::InvalidPlayer(player))
    }

    // === Placement ===

    /// Put a card into play for `player`.
    ///
    /// Units and heroes go to the lane printed on the card (`Any` deploys to
    /// Close). Weather cards register with the weather registry. Ability
    /// cards have no board presence and go to the graveyard.
    pub fn add_card(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        self.side(player)?;
        match card.kind() {
            CardKind::Weather(_) => self.apply_weather(player, card),
            CardKind::Ability(_) => self.add_to_graveyard(player, card),
            CardKind::Unit(_) | CardKind::Hero(_) => {
                let lane = card.zone().deploy_lane();
                self.place_unit(player, lane, card)
            }
        }
    }

    /// Put a unit into a specific lane. A non-hero entering a lane under
    /// weather enters at power 1.
    pub fn place_unit(&mut self, player: PlayerId, lane: Zone, mut card: Card) -> Result<(), GameError> {
        let weathered = self.weather.weather_in(lane.deploy_lane()).is_some();
        let side = self.side_mut(player)?;
        if weathered && card.is_regular_unit() && card.power() > 1 {
            card.set_power(1);
        }
        debug!("{player} places {} ({}) in {}", card.name(), card.power(), lane.deploy_lane());
        side.lane_mut(lane).push(card);
        Ok(())
    }

    pub fn add_to_graveyard(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        self.side_mut(player)?.graveyard.push(card);
        Ok(())
    }

    /// Remove the first card in `zone`, if any. The card keeps its power.
    pub fn take_first_in_zone(&mut self, player: PlayerId, zone: Zone) -> Result<Option<Card>, GameError> {
        let side = self.side_mut(player)?;
        for &lane in zone.lanes() {
            let cards = side.lane_mut(lane);
            if !cards.is_empty() {
                return Ok(Some(cards.remove(0)));
            }
        }
        Ok(None)
    }

    // === Queries ===

    /// Cards in one lane, in play order. `Any` reads the Close lane.
    pub fn lane(&self, player: PlayerId, zone: Zone) -> Result<&[Card], GameError> {
        Ok(self.side(player)?.lane(zone))
    }

    /// Every card on `player`'s side with its lane, in scan order.
    pub fn units(&self, player: PlayerId) -> Result<impl Iterator<Item = (Zone, &Card)>, GameError> {
        let side = self.side(player)?;
        Ok(Zone::COMBAT
            .into_iter()
            .flat_map(move |lane| side.lane(lane).iter().map(move |card| (lane, card))))
    }

    pub fn unit_count(&self, player: PlayerId) -> Result<usize, GameError> {
        Ok(self.side(player)?.lanes.iter().map(Vec::len).sum())
    }

    /// Sum of current power in `zone` (all lanes for `Any`), saturating at
    /// the `i32` bounds. Cards awaiting cleanup still count.
    pub fn player_power(&self, player: PlayerId, zone: Zone) -> Result<i32, GameError> {
        let side = self.side(player)?;
        Ok(zone
            .lanes()
            .iter()
            .flat_map(|&lane| side.lane(lane).iter())
            .map(Card::power)
            .fold(0, i32::saturating_add))
    }

    pub fn total_power(&self, player: PlayerId) -> Result<i32, GameError> {
        self.player_power(player, Zone::Any)
    }

    pub fn has_units_in_zone(&self, player: PlayerId, zone: Zone) -> Result<bool, GameError> {
        let side = self.side(player)?;
        Ok(zone.lanes().iter().any(|&lane| !side.lane(lane).is_empty()))
    }

    /// Locate a card on either side.
    #[must_use]
    pub fn find_card(&self, uid: CardUid) -> Option<(PlayerId, Zone, &Card)> {
        PlayerId::both().find_map(|player| {
            self.sides[player].lanes.iter().zip(Zone::COMBAT).find_map(|(cards, lane)| {
                cards
                    .iter()
                    .find(|card| card.uid() == uid)
                    .map(|card| (player, lane, card))
            })
        })
    }

    /// Mutable access to a card on `player`'s side.
    pub fn card_mut(&mut self, player: PlayerId, uid: CardUid) -> Result<Option<&mut Card>, GameError> {
        Ok(self
            .side_mut(player)?
            .lanes
            .iter_mut()
            .flat_map(|cards| cards.iter_mut())
            .find(|card| card.uid() == uid))
    }

    /// Strongest card on `player`'s side at any power, heroes included. The
    /// earliest card in lane order wins ties.
    pub fn strongest_unit(&self, player: PlayerId) -> Result<Option<(Zone, CardUid)>, GameError> {
        let mut best: Option<(Zone, &Card)> = None;
        for (lane, card) in self.units(player)? {
            if best.map_or(true, |(_, b)| card.power() > b.power()) {
                best = Some((lane, card));
            }
        }
        Ok(best.map(|(lane, card)| (lane, card.uid())))
    }

    // === Graveyard ===

    pub fn graveyard(&self, player: PlayerId) -> Result<&[Card], GameError> {
        Ok(&self.side(player)?.graveyard)
    }

    pub fn graveyard_mut(&mut self, player: PlayerId) -> Result<&mut Vec<Card>, GameError> {
        Ok(&mut self.side_mut(player)?.graveyard)
    }

    /// Pull the most recent unit or hero out of the graveyard at base power.
    pub fn revive_last_unit(&mut self, player: PlayerId) -> Result<Option<Card>, GameError> {
        let graveyard = &mut self.side_mut(player)?.graveyard;
        let Some(position) = graveyard.iter().rposition(Card::is_board_unit) else {
            return Ok(None);
        };
        let mut card = graveyard.remove(position);
        card.reset_power();
        Ok(Some(card))
    }

    // === Removal ===

    /// Move cards at power <= 0 in `zone` (every lane for `Any`) to the
    /// graveyard.
    pub fn cleanup_destroyed_units(&mut self, player: PlayerId, zone: Zone) -> Result<Vec<DestroyedUnit>, GameError> {
        let side = self.side_mut(player)?;
        let mut destroyed = Vec::new();
        for &lane in zone.lanes() {
            destroyed.extend(side.sweep(lane));
        }
        Ok(destroyed)
    }

    /// Destroy `player`'s weakest non-hero unit.
    pub fn destroy_weakest_unit(&mut self, player: PlayerId) -> Result<Option<DestroyedUnit>, GameError> {
        let side = self.side_mut(player)?;
        let mut weakest: Option<(Zone, usize, i32)> = None;
        for lane in Zone::COMBAT {
            for (index, card) in side.lane(lane).iter().enumerate() {
                if card.is_hero_unit() {
                    continue;
                }
                if weakest.map_or(true, |(_, _, power)| card.power() < power) {
                    weakest = Some((lane, index, card.power()));
                }
            }
        }
        Ok(weakest.map(|(lane, index, _)| side.remove_at(lane, index)))
    }

    /// Destroy the strongest unit on the attacker's opponent's side.
    ///
    /// `exclude` keeps a specific card (the activating hero) out of the
    /// scan. Only cards with power > 0 qualify.
    pub fn destroy_strongest_enemy_unit(
        &mut self,
        attacker: PlayerId,
        exclude: Option<CardUid>,
    ) -> Result<Option<DestroyedUnit>, GameError> {
        self.side(attacker)?;
        let side = self.side_mut(attacker.opponent())?;
        let mut strongest: Option<(Zone, usize, i32)> = None;
        for lane in Zone::COMBAT {
            for (index, card) in side.lane(lane).iter().enumerate() {
                if card.power() <= 0 || Some(card.uid()) == exclude {
                    continue;
                }
                if strongest.map_or(true, |(_, _, power)| card.power() > power) {
                    strongest = Some((lane, index, card.power()));
                }
            }
        }
        Ok(strongest.map(|(lane, index, _)| side.remove_at(lane, index)))
    }

    /// Destroy every enemy card with power >= `threshold` (and > 0).
    pub fn destroy_units_at_or_above(
        &mut self,
        attacker: PlayerId,
        threshold: i32,
        exclude: Option<CardUid>,
    ) -> Result<Vec<DestroyedUnit>, GameError> {
        self.side(attacker)?;
        let side = self.side_mut(attacker.opponent())?;
        let mut destroyed = Vec::new();
        for lane in Zone::COMBAT {
            let cards = std::mem::take(side.lane_mut(lane));
            let (doomed, kept): (Vec<_>, Vec<_>) = cards.into_iter().partition(|card| {
                card.power() > 0 && card.power() >= threshold && Some(card.uid()) != exclude
            });
            *side.lane_mut(lane) = kept;
            for card in doomed {
                destroyed.push(DestroyedUnit::of(&card, lane));
                side.graveyard.push(card);
            }
        }
        Ok(destroyed)
    }

    // === Bulk power changes ===

    /// Add `amount` to every card in `zone` accepted by `filter`. Returns how
    /// many changed. The filter sees each card before it is boosted.
    pub fn boost_where(
        &mut self,
        player: PlayerId,
        zone: Zone,
        amount: i32,
        filter: impl Fn(&Card) -> bool,
    ) -> Result<usize, GameError> {
        let side = self.side_mut(player)?;
        let mut boosted = 0;
        for &lane in zone.lanes() {
            for card in side.lane_mut(lane).iter_mut() {
                if filter(&*card) {
                    card.boost(amount);
                    boosted += 1;
                }
            }
        }
        Ok(boosted)
    }

    /// Add `amount` to every non-hero unit in `zone`.
    pub fn boost_row(&mut self, player: PlayerId, zone: Zone, amount: i32) -> Result<usize, GameError> {
        self.boost_where(player, zone, amount, Card::is_regular_unit)
    }

    /// Add `amount` to every card in `zone`, heroes included.
    pub fn boost_all_in_row(&mut self, player: PlayerId, zone: Zone, amount: i32) -> Result<usize, GameError> {
        self.boost_where(player, zone, amount, |_| true)
    }

    /// Damage every card in `zone` and sweep the ones it destroys.
    pub fn damage_row(&mut self, player: PlayerId, zone: Zone, damage: i32) -> Result<Vec<DestroyedUnit>, GameError> {
        let side = self.side_mut(player)?;
        let mut destroyed = Vec::new();
        for &lane in zone.lanes() {
            for card in side.lane_mut(lane).iter_mut() {
                card.take_damage(damage);
            }
            destroyed.extend(side.sweep(lane));
        }
        Ok(destroyed)
    }

    /// Double the power of every card in `zone`, saturating at `i32::MAX`.
    pub fn double_row_power(&mut self, player: PlayerId, zone: Zone) -> Result<usize, GameError> {
        let side = self.side_mut(player)?;
        let mut doubled = 0;
        for &lane in zone.lanes() {
            for card in side.lane_mut(lane).iter_mut() {
                card.set_power(card.power().saturating_mul(2));
                doubled += 1;
            }
        }
        Ok(doubled)
    }

    // === Weather ===

    /// Bring a weather card into play for `owner`.
    ///
    /// Clear weather wipes every registration. Any other weather takes over
    /// its lanes and drops non-hero units there to power 1. Weather cards no
    /// longer covering a lane go to their owner's graveyard.
    pub fn apply_weather(&mut self, owner: PlayerId, card: Card) -> Result<(), GameError> {
        self.side(owner)?;
        let Some(profile) = card.weather_profile() else {
            warn!("{} is not a weather card; discarding", card.name());
            return self.add_to_graveyard(owner, card);
        };
        let weather_type = profile.weather_type;
        let lanes = profile.lanes();

        if weather_type.is_clear() {
            self.clear_weather();
            return self.add_to_graveyard(owner, card);
        }
        if lanes.is_empty() {
            warn!("{} affects no lane; discarding", card.name());
            return self.add_to_graveyard(owner, card);
        }

        for side in self.sides.values_mut() {
            for &lane in &lanes {
                for unit in side.lane_mut(lane).iter_mut() {
                    if unit.is_regular_unit() && unit.power() > 1 {
                        unit.set_power(1);
                    }
                }
            }
        }

        debug!("{weather_type} settles over {lanes:?}");
        let evicted = self.weather.register(card, owner, weather_type, lanes);
        self.bury_weather(evicted);
        Ok(())
    }

    /// Remove all weather and restore affected non-hero units to base power.
    /// Returns the number of registrations cleared.
    pub fn clear_weather(&mut self) -> usize {
        let lanes = self.weather.covered_lanes();
        let cleared = self.weather.clear();
        for side in self.sides.values_mut() {
            for &lane in &lanes {
                for unit in side.lane_mut(lane).iter_mut().filter(|c| c.is_regular_unit()) {
                    unit.reset_power();
                }
            }
        }
        let count = cleared.len();
        if count > 0 {
            debug!("cleared {count} weather effect(s)");
        }
        self.bury_weather(cleared);
        count
    }

    fn bury_weather(&mut self, entries: Vec<ActiveWeather>) {
        for entry in entries {
            if let Some(side) = self.sides.get_mut(entry.owner) {
                side.graveyard.push(entry.card);
            }
        }
    }

    #[must_use]
    pub fn weather(&self) -> &WeatherRegistry {
        &self.weather
    }

    #[must_use]
    pub fn weather_in(&self, zone: Zone) -> Option<WeatherType> {
        self.weather.weather_in(zone)
    }

    #[must_use]
    pub fn has_weather(&self, weather_type: WeatherType) -> bool {
        self.weather.has_weather(weather_type)
    }

    #[must_use]
    pub fn has_weather_in(&self, zone: Zone) -> bool {
        self.weather.weather_in(zone).is_some()
    }

    // === Round end ===

    /// Move every card in play to its owner's graveyard and clear weather.
    pub fn clear_board(&mut self) {
        let weather = self.weather.clear();
        for side in self.sides.values_mut() {
            for lane in 0..side.lanes.len() {
                let cards = std::mem::take(&mut side.lanes[lane]);
                side.graveyard.extend(cards);
            }
        }
        self.bury_weather(weather);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Faction, HeroAbility};

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn unit(uid: u32, power: i32, zone: Zone) -> Card {
        Card::unit(CardUid(uid), format!("Unit {uid}"), power, zone, Faction::North)
    }

    fn hero(uid: u32, power: i32, zone: Zone) -> Card {
        Card::hero(CardUid(uid), format!("Hero {uid}"), power, zone, Faction::Neutral, HeroAbility::Scorch, 0)
    }

    #[test]
    fn test_add_card_routes_by_kind() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, 5, Zone::Any)).unwrap();
        board
            .add_card(P0, Card::weather(CardUid(2), "Frost", WeatherType::BitingFrost, [Zone::Siege], 0))
            .unwrap();

        assert_eq!(board.lane(P0, Zone::Close).unwrap().len(), 1);
        assert!(board.has_weather_in(Zone::Siege));
        assert_eq!(board.unit_count(P0).unwrap(), 1);
    }

    #[test]
    fn test_invalid_player_rejected() {
        let mut board = Board::new();
        let result = board.add_card(PlayerId(2), unit(1, 5, Zone::Close));
        assert!(matches!(result, Err(GameError::InvalidPlayer(PlayerId(2)))));
        assert!(board.player_power(PlayerId(7), Zone::Close).is_err());
    }

    #[test]
    fn test_cleanup_preserves_survivor_order() {
        let mut board = Board::new();
        for (uid, power) in [(1, 3), (2, 0), (3, 4), (4, -1), (5, 2)] {
            board.place_unit(P0, Zone::Close, unit(uid, power, Zone::Close)).unwrap();
        }

        let destroyed = board.cleanup_destroyed_units(P0, Zone::Close).unwrap();

        assert_eq!(destroyed.len(), 2);
        let left: Vec<u32> = board.lane(P0, Zone::Close).unwrap().iter().map(|c| c.uid().raw()).collect();
        assert_eq!(left, vec![1, 3, 5]);
        assert_eq!(board.graveyard(P0).unwrap().len(), 2);
    }

    #[test]
    fn test_destroy_weakest_skips_heroes() {
        let mut board = Board::new();
        board.add_card(P1, hero(1, 1, Zone::Close)).unwrap();
        board.add_card(P1, unit(2, 4, Zone::Ranged)).unwrap();
        board.add_card(P1, unit(3, 4, Zone::Siege)).unwrap();

        let destroyed = board.destroy_weakest_unit(P1).unwrap().unwrap();

        assert_eq!(destroyed.uid, CardUid(2));
        assert_eq!(board.unit_count(P1).unwrap(), 2);
    }

    #[test]
    fn test_destroy_weakest_none_eligible() {
        let mut board = Board::new();
        board.add_card(P1, hero(1, 1, Zone::Close)).unwrap();
        assert!(board.destroy_weakest_unit(P1).unwrap().is_none());
    }

    #[test]
    fn test_destroy_strongest_excludes_and_requires_power() {
        let mut board = Board::new();
        board.add_card(P1, hero(1, 15, Zone::Close)).unwrap();
        board.add_card(P1, unit(2, 0, Zone::Ranged)).unwrap();
        board.add_card(P1, unit(3, 6, Zone::Siege)).unwrap();

        let destroyed = board.destroy_strongest_enemy_unit(P0, Some(CardUid(1))).unwrap().unwrap();
        assert_eq!(destroyed.uid, CardUid(3));
        assert_eq!(destroyed.zone, Zone::Siege);
        assert!(!destroyed.was_hero);

        // Only the excluded hero and a zero-power card remain.
        assert!(board.destroy_strongest_enemy_unit(P0, Some(CardUid(1))).unwrap().is_none());
    }

    #[test]
    fn test_destroy_at_or_above() {
        let mut board = Board::new();
        for (uid, power, zone) in [(1, 8, Zone::Close), (2, 3, Zone::Close), (3, 9, Zone::Siege)] {
            board.add_card(P1, unit(uid, power, zone)).unwrap();
        }

        let destroyed = board.destroy_units_at_or_above(P0, 8, None).unwrap();

        assert_eq!(destroyed.len(), 2);
        assert_eq!(board.total_power(P1).unwrap(), 3);
        assert_eq!(board.graveyard(P1).unwrap().len(), 2);
    }

    #[test]
    fn test_row_operations() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, 3, Zone::Close)).unwrap();
        board.add_card(P0, hero(2, 10, Zone::Close)).unwrap();

        assert_eq!(board.boost_row(P0, Zone::Close, 2).unwrap(), 1);
        assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 15);

        assert_eq!(board.double_row_power(P0, Zone::Close).unwrap(), 2);
        assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 30);

        let destroyed = board.damage_row(P0, Zone::Close, 10).unwrap();
        assert_eq!(destroyed.len(), 1);
        assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 10);
    }

    #[test]
    fn test_double_row_saturates() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, i32::MAX / 2 + 1, Zone::Siege)).unwrap();
        board.add_card(P0, unit(2, 5, Zone::Close)).unwrap();

        assert_eq!(board.double_row_power(P0, Zone::Siege).unwrap(), 1);

        let (_, _, card) = board.find_card(CardUid(1)).unwrap();
        assert_eq!(card.power(), i32::MAX);
        assert_eq!(board.total_power(P0).unwrap(), i32::MAX);
    }

    #[test]
    fn test_frost_then_clear_restores_base() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, 6, Zone::Close)).unwrap();
        board.add_card(P0, hero(2, 10, Zone::Close)).unwrap();

        board
            .apply_weather(P1, Card::weather(CardUid(3), "Frost", WeatherType::BitingFrost, [Zone::Close], 0))
            .unwrap();
        assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 11);

        assert_eq!(board.clear_weather(), 1);
        assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 16);
        assert_eq!(board.graveyard(P1).unwrap().len(), 1);
    }

    #[test]
    fn test_unit_entering_weather_enters_at_one() {
        let mut board = Board::new();
        board
            .apply_weather(P0, Card::weather(CardUid(1), "Rain", WeatherType::TorrentialRain, [Zone::Siege], 0))
            .unwrap();
        board.add_card(P1, unit(2, 8, Zone::Siege)).unwrap();
        board.add_card(P1, hero(3, 8, Zone::Siege)).unwrap();

        assert_eq!(board.player_power(P1, Zone::Siege).unwrap(), 9);
    }

    #[test]
    fn test_clear_weather_card() {
        let mut board = Board::new();
        board
            .apply_weather(P0, Card::weather(CardUid(1), "Fog", WeatherType::ImpenetrableFog, [Zone::Ranged], 0))
            .unwrap();
        board
            .apply_weather(P1, Card::weather(CardUid(2), "Sun", WeatherType::ClearWeather, [Zone::Any], 0))
            .unwrap();

        assert!(board.weather().is_empty());
        assert_eq!(board.graveyard(P0).unwrap().len(), 1);
        assert_eq!(board.graveyard(P1).unwrap().len(), 1);
    }

    #[test]
    fn test_revive_skips_non_units() {
        let mut board = Board::new();
        board.add_to_graveyard(P0, unit(1, 6, Zone::Close)).unwrap();
        board
            .add_to_graveyard(P0, Card::weather(CardUid(2), "Frost", WeatherType::BitingFrost, [Zone::Close], 0))
            .unwrap();
        board.graveyard_mut(P0).unwrap()[0].set_power(-2);

        let revived = board.revive_last_unit(P0).unwrap().unwrap();

        assert_eq!(revived.uid(), CardUid(1));
        assert_eq!(revived.power(), 6);
        assert_eq!(board.graveyard(P0).unwrap().len(), 1);
    }

    #[test]
    fn test_clear_board() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, 6, Zone::Close)).unwrap();
        board.add_card(P1, unit(2, 4, Zone::Ranged)).unwrap();
        board
            .apply_weather(P0, Card::weather(CardUid(3), "Frost", WeatherType::BitingFrost, [Zone::Close], 0))
            .unwrap();

        board.clear_board();

        assert_eq!(board.unit_count(P0).unwrap() + board.unit_count(P1).unwrap(), 0);
        assert!(board.weather().is_empty());
        assert_eq!(board.graveyard(P0).unwrap().len(), 2);
        assert_eq!(board.graveyard(P1).unwrap().len(), 1);
    }

    #[test]
    fn test_find_and_take_first() {
        let mut board = Board::new();
        board.add_card(P1, unit(1, 6, Zone::Ranged)).unwrap();
        board.add_card(P1, unit(2, 9, Zone::Ranged)).unwrap();

        let (owner, lane, card) = board.find_card(CardUid(2)).unwrap();
        assert_eq!((owner, lane, card.power()), (P1, Zone::Ranged, 9));
        assert_eq!(board.strongest_unit(P1).unwrap(), Some((Zone::Ranged, CardUid(2))));

        let first = board.take_first_in_zone(P1, Zone::Ranged).unwrap().unwrap();
        assert_eq!(first.uid(), CardUid(1));
        assert!(board.take_first_in_zone(P0, Zone::Any).unwrap().is_none());
    }

    #[test]
    fn test_strongest_unit_at_non_positive_power() {
        let mut board = Board::new();
        board.add_card(P0, unit(1, 2, Zone::Close)).unwrap();
        board.add_card(P0, unit(2, 0, Zone::Ranged)).unwrap();
        board.add_card(P0, unit(3, 0, Zone::Siege)).unwrap();
        board.card_mut(P0, CardUid(1)).unwrap().unwrap().take_damage(3);

        assert_eq!(board.strongest_unit(P0).unwrap(), Some((Zone::Ranged, CardUid(2))));
        assert!(board.strongest_unit(P1).unwrap().is_none());
    }
}

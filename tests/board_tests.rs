//! Board and weather tests.
//!
//! These tests cover lane storage, power aggregation, cleanup and the
//! per-lane weather state machine:
//! - Weather reduces non-hero units to 1 and clearing restores base power
//! - Last writer wins per lane; no stacking
//! - Replaced and cleared weather cards return to their owner's graveyard

use rust_gwent::cards::{Card, Faction, HeroAbility, WeatherType, Zone};
use rust_gwent::core::{CardUid, GameError, PlayerId};
use rust_gwent::zones::Board;

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn unit(uid: u32, power: i32, zone: Zone) -> Card {
    Card::unit(CardUid(uid), format!("Unit {uid}"), power, zone, Faction::North)
}

fn weather(uid: u32, kind: WeatherType, zones: &[Zone]) -> Card {
    Card::weather(CardUid(uid), kind.to_string(), kind, zones.iter().copied(), 0)
}

/// Test frost reduces a 6-power unit to 1 and clearing restores 6.
#[test]
fn test_frost_reduce_and_restore() {
    let mut board = Board::new();
    board.add_card(P0, unit(1, 6, Zone::Close)).unwrap();

    board.add_card(P1, weather(2, WeatherType::BitingFrost, &[Zone::Close])).unwrap();
    assert_eq!(board.lane(P0, Zone::Close).unwrap()[0].power(), 1);
    assert_eq!(board.weather_in(Zone::Close), Some(WeatherType::BitingFrost));

    board.clear_weather();
    assert_eq!(board.lane(P0, Zone::Close).unwrap()[0].power(), 6);
    assert!(!board.has_weather_in(Zone::Close));
}

/// Test weather affects both players' units and spares heroes.
#[test]
fn test_weather_hits_both_sides_not_heroes() {
    let mut board = Board::new();
    board.add_card(P0, unit(1, 6, Zone::Siege)).unwrap();
    board.add_card(P1, unit(2, 8, Zone::Siege)).unwrap();
    let hero = Card::hero(CardUid(3), "Geralt", 15, Zone::Siege, Faction::Neutral, HeroAbility::Scorch, 0);
    board.add_card(P1, hero).unwrap();

    board.add_card(P0, weather(4, WeatherType::TorrentialRain, &[Zone::Siege])).unwrap();

    assert_eq!(board.player_power(P0, Zone::Siege).unwrap(), 1);
    assert_eq!(board.player_power(P1, Zone::Siege).unwrap(), 16);
}

/// Test a hero-flagged unit ignores weather.
#[test]
fn test_hero_unit_ignores_weather() {
    let mut board = Board::new();
    board
        .add_card(P0, Card::unit(CardUid(1), "Isengrim", 10, Zone::Close, Faction::Scoiatael).as_hero_unit())
        .unwrap();
    board.add_card(P1, weather(2, WeatherType::BitingFrost, &[Zone::Close])).unwrap();

    assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 10);
}

/// Test weather with zone ANY covers every lane.
#[test]
fn test_any_weather_covers_all_lanes() {
    let mut board = Board::new();
    for (uid, zone) in [(1, Zone::Close), (2, Zone::Ranged), (3, Zone::Siege)] {
        board.add_card(P0, unit(uid, 5, zone)).unwrap();
    }

    board.add_card(P1, weather(4, WeatherType::DragonDream, &[Zone::Any])).unwrap();

    assert_eq!(board.total_power(P0).unwrap(), 3);
    for lane in Zone::COMBAT {
        assert_eq!(board.weather_in(lane), Some(WeatherType::DragonDream));
    }
}

/// Test re-applying weather to a lane replaces the prior registration.
#[test]
fn test_weather_replacement_no_stacking() {
    let mut board = Board::new();
    board.add_card(P0, weather(1, WeatherType::BitingFrost, &[Zone::Close])).unwrap();
    board.add_card(P1, weather(2, WeatherType::SkeligeStorm, &[Zone::Close])).unwrap();

    assert_eq!(board.weather_in(Zone::Close), Some(WeatherType::SkeligeStorm));
    assert!(!board.has_weather(WeatherType::BitingFrost));
    assert_eq!(board.weather().iter().count(), 1);
    // The replaced frost card is back with its owner.
    assert_eq!(board.graveyard(P0).unwrap()[0].name(), "BITING_FROST");
}

/// Test partial replacement keeps the remaining lanes of older weather.
#[test]
fn test_partial_weather_replacement() {
    let mut board = Board::new();
    board.add_card(P0, unit(1, 6, Zone::Ranged)).unwrap();
    board.add_card(P0, weather(2, WeatherType::SkeligeStorm, &[Zone::Ranged, Zone::Siege])).unwrap();
    board.add_card(P1, weather(3, WeatherType::TorrentialRain, &[Zone::Siege])).unwrap();

    assert_eq!(board.weather_in(Zone::Ranged), Some(WeatherType::SkeligeStorm));
    assert_eq!(board.weather_in(Zone::Siege), Some(WeatherType::TorrentialRain));
    assert!(board.graveyard(P0).unwrap().is_empty());

    assert_eq!(board.clear_weather(), 2);
    assert_eq!(board.player_power(P0, Zone::Ranged).unwrap(), 6);
    assert_eq!(board.graveyard(P0).unwrap().len(), 1);
    assert_eq!(board.graveyard(P1).unwrap().len(), 1);
}

/// Test default weather lanes when card data lists none.
#[test]
fn test_weather_default_lane_from_loader() {
    let json = r#"[{"type": "WEATHER", "name": "Fog", "faction": "NEUTRAL", "zone": "ANY",
                    "weatherType": "IMPENETRABLE_FOG"}]"#;
    let (cards, _) = rust_gwent::cards::parse_cards(json, &mut Default::default()).unwrap();
    let mut board = Board::new();

    board.add_card(P0, cards.into_iter().next().unwrap()).unwrap();

    assert!(board.has_weather_in(Zone::Ranged));
    assert!(!board.has_weather_in(Zone::Close));
}

/// Test power can include destroyed cards until cleanup runs.
#[test]
fn test_power_counts_until_cleanup() {
    let mut board = Board::new();
    board.add_card(P0, unit(1, 4, Zone::Close)).unwrap();
    board.add_card(P0, unit(2, 3, Zone::Close)).unwrap();

    let uid = CardUid(2);
    board.card_mut(P0, uid).unwrap().unwrap().take_damage(5);
    assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 2);

    let destroyed = board.cleanup_destroyed_units(P0, Zone::Close).unwrap();
    assert_eq!(destroyed.len(), 1);
    assert_eq!(destroyed[0].uid, uid);
    assert_eq!(board.player_power(P0, Zone::Close).unwrap(), 4);
}

/// Test every board operation rejects an unknown seat.
#[test]
fn test_invalid_seat_is_rejected() {
    let mut board = Board::new();
    let ghost = PlayerId(5);

    assert!(matches!(board.add_card(ghost, unit(1, 1, Zone::Close)), Err(GameError::InvalidPlayer(_))));
    assert!(board.damage_row(ghost, Zone::Close, 1).is_err());
    assert!(board.boost_row(ghost, Zone::Close, 1).is_err());
    assert!(board.double_row_power(ghost, Zone::Close).is_err());
    assert!(board.destroy_weakest_unit(ghost).is_err());
    assert!(board.destroy_strongest_enemy_unit(ghost, None).is_err());
    assert!(board.graveyard(ghost).is_err());
}

/// Test clearing the board moves cards to their own graveyards.
#[test]
fn test_clear_board_keeps_ownership() {
    let mut board = Board::new();
    board.add_card(P0, unit(1, 4, Zone::Close)).unwrap();
    board.add_card(P0, unit(2, 4, Zone::Siege)).unwrap();
    board.add_card(P1, unit(3, 4, Zone::Ranged)).unwrap();
    board.add_card(P1, weather(4, WeatherType::BitingFrost, &[Zone::Close])).unwrap();

    board.clear_board();

    assert_eq!(board.graveyard(P0).unwrap().len(), 2);
    assert_eq!(board.graveyard(P1).unwrap().len(), 2);
    assert_eq!(board.total_power(P0).unwrap(), 0);
    assert!(board.weather().is_empty());
}

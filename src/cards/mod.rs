//! Card system: vocabulary, the `Card` tagged union, and the data loader.
//!
//! ## Key Types
//!
//! - `Zone`, `Faction`, `CardType`: where and whose a card is
//! - `DeployEffect`, `HeroAbility`, `AbilityEffect`, `WeatherType`: effect tags
//! - `Card`: shared identity and power plus a `CardKind` profile
//! - `LoadReport`: result counts from [`parse_cards`]
//!
//! Effect resolution for each variant lives in `crate::effects`.

pub mod attributes;
pub mod definition;
pub mod loader;

pub use attributes::{AbilityEffect, CardType, DeployEffect, Faction, HeroAbility, WeatherType, Zone};
pub use definition::{
    AbilityProfile, Card, CardKind, HeroProfile, UnitProfile, WeatherProfile, ZoneList,
};
pub use loader::{parse_cards, LoadReport};

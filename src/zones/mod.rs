//! Board state: per-player lanes and graveyards, and active weather.
//!
//! ## Key Types
//!
//! - `Board`: both sides of the table plus the weather registry
//! - `DestroyedUnit`: what a removal took off the board
//! - `WeatherRegistry`: at most one weather registration per lane

pub mod board;
pub mod weather;

pub use board::{Board, DestroyedUnit, PlayerBoard};
pub use weather::{ActiveWeather, WeatherRegistry};

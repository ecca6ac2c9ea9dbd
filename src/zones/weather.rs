//! Per-lane weather registry.
//!
//! At most one weather registration covers a lane at any time. Registering
//! weather over lanes that already carry one takes those lanes away from the
//! previous registration (last writer wins); a registration left covering
//! no lane is evicted and its card handed back to the caller.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, WeatherType, Zone, ZoneList};
use crate::core::PlayerId;

/// A weather card in play and the lanes it still covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWeather {
    pub card: Card,
    pub owner: PlayerId,
    pub weather_type: WeatherType,
    pub lanes: ZoneList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRegistry {
    active: Vec<ActiveWeather>,
}

impl WeatherRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `card` over `lanes`. Returns registrations evicted because
    /// every lane they covered was taken over.
    pub fn register(
        &mut self,
        card: Card,
        owner: PlayerId,
        weather_type: WeatherType,
        lanes: ZoneList,
    ) -> Vec<ActiveWeather> {
        for entry in &mut self.active {
            entry.lanes.retain(|lane| !lanes.contains(lane));
        }
        let (kept, evicted): (Vec<_>, Vec<_>) =
            self.active.drain(..).partition(|entry| !entry.lanes.is_empty());
        self.active = kept;
        self.active.push(ActiveWeather {
            card,
            owner,
            weather_type,
            lanes,
        });
        evicted
    }

    /// Remove every registration.
    pub fn clear(&mut self) -> Vec<ActiveWeather> {
        std::mem::take(&mut self.active)
    }

    /// The weather covering `lane`, if any. `Any` asks about all lanes and
    /// answers with the first one found.
    #[must_use]
    pub fn weather_in(&self, lane: Zone) -> Option<WeatherType> {
        lane.lanes().iter().find_map(|&z| {
            self.active
                .iter()
                .find(|entry| entry.lanes.contains(&z))
                .map(|entry| entry.weather_type)
        })
    }

    #[must_use]
    pub fn has_weather(&self, weather_type: WeatherType) -> bool {
        self.active.iter().any(|entry| entry.weather_type == weather_type)
    }

    /// Lanes currently under some weather, in board order.
    #[must_use]
    pub fn covered_lanes(&self) -> ZoneList {
        Zone::COMBAT
            .iter()
            .copied()
            .filter(|lane| self.active.iter().any(|entry| entry.lanes.contains(lane)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveWeather> {
        self.active.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

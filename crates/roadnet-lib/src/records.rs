//! Road segment records handed to the graph builder by the data source.

use serde::{Deserialize, Serialize};

use crate::geo::Vertex;

/// Speed assumed when a record has no usable `maxspeed` attribute (km/h).
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Road class used when a record carries no `fclass` tag.
pub const DEFAULT_ROAD_CLASS: &str = "unknown";

/// Name used when a record carries no `name` tag.
pub const DEFAULT_ROAD_NAME: &str = "Unnamed";

/// Raw `maxspeed` attribute as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxSpeed {
    Number(f64),
    Text(String),
}

impl MaxSpeed {
    /// Resolve the attribute to km/h.
    ///
    /// Text values use their first whitespace-separated token (`"60 mph"`
    /// yields `60`). Anything unparseable resolves to [`DEFAULT_SPEED_KMH`].
    pub fn kmh(&self) -> f64 {
        match self {
            MaxSpeed::Number(value) => *value,
            MaxSpeed::Text(text) => {
                let parsed = text
                    .split_whitespace()
                    .next()
                    .and_then(|token| token.parse::<f64>().ok());
                match parsed {
                    Some(value) => value,
                    None => {
                        tracing::trace!(maxspeed = %text, "unparseable maxspeed, using default");
                        DEFAULT_SPEED_KMH
                    }
                }
            }
        }
    }
}

impl From<f64> for MaxSpeed {
    fn from(value: f64) -> Self {
        MaxSpeed::Number(value)
    }
}

impl From<&str> for MaxSpeed {
    fn from(value: &str) -> Self {
        MaxSpeed::Text(value.to_string())
    }
}

/// One road polyline with its optional attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    /// Ordered `(lon, lat)` points along the road.
    pub points: Vec<Vertex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxspeed: Option<MaxSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oneway: Option<String>,
}

impl RoadRecord {
    /// Create a record from `(lon, lat)` pairs with no attributes.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            points: points.into_iter().map(Vertex::from).collect(),
            ..Self::default()
        }
    }

    pub fn with_maxspeed(mut self, maxspeed: impl Into<MaxSpeed>) -> Self {
        self.maxspeed = Some(maxspeed.into());
        self
    }

    pub fn with_road_class(mut self, road_class: impl Into<String>) -> Self {
        self.road_class = Some(road_class.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_oneway(mut self, oneway: impl Into<String>) -> Self {
        self.oneway = Some(oneway.into());
        self
    }

    /// Effective speed in km/h after defaulting.
    pub fn speed_kmh(&self) -> f64 {
        self.maxspeed
            .as_ref()
            .map(MaxSpeed::kmh)
            .unwrap_or(DEFAULT_SPEED_KMH)
    }

    pub fn road_class(&self) -> &str {
        self.road_class.as_deref().unwrap_or(DEFAULT_ROAD_CLASS)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ROAD_NAME)
    }

    pub fn oneway_tag(&self) -> &str {
        self.oneway.as_deref().unwrap_or("no")
    }

    /// Only the literal `"yes"` marks a road as one-way.
    pub fn is_oneway(&self) -> bool {
        self.oneway_tag() == "yes"
    }
}

/// Travel time in minutes for `distance_km` at `speed_kmh`.
///
/// Non-positive (or NaN) speeds yield an infinite travel time.
pub fn travel_time_minutes(distance_km: f64, speed_kmh: f64) -> f64 {
    if speed_kmh > 0.0 {
        distance_km / speed_kmh * 60.0
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_defaults_when_absent() {
        assert_eq!(RoadRecord::new([(0.0, 0.0)]).speed_kmh(), DEFAULT_SPEED_KMH);
    }

    #[test]
    fn numeric_speed_is_used_verbatim() {
        let record = RoadRecord::default().with_maxspeed(80.0);
        assert_eq!(record.speed_kmh(), 80.0);
    }

    #[test]
    fn text_speed_uses_leading_token() {
        assert_eq!(MaxSpeed::from("60 mph").kmh(), 60.0);
        assert_eq!(MaxSpeed::from("  90").kmh(), 90.0);
        assert_eq!(MaxSpeed::from("30.5 km/h").kmh(), 30.5);
    }

    #[test]
    fn malformed_text_speed_falls_back() {
        assert_eq!(MaxSpeed::from("fast").kmh(), DEFAULT_SPEED_KMH);
        assert_eq!(MaxSpeed::from("").kmh(), DEFAULT_SPEED_KMH);
        assert_eq!(MaxSpeed::from("mph 60").kmh(), DEFAULT_SPEED_KMH);
    }

    #[test]
    fn attribute_defaults() {
        let record = RoadRecord::default();
        assert_eq!(record.road_class(), "unknown");
        assert_eq!(record.name(), "Unnamed");
        assert_eq!(record.oneway_tag(), "no");
        assert!(!record.is_oneway());
    }

    #[test]
    fn only_literal_yes_is_oneway() {
        assert!(RoadRecord::default().with_oneway("yes").is_oneway());
        assert!(!RoadRecord::default().with_oneway("Yes").is_oneway());
        assert!(!RoadRecord::default().with_oneway("true").is_oneway());
        assert!(!RoadRecord::default().with_oneway("F").is_oneway());
    }

    #[test]
    fn travel_time() {
        assert_eq!(travel_time_minutes(50.0, 50.0), 60.0);
        assert!(travel_time_minutes(10.0, 0.0).is_infinite());
        assert!(travel_time_minutes(10.0, -5.0).is_infinite());
        assert!(travel_time_minutes(10.0, f64::NAN).is_infinite());
    }
}

//! Coordinates, vertex identity, and great-circle distance.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for every distance computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A graph vertex identified by its exact `(longitude, latitude)` pair.
///
/// Two vertices are equal only when both components are bit-for-bit equal.
/// There is no tolerance or snapping, so `0.0` and `-0.0` are distinct
/// vertices. The ordering is lexicographic on `(lon, lat)` using
/// [`f64::total_cmp`], which agrees with the bitwise equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    lon: f64,
    lat: f64,
}

impl Vertex {
    /// Create a vertex from longitude and latitude in degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Coordinates as `[lat, lon]`, the order map consumers expect.
    pub fn as_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Coordinates as `[lon, lat]`, the GeoJSON position order.
    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        haversine_km(*self, *other)
    }

    /// Squared Euclidean distance in raw degree space.
    ///
    /// Used only by the nearest-node locator; this is not a geographic distance.
    pub(crate) fn planar_distance_sq(&self, lon: f64, lat: f64) -> f64 {
        let dx = self.lon - lon;
        let dy = self.lat - lat;
        dx * dx + dy * dy
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.lon.to_bits() == other.lon.to_bits() && self.lat.to_bits() == other.lat.to_bits()
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lon.to_bits().hash(state);
        self.lat.to_bits().hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lon
            .total_cmp(&other.lon)
            .then_with(|| self.lat.total_cmp(&other.lat))
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

/// Great-circle distance between two vertices using the haversine formula.
///
/// Defined for every finite input, including antipodal points.
pub fn haversine_km(a: Vertex, b: Vertex) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

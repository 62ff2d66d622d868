use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// `[lat, lng]` pair, the shape Leaflet accepts for a LatLng.
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// A point of interest as stored in `locations.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Straight line between two consecutive locations of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl RouteSegment {
    pub fn lat_lngs(&self) -> [[f64; 2]; 2] {
        [self.start.as_lat_lng(), self.end.as_lat_lng()]
    }
}

/// Visible map region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: f64,
}

//! Viewport defaults.

use crate::models::{Coordinate, Viewport};
use crate::route::Route;

/// Used when there is no location to center on.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 42.3427532432473,
    longitude: -71.09707496510488,
};

pub const DEFAULT_ZOOM: f64 = 20.0;

/// Highest zoom the OSM tile servers render natively; above it tiles are upscaled.
pub const MAX_NATIVE_ZOOM: f64 = 19.0;

/// Zoom used when flying to a location.
pub const FOCUS_ZOOM: f64 = DEFAULT_ZOOM;

/// Viewport shown at load: the location under the cursor's start position,
/// or the fixed default center for an empty route.
pub fn initial_viewport(route: &Route) -> Viewport {
    let center = route
        .get(0)
        .map(|loc| loc.coordinate())
        .unwrap_or(DEFAULT_CENTER);
    Viewport {
        center,
        zoom: DEFAULT_ZOOM,
    }
}

use crate::models::{Location, RouteSegment};

/// URL schemes that are already loadable and must not be prefixed.
const ABSOLUTE_PREFIXES: [&str; 3] = ["http://", "https://", "data:"];

/// Locations sorted ascending by id.
///
/// The sort is stable: locations sharing an id keep their input order.
/// That is a property of this implementation, not part of the contract.
pub fn ordered_sequence(locations: &[Location]) -> Vec<Location> {
    let mut ordered = locations.to_vec();
    ordered.sort_by_key(|loc| loc.id);
    ordered
}

/// One segment per adjacent pair; segment k joins `ordered[k]` and `ordered[k + 1]`.
pub fn route_segments(ordered: &[Location]) -> Vec<RouteSegment> {
    ordered
        .windows(2)
        .map(|pair| RouteSegment {
            start: pair[0].coordinate(),
            end: pair[1].coordinate(),
        })
        .collect()
}

/// Join a single image reference onto `base_path`.
///
/// An empty base yields a root-relative path. References that already start
/// with the base, and absolute URLs, come back unchanged.
pub fn resolve_image_path(image: &str, base_path: &str) -> String {
    if ABSOLUTE_PREFIXES.iter().any(|p| image.starts_with(p)) {
        return image.to_string();
    }
    let base = base_path.trim_end_matches('/');
    if !base.is_empty() {
        if let Some(rest) = image.strip_prefix(base) {
            if rest.starts_with('/') {
                return image.to_string();
            }
        }
    }
    format!("{}/{}", base, image.trim_start_matches('/'))
}

/// Copy of `location` with every image resolved against `base_path`.
pub fn resolve_image_paths(location: &Location, base_path: &str) -> Location {
    Location {
        images: location
            .images
            .iter()
            .map(|img| resolve_image_path(img, base_path))
            .collect(),
        ..location.clone()
    }
}

/// Display geometry derived from a dataset: ordered locations with loadable
/// image paths, and the segments of the connecting line.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub locations: Vec<Location>,
    pub segments: Vec<RouteSegment>,
}

impl Route {
    pub fn build(locations: &[Location], base_path: &str) -> Self {
        let locations: Vec<Location> = ordered_sequence(locations)
            .iter()
            .map(|loc| resolve_image_paths(loc, base_path))
            .collect();
        let segments = route_segments(&locations);
        Route {
            locations,
            segments,
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }
}

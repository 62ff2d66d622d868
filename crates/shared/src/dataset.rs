use thiserror::Error;

use crate::models::Location;

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid locations data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("location {id}: latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { id: i64, value: f64 },
    #[error("location {id}: longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { id: i64, value: f64 },
}

/// Parse and validate a `locations.json` document.
///
/// The whole dataset is rejected on the first malformed record; no partial
/// list is ever returned. Duplicate identifiers are accepted.
pub fn parse_locations(json: &str) -> Result<Vec<Location>, DatasetError> {
    let locations: Vec<Location> = serde_json::from_str(json)?;
    for loc in &locations {
        validate_location(loc)?;
    }
    Ok(locations)
}

pub fn validate_location(loc: &Location) -> Result<(), DatasetError> {
    // RangeInclusive::contains is false for NaN, so non-finite values fail here too
    if !LATITUDE_RANGE.contains(&loc.latitude) {
        return Err(DatasetError::LatitudeOutOfRange {
            id: loc.id,
            value: loc.latitude,
        });
    }
    if !LONGITUDE_RANGE.contains(&loc.longitude) {
        return Err(DatasetError::LongitudeOutOfRange {
            id: loc.id,
            value: loc.longitude,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dataset() {
        let json = r#"[
            {"id":2,"latitude":42.34,"longitude":-71.09,"title":"B","description":"b","images":["images/b.jpg"]},
            {"id":1,"latitude":42.33,"longitude":-71.08,"title":"A","description":"a","images":[]}
        ]"#;
        let locs = parse_locations(json).unwrap();
        assert_eq!(locs.len(), 2);
        // parsing does not reorder
        assert_eq!(locs[0].id, 2);
        assert_eq!(locs[0].images, vec!["images/b.jpg"]);
    }

    #[test]
    fn test_parse_empty_dataset() {
        assert!(parse_locations("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_field_rejects_dataset() {
        let json = r#"[{"id":1,"latitude":42.0,"title":"A","description":"a"}]"#;
        let err = parse_locations(json).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn test_non_numeric_id_rejects_dataset() {
        let json = r#"[{"id":"one","latitude":42.0,"longitude":-71.0,"title":"A","description":"a"}]"#;
        assert!(matches!(
            parse_locations(json),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_latitude_out_of_range_rejects_dataset() {
        let json = r#"[
            {"id":1,"latitude":42.0,"longitude":-71.0,"title":"A","description":"a"},
            {"id":9,"latitude":91.5,"longitude":-71.0,"title":"B","description":"b"}
        ]"#;
        match parse_locations(json) {
            Err(DatasetError::LatitudeOutOfRange { id, value }) => {
                assert_eq!(id, 9);
                assert!((value - 91.5).abs() < 1e-9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_longitude_out_of_range_rejects_dataset() {
        let json = r#"[{"id":4,"latitude":0.0,"longitude":-180.5,"title":"A","description":"a"}]"#;
        let err = parse_locations(json).unwrap_err();
        assert!(matches!(err, DatasetError::LongitudeOutOfRange { id: 4, .. }));
        assert_eq!(
            err.to_string(),
            "location 4: longitude -180.5 is outside [-180, 180]"
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let json = r#"[{"id":1,"latitude":-90.0,"longitude":180.0,"title":"Pole","description":""}]"#;
        assert_eq!(parse_locations(json).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let json = r#"[
            {"id":1,"latitude":1.0,"longitude":1.0,"title":"A","description":""},
            {"id":1,"latitude":2.0,"longitude":2.0,"title":"B","description":""}
        ]"#;
        assert_eq!(parse_locations(json).unwrap().len(), 2);
    }
}

use std::path::{Path, PathBuf};

use waymark_shared::dataset;
use waymark_shared::models::Location;

pub const LOCATIONS_FILE: &str = "locations.json";

pub struct Assets {
    pub locations: Vec<Location>,
}

impl Assets {
    /// Read and validate `locations.json`. Any malformed record fails the load.
    pub fn load(assets_dir: &Path) -> Result<Self, String> {
        let locations_path = assets_dir.join(LOCATIONS_FILE);

        let data = std::fs::read_to_string(&locations_path)
            .map_err(|e| format!("Failed to read {}: {}", locations_path.display(), e))?;
        let locations = dataset::parse_locations(&data)
            .map_err(|e| format!("Failed to parse {}: {}", LOCATIONS_FILE, e))?;

        tracing::info!(locations = locations.len(), "Loaded locations");

        let assets = Assets { locations };
        for missing in assets.missing_images(assets_dir) {
            tracing::warn!(path = %missing.display(), "Referenced image not found");
        }
        Ok(assets)
    }

    /// Local image files referenced by the dataset that don't exist on disk.
    /// Remote URLs are not checked.
    pub fn missing_images(&self, assets_dir: &Path) -> Vec<PathBuf> {
        self.locations
            .iter()
            .flat_map(|loc| loc.images.iter())
            .filter(|img| !img.contains("://") && !img.starts_with("data:"))
            .map(|img| assets_dir.join(img.trim_start_matches('/')))
            .filter(|path| !path.is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_locations(dir: &Path, json: &str) {
        std::fs::write(dir.join(LOCATIONS_FILE), json).unwrap();
    }

    #[test]
    fn test_load_valid_locations() {
        let dir = tempfile::tempdir().unwrap();
        write_locations(
            dir.path(),
            r#"[{"id":1,"latitude":42.0,"longitude":-71.0,"title":"A","description":"a"}]"#,
        );
        let assets = Assets::load(dir.path()).unwrap();
        assert_eq!(assets.locations.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Assets::load(dir.path()).err().unwrap();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn test_load_rejects_invalid_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_locations(
            dir.path(),
            r#"[{"id":1,"latitude":142.0,"longitude":-71.0,"title":"A","description":"a"}]"#,
        );
        let err = Assets::load(dir.path()).err().unwrap();
        assert!(err.contains("latitude 142"));
    }

    #[test]
    fn test_missing_images_reports_only_absent_local_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/here.jpg"), b"jpg").unwrap();
        write_locations(
            dir.path(),
            r#"[{"id":1,"latitude":42.0,"longitude":-71.0,"title":"A","description":"a",
                 "images":["images/here.jpg","/images/gone.jpg","https://example.com/x.jpg"]}]"#,
        );
        let assets = Assets::load(dir.path()).unwrap();
        let missing = assets.missing_images(dir.path());
        assert_eq!(missing, vec![dir.path().join("images/gone.jpg")]);
    }
}

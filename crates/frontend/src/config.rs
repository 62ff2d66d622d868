/// Where the backend serves `locations.json` and the images it references.
pub const DEFAULT_BASE_PATH: &str = "/static";

/// Stock Leaflet marker images, used unless the build points elsewhere.
pub const DEFAULT_ICON_DIR: &str = "https://unpkg.com/leaflet@1.9.4/dist/images";

/// CSS class added to the marker of the current location.
pub const ACTIVE_MARKER_CLASS: &str = "marker-active";

/// Asset paths for marker icons, handed to the icon initialization step.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
    pub active_class_name: String,
}

impl IconConfig {
    pub fn from_dir(dir: &str) -> Self {
        let dir = dir.trim_end_matches('/');
        IconConfig {
            icon_url: format!("{}/marker-icon.png", dir),
            icon_retina_url: format!("{}/marker-icon-2x.png", dir),
            shadow_url: format!("{}/marker-shadow.png", dir),
            active_class_name: ACTIVE_MARKER_CLASS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Deployment root prefixed to image references and the dataset URL.
    pub base_path: String,
    pub icons: IconConfig,
}

impl AppConfig {
    /// Read `WAYMARK_BASE_PATH` and `WAYMARK_ICON_DIR` as set at build time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("WAYMARK_BASE_PATH"),
            option_env!("WAYMARK_ICON_DIR"),
        )
    }

    pub fn new(base_path: Option<&str>, icon_dir: Option<&str>) -> Self {
        let base_path = base_path
            .unwrap_or(DEFAULT_BASE_PATH)
            .trim_end_matches('/')
            .to_string();
        let icons = IconConfig::from_dir(icon_dir.unwrap_or(DEFAULT_ICON_DIR));
        AppConfig { base_path, icons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::new(None, None);
        assert_eq!(cfg.base_path, "/static");
        assert_eq!(
            cfg.icons.icon_url,
            "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png"
        );
        assert_eq!(cfg.icons.active_class_name, "marker-active");
    }

    #[test]
    fn test_base_path_trailing_slash_trimmed() {
        let cfg = AppConfig::new(Some("/tour/"), None);
        assert_eq!(cfg.base_path, "/tour");
    }

    #[test]
    fn test_empty_base_path_allowed() {
        let cfg = AppConfig::new(Some(""), None);
        assert_eq!(cfg.base_path, "");
    }

    #[test]
    fn test_icon_dir_override() {
        let cfg = AppConfig::new(None, Some("/static/leaflet/"));
        assert_eq!(cfg.icons.icon_url, "/static/leaflet/marker-icon.png");
        assert_eq!(cfg.icons.icon_retina_url, "/static/leaflet/marker-icon-2x.png");
        assert_eq!(cfg.icons.shadow_url, "/static/leaflet/marker-shadow.png");
    }
}

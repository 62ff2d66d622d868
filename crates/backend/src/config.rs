use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Served under `/static`: `locations.json` and the images it references.
    pub assets_dir: PathBuf,
    /// Output of the frontend build (`index.html`, `assets/`).
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };
        let assets_dir = PathBuf::from(
            lookup("ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
        );
        let dist_dir =
            PathBuf::from(lookup("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()));

        Ok(ServerConfig {
            port,
            assets_dir,
            dist_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

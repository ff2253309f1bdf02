//! Application configuration
//!
//! Settings come from a JSON file: an explicit `--config` path, otherwise
//! `<config dir>/menu_demos/config.json` when it exists, otherwise the
//! built-in defaults. Missing fields take their default values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "menu_demos";
const CONFIG_FILE_NAME: &str = "config.json";

/// Smallest and largest automatic window scale
pub const MIN_AUTO_SCALE: u32 = 2;
pub const MAX_AUTO_SCALE: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window pixels per logical pixel; `None` picks one from the monitor size
    pub window_scale: Option<u32>,

    /// Frames per second for every demo loop
    pub frame_rate: u32,

    /// Root directory for images and menu definitions
    pub asset_dir: PathBuf,

    /// rpg demo menus, relative to `asset_dir`
    pub rpg_menus: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_scale: None,
            frame_rate: 60,
            asset_dir: PathBuf::from("assets"),
            rpg_menus: PathBuf::from("config/rpg_menus.json"),
        }
    }
}

/// Error types for loading configuration files
#[derive(Debug)]
pub enum ConfigError {
    IoError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, e) => write!(f, "Cannot read {}: {}", path.display(), e),
            ConfigError::ParseError(path, e) => {
                write!(f, "Invalid JSON in {}: {}", path.display(), e)
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

/// Reads and deserializes a JSON file
///
/// Shared by the app config and the menu definition files.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let json = fs::read_to_string(path).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
    serde_json::from_str(&json).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
}

impl AppConfig {
    /// Loads a config file and validates it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config to use for this run
    ///
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "loading config");
            return Self::load_from_file(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading user config");
                Self::load_from_file(&path)
            }
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/menu_demos/config.json`, when the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be at least 1".to_string()));
        }
        if self.window_scale == Some(0) {
            return Err(ConfigError::Invalid("window_scale must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Path of the rpg menu definitions
    pub fn rpg_menus_path(&self) -> PathBuf {
        self.asset_dir.join(&self.rpg_menus)
    }
}

/// Picks the largest whole scale that fits in 90% of the desktop
///
/// Clamped to [`MIN_AUTO_SCALE`]..=[`MAX_AUTO_SCALE`].
pub fn fit_window_scale(desktop: (i32, i32), logical: (u32, u32)) -> u32 {
    let usable_w = (desktop.0 as f32 * 0.9) as i32;
    let usable_h = (desktop.1 as f32 * 0.9) as i32;

    let max_scale_w = usable_w / logical.0.max(1) as i32;
    let max_scale_h = usable_h / logical.1.max(1) as i32;

    max_scale_w
        .min(max_scale_h)
        .clamp(MIN_AUTO_SCALE as i32, MAX_AUTO_SCALE as i32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("menu_demos_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.window_scale, None);
        assert_eq!(config.rpg_menus_path(), PathBuf::from("assets/config/rpg_menus.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial.json", r#"{ "window_scale": 3 }"#);
        let config = AppConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.window_scale, Some(3));
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("menu_demos_does_not_exist.json");
        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::IoError(..))));
    }

    #[test]
    fn test_bad_json_is_error() {
        let path = temp_file("bad.json", "{ not json");
        let result = AppConfig::load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseError(..))));
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let path = temp_file("zero_fps.json", r#"{ "frame_rate": 0 }"#);
        let result = AppConfig::load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_fit_window_scale() {
        // 1920x1080 desktop, 400x300 game: 1728/400 = 4, 972/300 = 3
        assert_eq!(fit_window_scale((1920, 1080), (400, 300)), 3);
        // Tiny desktop still gets the minimum
        assert_eq!(fit_window_scale((640, 480), (400, 300)), MIN_AUTO_SCALE);
        // Huge desktop is capped
        assert_eq!(fit_window_scale((7680, 4320), (320, 240)), MAX_AUTO_SCALE);
    }
}

use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_HIGH_DENSITY_SUFFIX: &str = "@2x";
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Filename suffix marking the high-density variant of an image.
    pub high_density_suffix: String,
    pub image_extension: String,
    /// Extensions of top-level files searched for image references.
    pub source_extensions: Vec<String>,
    /// Glob patterns excluded from the recursive image scan.
    pub ignore_patterns: Vec<String>,
    pub colorize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_density_suffix: DEFAULT_HIGH_DENSITY_SUFFIX.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            source_extensions: vec!["xib".to_string(), "h".to_string(), "m".to_string()],
            ignore_patterns: Vec::new(),
            colorize: true,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_from("Config")
}

/// Layer an optional config file (any format the `config` crate knows)
/// over the built-in defaults.
pub fn load_from(name: &str) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let builder = Config::builder()
        .set_default("high_density_suffix", defaults.high_density_suffix)?
        .set_default("image_extension", defaults.image_extension)?
        .set_default("source_extensions", defaults.source_extensions)?
        .set_default("ignore_patterns", defaults.ignore_patterns)?
        .set_default("colorize", defaults.colorize)?
        .add_source(ConfigFile::with_name(name).required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let tmp = tempdir().unwrap();
        let name = tmp.path().join("NoSuchConfig");
        let config = load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.high_density_suffix, "@2x");
        assert_eq!(config.image_extension, "png");
        assert_eq!(config.source_extensions, vec!["xib", "h", "m"]);
        assert!(config.ignore_patterns.is_empty());
        assert!(config.colorize);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join("Audit.toml"),
            "colorize = false\nignore_patterns = [\"**/Pods/**\"]\n",
        )
        .unwrap();
        let name = tmp.path().join("Audit");
        let config = load_from(name.to_str().unwrap()).unwrap();
        assert!(!config.colorize);
        assert_eq!(config.ignore_patterns, vec!["**/Pods/**"]);
        assert_eq!(config.high_density_suffix, "@2x");
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("Broken.toml"), "colorize = [").unwrap();
        let name = tmp.path().join("Broken");
        assert!(load_from(name.to_str().unwrap()).is_err());
    }
}

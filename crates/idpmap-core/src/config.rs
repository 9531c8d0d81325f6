use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{MapError, Result};
use crate::scale::{RadiusScale, MAX_RADIUS, MIN_RADIUS};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "idpmap.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered map configuration: defaults, then `idpmap.toml`, then `IDPMAP_*`
/// environment variables, then CLI arguments.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Site survey dataset location (path or URL)
    pub sites_source: ConfigValue<Option<String>>,
    /// Regional aggregate dataset location (path or URL)
    pub regions_source: ConfigValue<Option<String>>,
    /// Smallest symbol radius in pixels
    pub radius_min: ConfigValue<f64>,
    /// Largest symbol radius in pixels
    pub radius_max: ConfigValue<f64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            sites_source: ConfigValue::new(None, ConfigSource::Default),
            regions_source: ConfigValue::new(None, ConfigSource::Default),
            radius_min: ConfigValue::new(MIN_RADIUS, ConfigSource::Default),
            radius_max: ConfigValue::new(MAX_RADIUS, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| MapError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| MapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("failed to parse TOML: {}", e),
            })?;

        if let Some(sites) = file_config.sites_source {
            self.sites_source.update(Some(sites), ConfigSource::File);
        }

        if let Some(regions) = file_config.regions_source {
            self.regions_source.update(Some(regions), ConfigSource::File);
        }

        if let Some(radius_min) = file_config.radius_min {
            self.radius_min.update(radius_min, ConfigSource::File);
        }

        if let Some(radius_max) = file_config.radius_max {
            self.radius_max.update(radius_max, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(sites) = env::var("IDPMAP_SITES") {
            self.sites_source.update(Some(sites), ConfigSource::Environment);
        }

        if let Ok(regions) = env::var("IDPMAP_REGIONS") {
            self.regions_source.update(Some(regions), ConfigSource::Environment);
        }

        if let Ok(radius_str) = env::var("IDPMAP_RADIUS_MIN") {
            match radius_str.parse::<f64>() {
                Ok(radius) => self.radius_min.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid IDPMAP_RADIUS_MIN value '{}': expected a number of pixels",
                    radius_str
                ),
            }
        }

        if let Ok(radius_str) = env::var("IDPMAP_RADIUS_MAX") {
            match radius_str.parse::<f64>() {
                Ok(radius) => self.radius_max.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid IDPMAP_RADIUS_MAX value '{}': expected a number of pixels",
                    radius_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(sites) = overrides.sites_source {
            self.sites_source.update(Some(sites), ConfigSource::Cli);
        }

        if let Some(regions) = overrides.regions_source {
            self.regions_source.update(Some(regions), ConfigSource::Cli);
        }

        if let Some(radius_min) = overrides.radius_min {
            self.radius_min.update(radius_min, ConfigSource::Cli);
        }

        if let Some(radius_max) = overrides.radius_max {
            self.radius_max.update(radius_max, ConfigSource::Cli);
        }
    }

    /// The symbol scale configured by the radius layers. Fails when the
    /// layered values violate `0 < min < max`.
    pub fn radius_scale(&self) -> Result<RadiusScale> {
        RadiusScale::new(self.radius_min.value, self.radius_max.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "sites_source".to_string(),
            (display_source(&self.sites_source.value), self.sites_source.source),
        );

        map.insert(
            "regions_source".to_string(),
            (display_source(&self.regions_source.value), self.regions_source.source),
        );

        map.insert(
            "radius_min".to_string(),
            (format!("{} px", self.radius_min.value), self.radius_min.source),
        );

        map.insert(
            "radius_max".to_string(),
            (format!("{} px", self.radius_max.value), self.radius_max.source),
        );

        map
    }
}

fn display_source(value: &Option<String>) -> String {
    match value {
        Some(source) => source.clone(),
        None => "(unset)".to_string(),
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    sites_source: Option<String>,
    regions_source: Option<String>,
    radius_min: Option<f64>,
    radius_max: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub sites_source: Option<String>,
    pub regions_source: Option<String>,
    pub radius_min: Option<f64>,
    pub radius_max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn clear_env() {
        env::remove_var("IDPMAP_SITES");
        env::remove_var("IDPMAP_REGIONS");
        env::remove_var("IDPMAP_RADIUS_MIN");
        env::remove_var("IDPMAP_RADIUS_MAX");
    }

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.sites_source.value, None);
        assert_eq!(config.sites_source.source, ConfigSource::Default);
        assert_eq!(config.radius_min.value, MIN_RADIUS);
        assert_eq!(config.radius_max.value, MAX_RADIUS);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
sites_source = "data/idp_sites_long.geojson"
regions_source = "data/idp_by_region_wgs1984.geojson"
radius_min = 6.0
radius_max = 40.0
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(
            config.sites_source.value.as_deref(),
            Some("data/idp_sites_long.geojson")
        );
        assert_eq!(config.sites_source.source, ConfigSource::File);
        assert_eq!(config.radius_min.value, 6.0);
        assert_eq!(config.radius_max.value, 40.0);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/idpmap.toml");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        env::set_var("IDPMAP_SITES", "https://example.org/sites.geojson");
        env::set_var("IDPMAP_RADIUS_MAX", "48");

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"sites_source = "data/from-file.geojson""#).unwrap();

        let config = LayeredConfig::with_defaults()
            .load_from_file(file.path())
            .unwrap()
            .load_from_env();

        assert_eq!(
            config.sites_source.value.as_deref(),
            Some("https://example.org/sites.geojson")
        );
        assert_eq!(config.sites_source.source, ConfigSource::Environment);
        assert_eq!(config.radius_max.value, 48.0);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_radius_keeps_previous_layer() {
        clear_env();
        env::set_var("IDPMAP_RADIUS_MIN", "huge");

        let config = LayeredConfig::with_defaults().load_from_env();

        assert_eq!(config.radius_min.value, MIN_RADIUS);
        assert_eq!(config.radius_min.source, ConfigSource::Default);

        clear_env();
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            sites_source: Some("cli.geojson".to_string()),
            regions_source: None,
            radius_min: Some(2.0),
            radius_max: None,
        };

        config.update_from_cli(overrides);

        assert_eq!(config.sites_source.value.as_deref(), Some("cli.geojson"));
        assert_eq!(config.sites_source.source, ConfigSource::Cli);
        assert_eq!(config.radius_min.value, 2.0);
        assert_eq!(config.radius_min.source, ConfigSource::Cli);
        // These should still be defaults
        assert_eq!(config.regions_source.source, ConfigSource::Default);
        assert_eq!(config.radius_max.source, ConfigSource::Default);
    }

    #[test]
    fn test_radius_scale_from_layers() {
        let mut config = LayeredConfig::with_defaults();
        assert!(config.radius_scale().is_ok());

        config.update_from_cli(CliConfigOverrides {
            radius_min: Some(50.0),
            ..Default::default()
        });
        assert!(config.radius_scale().is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("sites_source"));
        assert!(map.contains_key("regions_source"));
        assert!(map.contains_key("radius_min"));
        assert!(map.contains_key("radius_max"));

        let (sites_value, sites_source) = &map["sites_source"];
        assert_eq!(sites_value, "(unset)");
        assert_eq!(*sites_source, ConfigSource::Default);
    }
}

//! Integration test for layered configuration
//!
//! Walks the full precedence chain in one pass:
//! CLI arguments > Environment variables > Config file > Defaults

use idpmap_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn test_full_configuration_workflow() {
    env::remove_var("IDPMAP_SITES");
    env::remove_var("IDPMAP_REGIONS");
    env::remove_var("IDPMAP_RADIUS_MIN");
    env::remove_var("IDPMAP_RADIUS_MAX");

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("idpmap.toml");
    fs::write(
        &config_path,
        r#"
sites_source = "data/from-file.geojson"
regions_source = "data/regions-from-file.geojson"
radius_min = 5.0
radius_max = 30.0
"#,
    )
    .unwrap();

    env::set_var("IDPMAP_SITES", "https://example.org/env-sites.geojson");
    env::set_var("IDPMAP_RADIUS_MAX", "36");

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(&config_path)
        .unwrap()
        .load_from_env();

    // File values hold where no env var is set; env wins where one is.
    assert_eq!(
        config.sites_source.value.as_deref(),
        Some("https://example.org/env-sites.geojson")
    );
    assert_eq!(config.sites_source.source, ConfigSource::Environment);
    assert_eq!(
        config.regions_source.value.as_deref(),
        Some("data/regions-from-file.geojson")
    );
    assert_eq!(config.regions_source.source, ConfigSource::File);
    assert_eq!(config.radius_min.value, 5.0);
    assert_eq!(config.radius_max.value, 36.0);

    config.update_from_cli(CliConfigOverrides {
        sites_source: Some("cli-sites.geojson".to_string()),
        radius_min: Some(8.0),
        ..Default::default()
    });

    assert_eq!(config.sites_source.value.as_deref(), Some("cli-sites.geojson"));
    assert_eq!(config.sites_source.source, ConfigSource::Cli);
    assert_eq!(config.radius_min.value, 8.0);
    assert_eq!(config.radius_min.source, ConfigSource::Cli);
    // Still from env, CLI did not touch it
    assert_eq!(config.radius_max.value, 36.0);
    assert_eq!(config.radius_max.source, ConfigSource::Environment);

    // The layered radii build a usable scale.
    let scale = config.radius_scale().unwrap();
    assert_eq!(scale.min(), 8.0);
    assert_eq!(scale.max(), 36.0);

    env::remove_var("IDPMAP_SITES");
    env::remove_var("IDPMAP_RADIUS_MAX");
}

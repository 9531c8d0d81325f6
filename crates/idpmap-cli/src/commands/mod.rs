//! Command implementations

mod config;
mod frame;
mod inspect;
mod legend;
mod regions;
mod site;
mod timeline;

use std::path::Path;

use anyhow::{bail, Context, Result};

use idpmap_core::config::{ConfigSource, ConfigValue, LayeredConfig, DEFAULT_CONFIG_FILE};
use idpmap_core::index::SiteIndex;
use idpmap_core::load::{load_region_records, load_site_index, source_for};
use idpmap_core::models::RegionRecord;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = layered_config(&cli)?;

    match cli.command {
        Commands::Inspect(args) => inspect::execute(args, &output, config).await,
        Commands::Timeline(args) => timeline::execute(args, &output, config).await,
        Commands::Frame(args) => frame::execute(args, &output, config).await,
        Commands::Site(args) => site::execute(args, &output, config).await,
        Commands::Legend(args) => legend::execute(args, &output, config).await,
        Commands::Regions(args) => regions::execute(args, &output, config).await,
        Commands::Config => config::execute(&output, config),
    }
}

/// Layer defaults, config file, environment, and the global flags
fn layered_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        config = config
            .load_from_file(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("failed to load {}", DEFAULT_CONFIG_FILE))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(cli.overrides());

    Ok(config)
}

/// The site dataset location, with a positional SOURCE taking priority
/// over every other layer.
pub(crate) fn sites_spec(config: &mut LayeredConfig, positional: Option<String>) -> Result<String> {
    if let Some(source) = positional {
        config.sites_source = ConfigValue::new(Some(source), ConfigSource::Cli);
    }

    match &config.sites_source.value {
        Some(spec) => Ok(spec.clone()),
        None => bail!(
            "No site dataset given. Pass SOURCE, use --sites, set IDPMAP_SITES, \
             or add sites_source to idpmap.toml."
        ),
    }
}

/// The region dataset location, with a positional SOURCE taking priority
/// over every other layer.
pub(crate) fn regions_spec(config: &mut LayeredConfig, positional: Option<String>) -> Result<String> {
    if let Some(source) = positional {
        config.regions_source = ConfigValue::new(Some(source), ConfigSource::Cli);
    }

    match &config.regions_source.value {
        Some(spec) => Ok(spec.clone()),
        None => bail!(
            "No region dataset given. Pass SOURCE, use --regions, set IDPMAP_REGIONS, \
             or add regions_source to idpmap.toml."
        ),
    }
}

/// Fetch and index the site dataset
pub(crate) async fn load_index(spec: &str) -> Result<SiteIndex> {
    let source = source_for(spec);
    load_site_index(source.as_ref())
        .await
        .with_context(|| format!("failed to load site dataset from {}", spec))
}

/// Fetch and parse the region dataset
pub(crate) async fn load_regions(spec: &str) -> Result<Vec<RegionRecord>> {
    let source = source_for(spec);
    load_region_records(source.as_ref())
        .await
        .with_context(|| format!("failed to load region dataset from {}", spec))
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use idpmap_core::config::CliConfigOverrides;

/// idpmap - Displacement-site survey map toolkit
#[derive(Parser, Debug)]
#[command(name = "idpmap")]
#[command(about = "Displacement-site survey map toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to load (defaults to idpmap.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site survey dataset (path or URL)
    #[arg(long, global = true)]
    pub sites: Option<String>,

    /// Regional aggregate dataset (path or URL)
    #[arg(long, global = true)]
    pub regions: Option<String>,

    /// Smallest symbol radius in pixels
    #[arg(long, global = true)]
    pub radius_min: Option<f64>,

    /// Largest symbol radius in pixels
    #[arg(long, global = true)]
    pub radius_max: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The global flags as a config override layer
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            sites_source: self.sites.clone(),
            regions_source: self.regions.clone(),
            radius_min: self.radius_min,
            radius_max: self.radius_max,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a site survey dataset
    Inspect(InspectArgs),

    /// Walk every timeline position with its active sites
    Timeline(TimelineArgs),

    /// Print the draw instructions for one frame
    Frame(FrameArgs),

    /// Show one site's series and its render verdict for a date
    Site(SiteArgs),

    /// Print the proportional-symbol legend and the choropleth bands
    Legend(LegendArgs),

    /// Print the choropleth shading table
    Regions(RegionsArgs),

    /// Show the resolved configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Site survey dataset (path or URL); overrides --sites and config
    pub source: Option<String>,

    /// Include a per-site table
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Parser, Debug)]
pub struct TimelineArgs {
    /// Site survey dataset (path or URL); overrides --sites and config
    pub source: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FrameArgs {
    /// Site survey dataset (path or URL); overrides --sites and config
    pub source: Option<String>,

    /// Timeline position to render (clamped into range, default 0)
    #[arg(long, conflicts_with = "date")]
    pub position: Option<usize>,

    /// Survey date to render (must be one of the timeline dates)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SiteArgs {
    /// Site identifier as it appears in the data
    pub site_id: String,

    /// Site survey dataset (path or URL); overrides --sites and config
    pub source: Option<String>,

    /// Resolve the observation in effect on this date
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug)]
pub struct LegendArgs {
    /// Site survey dataset (path or URL); overrides --sites and config
    pub source: Option<String>,

    /// Scale against this maximum instead of loading a dataset
    #[arg(long, conflicts_with = "source")]
    pub max_population: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct RegionsArgs {
    /// Regional aggregate dataset (path or URL); overrides --regions and config
    pub source: Option<String>,
}

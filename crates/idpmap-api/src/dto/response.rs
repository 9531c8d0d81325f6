use chrono::{DateTime, Utc};
use serde::Serialize;

use idpmap_core::index::SiteIndex;
use idpmap_core::models::{DateStamp, GeoBounds, GeoPoint};
use idpmap_render::{ChoroplethBand, DrawInstruction, LegendSwatch, RegionShade, SymbolFrame};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "idpmap-api" }
    }
}

/// Summary of a loaded site dataset
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub site_count: usize,
    pub observation_count: usize,
    pub date_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<DateStamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<DateStamp>,
    pub max_population: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GeoBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<GeoPoint>,
    pub built_at: DateTime<Utc>,
}

impl DatasetSummary {
    pub fn for_index(index: &SiteIndex) -> Self {
        Self {
            site_count: index.site_count(),
            observation_count: index.observation_count(),
            date_count: index.timeline().len(),
            first_date: index.timeline().first().cloned(),
            last_date: index.timeline().last().cloned(),
            max_population: index.max_population(),
            bounds: index.bounds().copied(),
            center: index.bounds().map(|b| b.center()),
            built_at: index.built_at(),
        }
    }
}

/// Load status of both datasets
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub sites_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetSummary>,
    pub regions_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_count: Option<usize>,
}

/// Ordered survey date universe
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub dates: Vec<DateStamp>,
    pub count: usize,
    pub enabled: bool,
}

/// Current slider state
#[derive(Debug, Serialize)]
pub struct NavigatorResponse {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateStamp>,
    pub len: usize,
    pub enabled: bool,
}

/// One rendered frame of draw instructions
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub position: usize,
    pub date: DateStamp,
    pub count: usize,
    pub symbols: Vec<DrawInstruction>,
}

impl From<SymbolFrame> for FrameResponse {
    fn from(frame: SymbolFrame) -> Self {
        Self {
            position: frame.position,
            date: frame.date,
            count: frame.symbols.len(),
            symbols: frame.symbols,
        }
    }
}

/// Proportional-symbol swatches plus the choropleth bands
#[derive(Debug, Serialize)]
pub struct LegendResponse {
    pub symbols: Vec<LegendSwatch>,
    pub max_population: f64,
    pub regions: Vec<ChoroplethBand>,
}

/// Shaded regions for the static aggregate map
#[derive(Debug, Serialize)]
pub struct ChoroplethResponse {
    pub count: usize,
    pub regions: Vec<RegionShade>,
}

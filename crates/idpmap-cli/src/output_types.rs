use chrono::{DateTime, Utc};
use serde::Serialize;

use idpmap_core::models::{DateStamp, GeoBounds, GeoPoint, Observation};
use idpmap_render::{ChoroplethBand, DrawInstruction, LegendSwatch};

/// Output for inspect command
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub source: String,
    pub site_count: usize,
    pub observation_count: usize,
    pub date_count: usize,
    pub first_date: Option<DateStamp>,
    pub last_date: Option<DateStamp>,
    pub max_population: f64,
    pub bounds: Option<GeoBounds>,
    pub center: Option<GeoPoint>,
    pub built_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<SiteSummary>>,
}

#[derive(Debug, Serialize)]
pub struct SiteSummary {
    pub id: String,
    pub name: Option<String>,
    pub region: Option<String>,
    pub observations: usize,
    pub first_date: Option<DateStamp>,
    pub last_date: Option<DateStamp>,
    pub latest_population: Option<f64>,
}

/// Output for timeline command
#[derive(Debug, Serialize)]
pub struct TimelineOutput {
    pub source: String,
    pub positions: Vec<TimelineRow>,
}

#[derive(Debug, Serialize)]
pub struct TimelineRow {
    pub position: usize,
    pub date: DateStamp,
    pub active_sites: usize,
    pub displayed_population: f64,
}

/// Output for frame command
#[derive(Debug, Serialize)]
pub struct FrameOutput {
    pub position: usize,
    pub date: DateStamp,
    pub count: usize,
    pub symbols: Vec<DrawInstruction>,
}

/// Output for site command
#[derive(Debug, Serialize)]
pub struct SiteOutput {
    pub site_id: String,
    pub observations: Vec<Observation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedObservation>,
}

/// Render verdict for one site on one query date
#[derive(Debug, Serialize)]
pub struct ResolvedObservation {
    pub query_date: DateStamp,
    pub survey_date: Option<DateStamp>,
    pub population: Option<f64>,
    pub open: bool,
    pub displayed: bool,
    pub radius: Option<f64>,
}

/// Output for legend command
#[derive(Debug, Serialize)]
pub struct LegendOutput {
    pub max_population: f64,
    pub symbols: Vec<LegendSwatch>,
    pub bands: Vec<ChoroplethBand>,
}

/// Output for regions command
#[derive(Debug, Serialize)]
pub struct RegionsOutput {
    pub source: String,
    pub count: usize,
    pub regions: Vec<RegionSummary>,
}

#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub name: String,
    pub count: f64,
    pub fill_color: String,
    pub info: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub values: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: String,
}

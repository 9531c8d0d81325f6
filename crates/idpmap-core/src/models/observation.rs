use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a monitored displacement site
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A calendar date carried as the raw ISO-like string from the source data
/// (e.g. `"2021-03-15"`).
///
/// The survey exports use a fixed-width textual form, so plain string
/// ordering is chronological ordering. Keeping the raw string avoids a parse
/// step the data does not need and preserves exactly what the source said.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateStamp(pub String);

impl DateStamp {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateStamp {
    fn from(date: &str) -> Self {
        Self(date.to_string())
    }
}

/// A WGS84 point location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// One survey record: one site, one survey date.
///
/// Only `site_id`, `survey_date` and a finite point `location` are required;
/// everything else is carried as the source provided it. Records missing the
/// required fields never become observations (they are skipped at parse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Site identifier (`SiteID`)
    pub site_id: SiteId,

    /// Display name (`SiteName`)
    pub site_name: Option<String>,

    /// Administrative region (`RegionName`)
    pub region: Option<String>,

    /// Date the site opened (`OpenDate`)
    pub open_date: Option<DateStamp>,

    /// Date the site closed, if it has (`CloseDate`)
    pub close_date: Option<DateStamp>,

    /// Survey round label (`SurveyRound`)
    pub survey_round: Option<String>,

    /// Date this record was surveyed (`SurveyDate`)
    pub survey_date: DateStamp,

    /// Site classification (`SiteType`)
    pub site_type: Option<String>,

    /// Open/closed flag as reported (`IsSiteOpen`)
    pub is_open: Option<bool>,

    /// Total population at the site (`TotPop`), as parsed
    pub population: Option<f64>,

    /// Total households at the site (`TotHH`)
    pub households: Option<f64>,

    /// Reported displacement reason (`Reason`)
    pub reason: Option<String>,

    /// Point location of the site
    pub location: GeoPoint,
}

impl Observation {
    /// The population value that drives symbol sizing: present only when the
    /// reported count is a finite, strictly positive number. Zero-population
    /// and unreported records resolve but draw no symbol.
    pub fn magnitude(&self) -> Option<f64> {
        self.population.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Whether the site is still open as of `date` under the close-date
    /// lifecycle rule: a close date excludes the site only for dates strictly
    /// after it, so a query on the close date itself still counts as open
    /// (closure takes effect the day after).
    pub fn open_on(&self, date: &DateStamp) -> bool {
        match &self.close_date {
            Some(close) => date <= close,
            None => true,
        }
    }
}

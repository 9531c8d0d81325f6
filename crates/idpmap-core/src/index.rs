//! Temporal site index
//!
//! Builds the queryable structure behind the time slider: per-site
//! chronological series, the global timeline of distinct survey dates, the
//! dataset-wide population maximum used as the scaling denominator, and the
//! spatial bounds for initial view framing. Built once per data load and
//! rebuilt wholesale on reload, never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::formats::site_observations;
use crate::models::{DateStamp, GeoBounds, Observation, SiteId, SiteSeries};

/// The global sorted list of distinct survey dates, addressed by position.
///
/// Position `0` is the earliest date. The slider control binds its integer
/// range to `0..len()-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline(Vec<DateStamp>);

impl Timeline {
    /// Build from any collection of dates; duplicates collapse and the
    /// result is ascending.
    pub fn from_dates(dates: impl IntoIterator<Item = DateStamp>) -> Self {
        let distinct: BTreeSet<DateStamp> = dates.into_iter().collect();
        Self(distinct.into_iter().collect())
    }

    /// The date at `position`, if in range
    pub fn get(&self, position: usize) -> Option<&DateStamp> {
        self.0.get(position)
    }

    /// The position of `date`, if it is one of the survey dates
    pub fn position_of(&self, date: &DateStamp) -> Option<usize> {
        self.0.binary_search(date).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Earliest survey date
    pub fn first(&self) -> Option<&DateStamp> {
        self.0.first()
    }

    /// Latest survey date
    pub fn last(&self) -> Option<&DateStamp> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateStamp> {
        self.0.iter()
    }

    pub fn dates(&self) -> &[DateStamp] {
        &self.0
    }
}

/// The fully built temporal index over one loaded dataset.
///
/// Owns every series and observation; rendering only reads it. Series are
/// keyed in a `BTreeMap` so iteration, and therefore every emitted frame,
/// is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteIndex {
    /// Chronological series per site, keyed by site id
    series: BTreeMap<SiteId, SiteSeries>,

    /// Distinct survey dates across all sites, ascending
    timeline: Timeline,

    /// Largest positive population observed anywhere in the dataset, the
    /// denominator for radius scaling. `0.0` when no observation carries a
    /// positive population.
    max_population: f64,

    /// Bounding box over all observation locations, `None` when empty
    bounds: Option<GeoBounds>,

    /// When this index was built
    built_at: DateTime<Utc>,
}

impl SiteIndex {
    /// Parse a survey feature collection and build the index from the valid
    /// features it contains.
    pub fn from_feature_collection(collection: &geojson::FeatureCollection) -> Self {
        Self::from_observations(site_observations(collection))
    }

    /// Build the index from already-typed observations.
    ///
    /// A single pass folds the timeline set, the population maximum and the
    /// spatial bounds while grouping observations by site in input order;
    /// each series is then stably sorted by survey date, so same-day
    /// duplicates keep their input order.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let observation_count = observations.len();
        let mut series: BTreeMap<SiteId, SiteSeries> = BTreeMap::new();
        let mut dates: BTreeSet<DateStamp> = BTreeSet::new();
        let mut max_population = 0.0f64;
        let mut bounds: Option<GeoBounds> = None;

        for observation in observations {
            dates.insert(observation.survey_date.clone());

            if let Some(magnitude) = observation.magnitude() {
                max_population = max_population.max(magnitude);
            }

            GeoBounds::accumulate(&mut bounds, &observation.location);

            series
                .entry(observation.site_id.clone())
                .or_insert_with(|| SiteSeries::new(observation.site_id.clone()))
                .push(observation);
        }

        for site_series in series.values_mut() {
            site_series.sort_by_date();
        }

        let timeline = Timeline::from_dates(dates);

        tracing::debug!(
            sites = series.len(),
            observations = observation_count,
            dates = timeline.len(),
            max_population,
            "built site index"
        );

        Self {
            series,
            timeline,
            max_population,
            bounds,
            built_at: Utc::now(),
        }
    }

    /// Series for one site
    pub fn get(&self, site_id: &SiteId) -> Option<&SiteSeries> {
        self.series.get(site_id)
    }

    /// All series in site-id order
    pub fn sites(&self) -> impl Iterator<Item = (&SiteId, &SiteSeries)> {
        self.series.iter()
    }

    /// Number of distinct sites
    pub fn site_count(&self) -> usize {
        self.series.len()
    }

    /// Total observations across all series
    pub fn observation_count(&self) -> usize {
        self.series.values().map(|s| s.len()).sum()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn max_population(&self) -> f64 {
        self.max_population
    }

    pub fn bounds(&self) -> Option<&GeoBounds> {
        self.bounds.as_ref()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// True when the dataset produced no observations at all
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use super::observation::{DateStamp, Observation, SiteId};

/// The chronological observation history of one site.
///
/// Observations are kept ascending by survey date. The sort is stable, so
/// two records sharing a survey date keep their input order and the scan in
/// [`SiteSeries::as_of`] settles on the later-appearing one. That is the
/// documented tie-break for same-day duplicates in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSeries {
    site_id: SiteId,
    observations: Vec<Observation>,
}

impl SiteSeries {
    /// Create an empty series for a site
    pub fn new(site_id: SiteId) -> Self {
        Self { site_id, observations: Vec::new() }
    }

    /// Build a series from unordered observations, sorting by survey date
    pub fn from_observations(site_id: SiteId, observations: Vec<Observation>) -> Self {
        let mut series = Self { site_id, observations };
        series.sort_by_date();
        series
    }

    pub fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// Append an observation; callers must re-sort before resolving
    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Restore the ascending-by-survey-date invariant (stable sort)
    pub fn sort_by_date(&mut self) {
        self.observations.sort_by(|a, b| a.survey_date.cmp(&b.survey_date));
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation, by survey date
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Latest observation, by survey date
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Resolve the observation in effect as of `date`: the last one whose
    /// survey date is at or before the query date.
    ///
    /// The scan walks the series in ascending order and stops at the first
    /// observation dated after the query; the early exit is only correct
    /// because the series is sorted. Returns `None` when the query precedes
    /// the site's first record.
    ///
    /// Close-date and magnitude filtering are deliberately left to the
    /// caller: a resolved observation may still be excluded from rendering.
    pub fn as_of(&self, date: &DateStamp) -> Option<&Observation> {
        let mut current = None;
        for observation in &self.observations {
            if observation.survey_date > *date {
                break;
            }
            current = Some(observation);
        }
        current
    }
}

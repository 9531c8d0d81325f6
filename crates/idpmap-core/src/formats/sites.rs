//! Site survey feature parsing
//!
//! Each feature is one site observation at one survey date. Only point
//! features carrying a site id and a survey date become observations;
//! everything else is skipped without error.

use geojson::{Feature, FeatureCollection, Value};

use crate::formats::{prop_bool, prop_f64, prop_str};
use crate::models::{DateStamp, GeoPoint, Observation, SiteId};

/// Extract all valid site observations from a survey feature collection.
///
/// Skips, silently: non-point geometries, features without a geometry,
/// features missing `SiteID` or `SurveyDate`, and points with non-finite
/// coordinates. The skip count is logged at debug level.
pub fn site_observations(collection: &FeatureCollection) -> Vec<Observation> {
    let mut observations = Vec::new();
    let mut skipped = 0usize;

    for feature in &collection.features {
        match observation_from_feature(feature) {
            Some(observation) => observations.push(observation),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(
            skipped,
            kept = observations.len(),
            "skipped invalid site features"
        );
    }

    observations
}

/// Convert one feature into an observation, or `None` if it is invalid.
fn observation_from_feature(feature: &Feature) -> Option<Observation> {
    let location = point_location(feature)?;
    let properties = feature.properties.as_ref()?;

    let site_id = SiteId(prop_str(properties, "SiteID")?);
    let survey_date = DateStamp(prop_str(properties, "SurveyDate")?);

    Some(Observation {
        site_id,
        site_name: prop_str(properties, "SiteName"),
        region: prop_str(properties, "RegionName"),
        open_date: prop_str(properties, "OpenDate").map(DateStamp),
        close_date: prop_str(properties, "CloseDate").map(DateStamp),
        survey_round: prop_str(properties, "SurveyRound"),
        survey_date,
        site_type: prop_str(properties, "SiteType"),
        is_open: prop_bool(properties, "IsSiteOpen"),
        population: prop_f64(properties, "TotPop"),
        households: prop_f64(properties, "TotHH"),
        reason: prop_str(properties, "Reason"),
        location,
    })
}

/// Point geometry with finite coordinates, or `None`.
fn point_location(feature: &Feature) -> Option<GeoPoint> {
    let geometry = feature.geometry.as_ref()?;
    match &geometry.value {
        Value::Point(coordinates) if coordinates.len() >= 2 => {
            let point = GeoPoint {
                longitude: coordinates[0],
                latitude: coordinates[1],
            };
            point.is_finite().then_some(point)
        }
        _ => None,
    }
}

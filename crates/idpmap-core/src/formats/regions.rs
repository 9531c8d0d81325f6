//! Regional aggregate feature parsing
//!
//! Each feature is one administrative region carrying a precomputed count of
//! historic sites. Same best-effort posture as the site parser.

use geojson::{Feature, FeatureCollection, Value};

use crate::formats::{prop_f64, prop_str};
use crate::models::RegionRecord;

/// Extract all valid region records from a choropleth feature collection.
///
/// A feature is valid when it has a `RegionName`, a numeric `count` and a
/// Polygon or MultiPolygon geometry; anything else is skipped silently.
pub fn region_records(collection: &FeatureCollection) -> Vec<RegionRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for feature in &collection.features {
        match region_from_feature(feature) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = records.len(), "skipped invalid region features");
    }

    records
}

fn region_from_feature(feature: &Feature) -> Option<RegionRecord> {
    let geometry = feature.geometry.as_ref()?;
    if !matches!(geometry.value, Value::Polygon(_) | Value::MultiPolygon(_)) {
        return None;
    }

    let properties = feature.properties.as_ref()?;
    let name = prop_str(properties, "RegionName")?;
    let count = prop_f64(properties, "count")?;

    Some(RegionRecord {
        name,
        count,
        geometry: geometry.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::GeoJson;

    fn collection(json: &str) -> FeatureCollection {
        match json.parse::<GeoJson>().unwrap() {
            GeoJson::FeatureCollection(fc) => fc,
            other => panic!("expected a feature collection, got {:?}", other),
        }
    }

    #[test]
    fn test_polygon_region_becomes_record() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[34.0, 6.0], [40.0, 6.0], [40.0, 10.0], [34.0, 6.0]]]
                        },
                        "properties": {"RegionName": "Oromia", "count": 312}
                    }
                ]
            }"#,
        );

        let records = region_records(&fc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Oromia");
        assert_eq!(records[0].count, 312.0);
    }

    #[test]
    fn test_multi_polygon_is_accepted() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "MultiPolygon",
                            "coordinates": [[[[34.0, 6.0], [40.0, 6.0], [40.0, 10.0], [34.0, 6.0]]]]
                        },
                        "properties": {"RegionName": "Somali", "count": 128}
                    }
                ]
            }"#,
        );

        assert_eq!(region_records(&fc).len(), 1);
    }

    #[test]
    fn test_skips_points_and_incomplete_properties() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [38.0, 8.0]},
                        "properties": {"RegionName": "Afar", "count": 10}
                    },
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[34.0, 6.0], [40.0, 6.0], [40.0, 10.0], [34.0, 6.0]]]
                        },
                        "properties": {"count": 10}
                    },
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[34.0, 6.0], [40.0, 6.0], [40.0, 10.0], [34.0, 6.0]]]
                        },
                        "properties": {"RegionName": "Tigray"}
                    }
                ]
            }"#,
        );

        assert!(region_records(&fc).is_empty());
    }
}

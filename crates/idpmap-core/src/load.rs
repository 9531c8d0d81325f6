//! Async data loading
//!
//! The fetch-then-build pipeline: one asynchronous fetch of the raw GeoJSON
//! text (local file or HTTP), then a synchronous parse and build. Nothing is
//! renderable until the load resolves; a failed load is reported once and
//! leaves the caller in its error-label state, with no retry.

use async_trait::async_trait;
use geojson::GeoJson;
use std::path::{Path, PathBuf};

use crate::error::{MapError, Result};
use crate::formats::region_records;
use crate::index::SiteIndex;
use crate::models::RegionRecord;

/// A source of raw GeoJSON text. The only I/O seam in the crate.
#[async_trait]
pub trait RawSource: Send + Sync {
    /// Fetch the complete document as text
    async fn read_to_string(&self) -> Result<String>;

    /// Where the data comes from, for logs and status reporting
    fn label(&self) -> String;
}

/// Reads a local GeoJSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RawSource for FileSource {
    async fn read_to_string(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn label(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches a GeoJSON document over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), client: reqwest::Client::new() }
    }
}

#[async_trait]
impl RawSource for HttpSource {
    async fn read_to_string(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MapError::Fetch {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(MapError::Fetch {
                url: self.url.clone(),
                reason: format!("server answered {}", response.status()),
            });
        }

        response.text().await.map_err(|e| MapError::Fetch {
            url: self.url.clone(),
            reason: format!("failed to read body: {}", e),
        })
    }

    fn label(&self) -> String {
        self.url.clone()
    }
}

/// Pick a source for `spec`: URLs go over HTTP, everything else is a path.
pub fn source_for(spec: &str) -> Box<dyn RawSource> {
    if spec.starts_with("http://") || spec.starts_with("https://") {
        Box::new(HttpSource::new(spec))
    } else {
        Box::new(FileSource::new(spec))
    }
}

/// Parse text as a GeoJSON feature collection.
///
/// Both survey products are feature collections; bare features or
/// geometries are rejected rather than wrapped.
pub fn parse_feature_collection(text: &str) -> Result<geojson::FeatureCollection> {
    let geojson: GeoJson = text.parse().map_err(|e| MapError::InvalidGeoJson {
        reason: format!("not parseable as GeoJSON: {}", e),
    })?;

    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        other => Err(MapError::InvalidGeoJson {
            reason: format!("expected a FeatureCollection, got {}", geojson_kind(&other)),
        }),
    }
}

fn geojson_kind(geojson: &GeoJson) -> &'static str {
    match geojson {
        GeoJson::FeatureCollection(_) => "a FeatureCollection",
        GeoJson::Feature(_) => "a bare Feature",
        GeoJson::Geometry(_) => "a bare Geometry",
    }
}

/// Fetch and index the site survey dataset.
pub async fn load_site_index(source: &dyn RawSource) -> Result<SiteIndex> {
    let text = source.read_to_string().await?;
    let collection = parse_feature_collection(&text)?;
    let index = SiteIndex::from_feature_collection(&collection);

    tracing::info!(
        source = %source.label(),
        sites = index.site_count(),
        observations = index.observation_count(),
        dates = index.timeline().len(),
        "loaded site survey dataset"
    );

    Ok(index)
}

/// Fetch and parse the regional aggregate dataset.
pub async fn load_region_records(source: &dyn RawSource) -> Result<Vec<RegionRecord>> {
    let text = source.read_to_string().await?;
    let collection = parse_feature_collection(&text)?;
    let records = region_records(&collection);

    tracing::info!(
        source = %source.label(),
        regions = records.len(),
        "loaded regional aggregate dataset"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURVEY: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [38.8, 8.8]},
                "properties": {"SiteID": "ET0001", "SurveyDate": "2021-01-01", "TotPop": 150}
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [39.1, 9.2]},
                "properties": {"SiteID": "ET0002", "SurveyDate": "2021-02-01", "TotPop": 300}
            }
        ]
    }"#;

    #[test]
    fn test_source_for_dispatches_on_scheme() {
        assert_eq!(source_for("https://example.org/sites.geojson").label(), "https://example.org/sites.geojson");
        assert_eq!(source_for("data/sites.geojson").label(), "data/sites.geojson");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_feature_collection("not geojson").unwrap_err();
        assert!(matches!(err, MapError::InvalidGeoJson { .. }));
    }

    #[test]
    fn test_parse_rejects_bare_geometry() {
        let err = parse_feature_collection(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#)
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidGeoJson { .. }));
    }

    #[tokio::test]
    async fn test_load_site_index_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sites.geojson");
        std::fs::write(&path, SURVEY).unwrap();

        let source = FileSource::new(&path);
        let index = load_site_index(&source).await.unwrap();

        assert_eq!(index.site_count(), 2);
        assert_eq!(index.timeline().len(), 2);
        assert_eq!(index.max_population(), 300.0);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_an_io_error() {
        let source = FileSource::new("/nonexistent/sites.geojson");
        let err = load_site_index(&source).await.unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_region_records_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("regions.geojson");
        std::fs::write(
            &path,
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
        )
        .unwrap();

        let source = FileSource::new(&path);
        let records = load_region_records(&source).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Oromia");
    }
}

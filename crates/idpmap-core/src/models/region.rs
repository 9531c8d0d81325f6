use serde::{Deserialize, Serialize};

/// One region of the static choropleth layer: an administrative area with a
/// precomputed historic site count.
///
/// The polygon geometry is carried through untouched; the core never looks
/// inside it, only hands it back to the map frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Region name (`RegionName`)
    pub name: String,

    /// Historic site count for the region (`count`)
    pub count: f64,

    /// Polygon or MultiPolygon outline, passthrough GeoJSON
    pub geometry: geojson::Geometry,
}

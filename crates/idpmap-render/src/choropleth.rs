//! Static choropleth layer
//!
//! Shades each region by its historic site count using a fixed seven-bucket
//! threshold table and purple ramp. Shares no logic with the temporal
//! symbol layer; the count is precomputed in the source data.

use serde::{Deserialize, Serialize};

use idpmap_core::models::RegionRecord;

use crate::symbol::format_count;

/// Threshold grades of the choropleth legend, ascending
pub const LEGEND_GRADES: [u32; 7] = [0, 25, 50, 100, 250, 500, 1000];

/// Fill color for a region's site count.
///
/// The buckets are strict lower bounds: a count of exactly 1000 falls in
/// the `>500` bucket, not the darkest one.
pub fn color_for(count: f64) -> &'static str {
    if count > 1000.0 {
        "#54278f"
    } else if count > 500.0 {
        "#756bb1"
    } else if count > 250.0 {
        "#9e9ac8"
    } else if count > 100.0 {
        "#9c9fca"
    } else if count > 50.0 {
        "#bcbddc"
    } else if count > 25.0 {
        "#dadaeb"
    } else {
        "#f2f0f7"
    }
}

/// Visual style of one region polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStyle {
    /// Fill color from the threshold table
    pub fill_color: String,

    /// Outline color
    pub stroke_color: String,

    /// Outline width in pixels
    pub stroke_weight: f64,

    /// Outline dash pattern, `None` for a solid line
    pub dash_pattern: Option<String>,

    /// Fill opacity in `[0, 1]`
    pub fill_opacity: f64,
}

impl RegionStyle {
    /// Resting style: dashed white outline over the bucket fill
    pub fn base(count: f64) -> Self {
        Self {
            fill_color: color_for(count).to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_weight: 2.0,
            dash_pattern: Some("3".to_string()),
            fill_opacity: 0.7,
        }
    }

    /// Hover style: heavier solid grey outline, fill kept
    pub fn highlight(count: f64) -> Self {
        Self {
            fill_color: color_for(count).to_string(),
            stroke_color: "#666".to_string(),
            stroke_weight: 4.0,
            dash_pattern: None,
            fill_opacity: 0.8,
        }
    }
}

/// One shaded region ready for the frontend: both visual states plus the
/// passthrough outline geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShade {
    /// Region name
    pub name: String,

    /// Historic site count
    pub count: f64,

    /// Resting style
    pub style: RegionStyle,

    /// Hover style
    pub highlight: RegionStyle,

    /// Region outline, passthrough GeoJSON
    pub geometry: geojson::Geometry,
}

impl RegionShade {
    pub fn for_record(record: &RegionRecord) -> Self {
        Self {
            name: record.name.clone(),
            count: record.count,
            style: RegionStyle::base(record.count),
            highlight: RegionStyle::highlight(record.count),
            geometry: record.geometry.clone(),
        }
    }

    /// The hover info line (`"Oromia: 312 sites"`)
    pub fn info_text(&self) -> String {
        format!("{}: {} sites", self.name, format_count(self.count))
    }
}

/// Shade every region record, keeping input order.
pub fn shade_regions(records: &[RegionRecord]) -> Vec<RegionShade> {
    records.iter().map(RegionShade::for_record).collect()
}

/// One legend band of the choropleth ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethBand {
    /// Inclusive lower grade
    pub from: u32,

    /// Upper grade, `None` for the open-ended top band
    pub to: Option<u32>,

    /// Band color, sampled just above the lower grade
    pub color: String,

    /// Display label (`"50 - 100"`, `"1000+"`)
    pub label: String,
}

/// The legend bands between consecutive grades, colored like a count just
/// above each band's lower bound.
pub fn legend_bands() -> Vec<ChoroplethBand> {
    LEGEND_GRADES
        .iter()
        .enumerate()
        .map(|(i, &grade)| {
            let to = LEGEND_GRADES.get(i + 1).copied();
            let label = match to {
                Some(next) => format!("{} - {}", grade, next),
                None => format!("{}+", grade),
            };
            ChoroplethBand {
                from: grade,
                to,
                color: color_for((grade + 1) as f64).to_string(),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};

    fn record(name: &str, count: f64) -> RegionRecord {
        RegionRecord {
            name: name.to_string(),
            count,
            geometry: Geometry::new(Value::Polygon(vec![vec![
                vec![34.0, 6.0],
                vec![40.0, 6.0],
                vec![40.0, 10.0],
                vec![34.0, 6.0],
            ]])),
        }
    }

    #[test]
    fn test_color_buckets_are_strict_lower_bounds() {
        assert_eq!(color_for(1001.0), "#54278f");
        assert_eq!(color_for(1000.0), "#756bb1");
        assert_eq!(color_for(501.0), "#756bb1");
        assert_eq!(color_for(500.0), "#9e9ac8");
        assert_eq!(color_for(251.0), "#9e9ac8");
        assert_eq!(color_for(101.0), "#9c9fca");
        assert_eq!(color_for(51.0), "#bcbddc");
        assert_eq!(color_for(26.0), "#dadaeb");
        assert_eq!(color_for(25.0), "#f2f0f7");
        assert_eq!(color_for(0.0), "#f2f0f7");
    }

    #[test]
    fn test_legend_bands_cover_the_grades() {
        let bands = legend_bands();

        assert_eq!(bands.len(), 7);
        assert_eq!(bands[0].label, "0 - 25");
        assert_eq!(bands[0].color, "#f2f0f7");
        assert_eq!(bands[1].label, "25 - 50");
        assert_eq!(bands[1].color, "#dadaeb");
        assert_eq!(bands[6].label, "1000+");
        assert_eq!(bands[6].color, "#54278f");
        assert!(bands[6].to.is_none());
    }

    #[test]
    fn test_base_and_highlight_styles() {
        let base = RegionStyle::base(312.0);
        assert_eq!(base.fill_color, "#9e9ac8");
        assert_eq!(base.stroke_color, "#ffffff");
        assert_eq!(base.dash_pattern.as_deref(), Some("3"));
        assert_eq!(base.fill_opacity, 0.7);

        let highlight = RegionStyle::highlight(312.0);
        assert_eq!(highlight.fill_color, "#9e9ac8");
        assert_eq!(highlight.stroke_color, "#666");
        assert_eq!(highlight.stroke_weight, 4.0);
        assert!(highlight.dash_pattern.is_none());
        assert_eq!(highlight.fill_opacity, 0.8);
    }

    #[test]
    fn test_shade_regions_keeps_input_order() {
        let shades = shade_regions(&[record("Oromia", 312.0), record("Afar", 18.0)]);

        assert_eq!(shades.len(), 2);
        assert_eq!(shades[0].name, "Oromia");
        assert_eq!(shades[0].style.fill_color, "#9e9ac8");
        assert_eq!(shades[1].name, "Afar");
        assert_eq!(shades[1].style.fill_color, "#f2f0f7");
    }

    #[test]
    fn test_info_text() {
        let shades = shade_regions(&[record("Somali", 1250.0)]);
        assert_eq!(shades[0].info_text(), "Somali: 1,250 sites");
    }
}

//! Draw instructions and tooltip labels for proportional symbols

use serde::{Deserialize, Serialize};
use std::fmt;

use idpmap_core::models::{GeoPoint, Observation, SiteId};

/// Shown in the tooltip wherever the source data has no value
pub const LABEL_PLACEHOLDER: &str = "n/a";

/// Visual style of one proportional symbol.
///
/// The defaults are the map's house style: warm fill, thin white stroke,
/// slightly translucent so overlapping symbols stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolStyle {
    /// Fill color as a hex string
    pub fill_color: String,

    /// Stroke color as a hex string
    pub stroke_color: String,

    /// Stroke width in pixels
    pub stroke_weight: f64,

    /// Fill opacity in `[0, 1]`
    pub fill_opacity: f64,
}

impl Default for SymbolStyle {
    fn default() -> Self {
        Self {
            fill_color: "#e34a33".to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_weight: 1.0,
            fill_opacity: 0.8,
        }
    }
}

/// The structured tooltip content for one rendered symbol.
///
/// Every field is already display-ready text: absent source values become
/// the placeholder, counts get digit grouping. How the frontend lays the
/// text out is its own business; [`SymbolLabel::lines`] is the canonical
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolLabel {
    /// Site display name
    pub site_name: String,

    /// Administrative region
    pub region: String,

    /// Survey date of the resolved observation
    pub survey_date: String,

    /// Population count, digit-grouped
    pub population: String,

    /// Household count, digit-grouped
    pub households: String,

    /// Site classification
    pub site_type: String,

    /// Reported displacement reason
    pub reason: String,
}

impl SymbolLabel {
    /// Build the label for an observation, defaulting absent values
    pub fn for_observation(observation: &Observation) -> Self {
        Self {
            site_name: text_or_placeholder(observation.site_name.as_deref()),
            region: text_or_placeholder(observation.region.as_deref()),
            survey_date: observation.survey_date.to_string(),
            population: count_or_placeholder(observation.population),
            households: count_or_placeholder(observation.households),
            site_type: text_or_placeholder(observation.site_type.as_deref()),
            reason: text_or_placeholder(observation.reason.as_deref()),
        }
    }

    /// Tooltip lines in canonical order
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} ({})", self.site_name, self.region),
            format!("Surveyed: {}", self.survey_date),
            format!("Population: {}", self.population),
            format!("Households: {}", self.households),
            format!("Type: {}", self.site_type),
            format!("Reason: {}", self.reason),
        ]
    }
}

impl fmt::Display for SymbolLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// One directive to the map frontend: place one styled, sized symbol with
/// its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    /// Site the symbol belongs to
    pub site_id: SiteId,

    /// Where to place the symbol
    pub location: GeoPoint,

    /// Symbol radius in pixels
    pub radius: f64,

    /// Visual style
    pub style: SymbolStyle,

    /// Tooltip content
    pub label: SymbolLabel,
}

fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) => text.to_string(),
        None => LABEL_PLACEHOLDER.to_string(),
    }
}

fn count_or_placeholder(value: Option<f64>) -> String {
    match value {
        Some(count) => format_count(count),
        None => LABEL_PLACEHOLDER.to_string(),
    }
}

/// Format a count with thousands separators (`12345` -> `"12,345"`).
/// Non-integral or negative values pass through unformatted.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return value.to_string();
    }

    let digits = (value as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

//! Proportional-symbol legend
//!
//! A fixed ladder of representative populations, each sized with the same
//! scale the live symbols use. The ladder is illustrative: its values need
//! not occur in the data, only the scaling must match the map.

use serde::{Deserialize, Serialize};

use idpmap_core::scale::RadiusScale;

use crate::symbol::format_count;

/// Representative populations shown in the legend, ascending
pub const LEGEND_POPULATIONS: [f64; 4] = [1_000.0, 10_000.0, 50_000.0, 100_000.0];

/// One legend entry: a circle of `radius` pixels labelled with its population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSwatch {
    /// Representative population value
    pub population: f64,

    /// Swatch radius in pixels, from the shared scale
    pub radius: f64,

    /// Display label (`"10,000"`)
    pub label: String,
}

/// Build the legend swatches against the dataset maximum.
pub fn symbol_legend(scale: &RadiusScale, max_population: f64) -> Vec<LegendSwatch> {
    LEGEND_POPULATIONS
        .iter()
        .map(|&population| LegendSwatch {
            population,
            radius: scale.radius(Some(population), max_population),
            label: format_count(population),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use idpmap_core::scale::{MAX_RADIUS, MIN_RADIUS};

    #[test]
    fn test_one_swatch_per_representative_population() {
        let swatches = symbol_legend(&RadiusScale::default(), 100_000.0);

        assert_eq!(swatches.len(), LEGEND_POPULATIONS.len());
        assert_eq!(swatches[0].population, 1_000.0);
        assert_eq!(swatches[0].label, "1,000");
        assert_eq!(swatches[3].label, "100,000");
    }

    #[test]
    fn test_swatch_radii_are_non_decreasing() {
        let swatches = symbol_legend(&RadiusScale::default(), 100_000.0);

        for pair in swatches.windows(2) {
            assert!(pair[0].radius <= pair[1].radius);
        }
        // The ladder's top value holds the dataset maximum here, so it
        // fills the radius span.
        assert_eq!(swatches[3].radius, MAX_RADIUS);
    }

    #[test]
    fn test_swatches_saturate_above_the_dataset_maximum() {
        // With a small dataset maximum, the upper ladder values all clamp
        // to the full radius rather than growing past it.
        let swatches = symbol_legend(&RadiusScale::default(), 5_000.0);

        assert_eq!(swatches[1].radius, MAX_RADIUS);
        assert_eq!(swatches[2].radius, MAX_RADIUS);
        assert_eq!(swatches[3].radius, MAX_RADIUS);
    }

    #[test]
    fn test_empty_dataset_floors_every_swatch() {
        let swatches = symbol_legend(&RadiusScale::default(), 0.0);

        for swatch in swatches {
            assert_eq!(swatch.radius, MIN_RADIUS);
        }
    }
}

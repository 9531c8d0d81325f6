use std::sync::Arc;

use axum::{extract::State, Json};

use idpmap_render::{legend_bands, symbol_legend};

use crate::dto::LegendResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Legend content: proportional swatches scaled against the live dataset
/// maximum, plus the fixed choropleth bands.
pub async fn get_legend(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LegendResponse>, ApiError> {
    let index = state.site_index()?;
    let max_population = index.max_population();

    Ok(Json(LegendResponse {
        symbols: symbol_legend(state.renderer.scale(), max_population),
        max_population,
        regions: legend_bands(),
    }))
}

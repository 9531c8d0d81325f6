use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::ChoroplethResponse;
use crate::error::ApiError;
use crate::state::{AppState, RegionData};

/// Shaded regions for the static aggregate map. 404 when no region source
/// is configured, 503 when the configured source failed to load.
pub async fn get_choropleth(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChoroplethResponse>, ApiError> {
    match &state.regions {
        RegionData::Ready(regions) => Ok(Json(ChoroplethResponse {
            count: regions.len(),
            regions: regions.clone(),
        })),
        RegionData::Unconfigured => Err(ApiError::not_found("No region dataset configured")),
        RegionData::Failed { message } => Err(ApiError::service_unavailable(
            "Region dataset failed to load",
        )
        .with_details(message.clone())),
    }
}

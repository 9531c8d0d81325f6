use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::TimelineResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimelineResponse>, ApiError> {
    let index = state.site_index()?;
    let timeline = index.timeline();

    Ok(Json(TimelineResponse {
        dates: timeline.dates().to_vec(),
        count: timeline.len(),
        enabled: !timeline.is_empty(),
    }))
}

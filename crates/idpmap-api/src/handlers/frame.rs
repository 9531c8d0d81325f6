use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::FrameResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Render the frame at `position`. Out-of-range positions clamp to the
/// last timeline position instead of erroring; 404 only when the timeline
/// is empty.
pub async fn get_frame(
    State(state): State<Arc<AppState>>,
    Path(position): Path<usize>,
) -> Result<Json<FrameResponse>, ApiError> {
    let index = state.site_index()?;

    let clamped = state.navigator.read().await.clamp(position);

    let frame = state
        .renderer
        .frame_at(index, clamped)
        .ok_or_else(|| ApiError::not_found("Timeline is empty"))?;

    Ok(Json(FrameResponse::from(frame)))
}

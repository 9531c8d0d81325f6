use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{FrameResponse, NavigatorRequest, NavigatorResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_navigator(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigatorResponse>, ApiError> {
    let index = state.site_index()?;
    let navigator = state.navigator.read().await;

    Ok(Json(NavigatorResponse {
        position: navigator.position(),
        date: index.timeline().get(navigator.position()).cloned(),
        len: navigator.len(),
        enabled: navigator.enabled(),
    }))
}

/// Move the slider. The requested position is clamped into range, stored,
/// and the frame at the new position is rendered immediately.
pub async fn set_navigator(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NavigatorRequest>,
) -> Result<Json<FrameResponse>, ApiError> {
    tracing::info!(requested = request.position, "Moving navigator");

    let index = state.site_index()?;

    let position = {
        let mut navigator = state.navigator.write().await;
        navigator.jump_to(request.position)
    };

    let frame = state
        .renderer
        .frame_at(index, position)
        .ok_or_else(|| ApiError::not_found("Timeline is empty"))?;

    Ok(Json(FrameResponse::from(frame)))
}

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{DatasetSummary, StatusResponse};
use crate::state::{AppState, RegionData, SiteData};

/// Report load state of both datasets. Always 200; a failed load shows up
/// as the error label, not as an HTTP error.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (sites_loaded, sites_error, dataset) = match &state.sites {
        SiteData::Ready(index) => (true, None, Some(DatasetSummary::for_index(index))),
        SiteData::Failed { message } => (false, Some(message.clone()), None),
    };

    let (regions_loaded, regions_error, region_count) = match &state.regions {
        RegionData::Ready(regions) => (true, None, Some(regions.len())),
        RegionData::Unconfigured => (false, None, None),
        RegionData::Failed { message } => (false, Some(message.clone()), None),
    };

    Json(StatusResponse {
        sites_loaded,
        sites_error,
        dataset,
        regions_loaded,
        regions_error,
        region_count,
    })
}

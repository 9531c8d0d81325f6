mod request;
mod response;

pub use request::NavigatorRequest;
pub use response::{
    ChoroplethResponse, DatasetSummary, FrameResponse, HealthResponse, LegendResponse,
    NavigatorResponse, StatusResponse, TimelineResponse,
};

use serde::Deserialize;

/// Navigator update request body
#[derive(Debug, Deserialize)]
pub struct NavigatorRequest {
    pub position: usize,
}

use idpmap_core::index::SiteIndex;
use idpmap_core::navigator::TimeNavigator;
use idpmap_render::{RegionShade, SymbolRenderer};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Outcome of the one-shot site dataset load. A failed load keeps the
/// server running; data endpoints answer 503 until restart.
#[derive(Debug)]
pub enum SiteData {
    Ready(SiteIndex),
    Failed { message: String },
}

/// Outcome of the optional region dataset load.
#[derive(Debug)]
pub enum RegionData {
    Ready(Vec<RegionShade>),
    Unconfigured,
    Failed { message: String },
}

pub struct AppState {
    pub sites: SiteData,
    pub regions: RegionData,
    pub renderer: SymbolRenderer,
    pub navigator: RwLock<TimeNavigator>,
}

impl AppState {
    pub fn new(sites: SiteData, regions: RegionData, renderer: SymbolRenderer) -> Self {
        let navigator = match &sites {
            SiteData::Ready(index) => TimeNavigator::for_timeline(index.timeline()),
            SiteData::Failed { .. } => TimeNavigator::new(0),
        };

        Self {
            sites,
            regions,
            renderer,
            navigator: RwLock::new(navigator),
        }
    }

    /// Site index for data endpoints, or the 503 carrying the load failure.
    pub fn site_index(&self) -> Result<&SiteIndex, ApiError> {
        match &self.sites {
            SiteData::Ready(index) => Ok(index),
            SiteData::Failed { message } => Err(ApiError::service_unavailable(
                "Site dataset failed to load",
            )
            .with_details(message.clone())),
        }
    }
}

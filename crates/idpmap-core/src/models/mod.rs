//! Domain models for displacement-site survey data

pub mod bounds;
pub mod observation;
pub mod region;
pub mod series;

pub use bounds::GeoBounds;
pub use observation::{DateStamp, GeoPoint, Observation, SiteId};
pub use region::RegionRecord;
pub use series::SiteSeries;

mod choropleth;
mod frame;
mod health;
mod legend;
mod navigator;
mod status;
mod timeline;

pub use choropleth::get_choropleth;
pub use frame::get_frame;
pub use health::health_check;
pub use legend::get_legend;
pub use navigator::{get_navigator, set_navigator};
pub use status::get_status;
pub use timeline::get_timeline;

//! idpmap Render - Frame, legend and choropleth generation
//!
//! This crate turns a built site index into what the map frontend actually
//! paints: per-date symbol frames with styles and tooltip labels, the
//! proportional legend, and the static regional choropleth.

pub mod choropleth;
pub mod frame;
pub mod legend;
pub mod symbol;

pub use choropleth::{
    color_for, legend_bands, shade_regions, ChoroplethBand, RegionShade, RegionStyle,
};
pub use frame::{SymbolFrame, SymbolRenderer};
pub use legend::{symbol_legend, LegendSwatch, LEGEND_POPULATIONS};
pub use symbol::{format_count, DrawInstruction, SymbolLabel, SymbolStyle, LABEL_PLACEHOLDER};

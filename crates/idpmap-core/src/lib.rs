//! idpmap Core - Temporal indexing and scaling for displacement-site survey maps
//!
//! This crate contains the domain logic behind the time-slider map: parsing the
//! survey GeoJSON products, building the per-site temporal index, resolving
//! observations by date, mapping populations to symbol radii, and tracking the
//! slider position. Everything downstream of the one async load step is pure
//! and synchronous.

pub mod config;
pub mod error;
pub mod formats;
pub mod index;
pub mod load;
pub mod models;
pub mod navigator;
pub mod scale;

pub use error::{MapError, Result};

//! Core types and pure rendering pipeline for the monthly global
//! land-surface temperature heat map.
//!
//! Data flows through the modules in this order:
//!
//! 1. [`source`]: dataset URL, status checks and JSON decoding
//!    (plus a `reqwest` client behind the `api` feature).
//! 2. [`transform`]: records into render-ready [`transform::Cell`]s.
//! 3. [`range`]: min/max temperature across all cells.
//! 4. [`scale`] and [`color`]: year/month band scales and the diverging
//!    color scale.
//! 5. [`scene`]: positioned, colored cells plus axes and legend.
//! 6. [`interaction`]: hover state and tooltip text.
//!
//! [`state`] owns the fetched dataset and its loading lifecycle.

pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod range;
pub mod scale;
pub mod scene;
pub mod source;
pub mod state;
pub mod transform;

pub use config::HeatMapConfig;
pub use dataset::{Dataset, Record};
pub use error::HeatMapError;

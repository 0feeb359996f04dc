//! moodchart-rs: aggregation, layout and interaction core of a music and
//! mental-health survey dashboard.
//!
//! The crate turns survey rows into three chart scenes (a severity heatmap, a
//! star chart of per-effect profiles and a genre-to-effect Sankey diagram)
//! and updates them in response to host events. Drawing is left to a
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod io;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig};
pub use error::{DashboardError, DashboardResult};

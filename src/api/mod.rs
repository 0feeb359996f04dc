//! Chart scene builders and the dashboard facade.

mod dashboard;
mod dashboard_config;
mod events;
mod heatmap_chart;
mod json_contract;
mod render_style;
mod sankey_chart;
mod star_chart;
mod validation;

pub use dashboard::Dashboard;
pub use dashboard_config::{
    DashboardConfig, HeatmapLayoutConfig, InteractionBehavior, SankeyLayoutConfig,
    StarLayoutConfig,
};
pub use events::{HitBox, HitRegion, HitShape, HostEvent, ScheduledTimer, TimerToken};
pub use heatmap_chart::{HEATMAP_CAPTION, HEATMAP_HINT, HEATMAP_TITLE, HeatmapChart};
pub use json_contract::{FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use render_style::DashboardPalette;
pub use sankey_chart::{
    SANKEY_EFFECT_HEADING, SANKEY_GENRE_HEADING, SANKEY_HINT, SANKEY_TITLE, SankeyChart,
};
pub use star_chart::{STAR_HINT, STAR_LEGEND_TITLE, STAR_TITLE, StarChart, StarPolygon};

pub mod aggregate;
pub mod radial;
pub mod record;
pub mod record_store;
pub mod sankey;
pub mod scale;
pub mod types;

pub use aggregate::{
    AggregateCell, FlowEdge, FlowGraph, FlowNode, FlowNodeKind, GroupProfile, HeatmapAggregate,
    aggregate_flow, aggregate_group_profiles, aggregate_heatmap,
};
pub use radial::{RadialPolygon, axis_angle, radial_polygon, radial_vertex};
pub use record::{
    Condition, Dimension, EffectValue, MusicEffect, RawRecord, SurveyRecord, parse_numeric,
};
pub use record_store::{BPM_EXCLUSION_THRESHOLD, RecordStore};
pub use sankey::{
    LinkPath, SankeyColumn, SankeyEdgeLayout, SankeyLayout, SankeyNodeLayout,
    compute_sankey_layout,
};
pub use scale::{Band, BandScale, LinearScale};
pub use types::{Extent, Point, Viewport};

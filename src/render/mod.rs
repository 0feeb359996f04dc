mod frame;
mod null_renderer;
mod primitives;
mod scene;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LinkPrimitive, PolygonPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use scene::{ChartKind, ChartScene, ClippedLayer};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::DashboardResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully built, validated-on-demand `RenderFrame`, so
/// drawing code stays isolated from aggregation and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()>;
}

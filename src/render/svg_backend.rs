use std::fmt::Write as _;

use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    ChartScene, CirclePrimitive, ClippedLayer, Color, LinePrimitive, PolygonPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub links_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes each frame into a standalone SVG document.
#[derive(Debug)]
pub struct SvgRenderer {
    document: String,
    background: Color,
    last_stats: SvgRenderStats,
    clip_counter: usize,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            document: String::new(),
            background: Color::WHITE,
            last_stats: SvgRenderStats::default(),
            clip_counter: 0,
        }
    }
}

fn write_error(err: std::fmt::Error) -> DashboardError {
    DashboardError::InvalidData(format!("failed to write svg document: {err}"))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn polygon_points(polygon: &PolygonPrimitive) -> String {
    polygon
        .points
        .iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl SvgRenderer {
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the last successful `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn set_background(&mut self, color: Color) -> DashboardResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_hex(),
            line.stroke_width
        )
    }

    fn write_polygon(out: &mut String, polygon: &PolygonPrimitive) -> std::fmt::Result {
        let fill = polygon.fill.map_or("none".to_owned(), Color::to_hex);
        writeln!(
            out,
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            polygon_points(polygon),
            fill,
            polygon.stroke.to_hex(),
            polygon.stroke_width
        )
    }

    fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
        let fill = circle.fill.map_or("none".to_owned(), Color::to_hex);
        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            circle.center.x,
            circle.center.y,
            circle.radius,
            fill,
            circle.stroke.to_hex(),
            circle.stroke_width
        )
    }

    fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
        let weight = if text.bold { "bold" } else { "normal" };
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}""#,
            text.x,
            text.y,
            text.font_size_px,
            weight,
            text.color.to_hex(),
            anchor(text.h_align)
        )?;
        if text.rotation_deg != 0.0 {
            write!(
                out,
                r#" transform="rotate({}, {}, {})""#,
                text.rotation_deg, text.x, text.y
            )?;
        }
        writeln!(out, ">{}</text>", escape(&text.text))
    }

    fn write_clipped(&mut self, out: &mut String, layer: &ClippedLayer) -> std::fmt::Result {
        self.clip_counter += 1;
        let id = format!("lens-clip-{}", self.clip_counter);
        writeln!(
            out,
            r#"<clipPath id="{id}"><circle cx="{}" cy="{}" r="{}"/></clipPath>"#,
            layer.clip_center.x, layer.clip_center.y, layer.clip_radius
        )?;
        writeln!(out, r#"<g clip-path="url(#{id})">"#)?;
        for line in &layer.lines {
            Self::write_line(out, line)?;
        }
        for polygon in &layer.polygons {
            Self::write_polygon(out, polygon)?;
        }
        for text in &layer.texts {
            Self::write_text(out, text)?;
        }
        writeln!(out, "</g>")
    }

    fn write_scene(
        &mut self,
        out: &mut String,
        scene: &ChartScene,
        stats: &mut SvgRenderStats,
    ) -> std::fmt::Result {
        writeln!(out, r#"<g class="{:?}">"#, scene.kind)?;
        for link in &scene.links {
            writeln!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                link.path.to_svg_path(),
                link.color.to_hex(),
                link.opacity,
                link.stroke_width
            )?;
            stats.links_drawn += 1;
        }
        for rect in &scene.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.fill.to_hex()
            )?;
            if let Some(stroke) = rect.stroke {
                write!(
                    out,
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.to_hex(),
                    rect.stroke_width
                )?;
            }
            writeln!(out, "/>")?;
            stats.rects_drawn += 1;
        }
        for line in &scene.lines {
            Self::write_line(out, line)?;
            stats.lines_drawn += 1;
        }
        for polygon in &scene.polygons {
            Self::write_polygon(out, polygon)?;
            stats.polygons_drawn += 1;
        }
        for circle in &scene.circles {
            Self::write_circle(out, circle)?;
            stats.circles_drawn += 1;
        }
        for text in &scene.texts {
            Self::write_text(out, text)?;
            stats.texts_drawn += 1;
        }
        for layer in &scene.clipped {
            self.write_clipped(out, layer)?;
        }
        writeln!(out, "</g>")
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.background.validate()?;
        self.clip_counter = 0;

        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.viewport.width,
            h = frame.viewport.height
        )
        .map_err(write_error)?;
        writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.background.to_hex()
        )
        .map_err(write_error)?;
        for scene in &frame.scenes {
            self.write_scene(&mut out, scene, &mut stats)
                .map_err(write_error)?;
        }
        writeln!(out, "</svg>").map_err(write_error)?;

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

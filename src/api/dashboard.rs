use tracing::{debug, warn};

use crate::core::{Point, RecordStore};
use crate::error::{DashboardError, DashboardResult};
use crate::io::RecordSource;
use crate::render::{ChartKind, RenderFrame, Renderer};

use super::{
    DashboardConfig, HeatmapChart, HitBox, HitRegion, HostEvent, SankeyChart, ScheduledTimer,
    StarChart, TimerToken,
};

/// Owns the record store, the three charts and the renderer of one session.
///
/// Every handler runs to completion on `&mut self`. Charts never read each
/// other's state; they only share the immutable store.
pub struct Dashboard<R: Renderer> {
    config: DashboardConfig,
    store: RecordStore,
    renderer: R,
    heatmap: HeatmapChart,
    star: StarChart,
    sankey: SankeyChart,
    generation: u64,
}

impl<R: Renderer> Dashboard<R> {
    /// Loads all rows from `source`, builds the charts and renders once.
    ///
    /// A failing source is reported as [`DashboardError::Load`] and nothing is
    /// drawn.
    pub fn load<S: RecordSource + ?Sized>(
        source: &mut S,
        renderer: R,
        config: DashboardConfig,
        now: f64,
    ) -> DashboardResult<Self> {
        config.validate()?;
        let rows = source.load().map_err(|err| {
            warn!(error = %err, "survey data load failed");
            match err {
                DashboardError::Load(_) => err,
                other => DashboardError::Load(other.to_string()),
            }
        })?;
        Self::from_store(RecordStore::from_raw(&rows), renderer, config, now)
    }

    /// Builds the charts over an already prepared store and renders once.
    pub fn from_store(
        store: RecordStore,
        renderer: R,
        config: DashboardConfig,
        now: f64,
    ) -> DashboardResult<Self> {
        config.validate()?;
        let heatmap = HeatmapChart::build(&store, &config, now)?;
        let star = StarChart::build(&store, &config, now)?;
        let sankey = SankeyChart::build(&store, &config, now)?;
        let mut dashboard = Self {
            config,
            store,
            renderer,
            heatmap,
            star,
            sankey,
            generation: 0,
        };
        debug!(
            records = dashboard.store.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "dashboard built"
        );
        dashboard.render()?;
        Ok(dashboard)
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub fn heatmap(&self) -> &HeatmapChart {
        &self.heatmap
    }

    #[must_use]
    pub fn star_chart(&self) -> &StarChart {
        &self.star
    }

    #[must_use]
    pub fn sankey(&self) -> &SankeyChart {
        &self.sankey
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Session generation; bumped by every rebuild.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current frame, without drawing it.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(self.config.viewport)
            .with_scene(self.heatmap.scene())
            .with_scene(self.star.scene())
            .with_scene(self.sankey.scene())
    }

    pub fn render(&mut self) -> DashboardResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    /// Hint timeouts the host still has to deliver for this generation.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<ScheduledTimer> {
        [
            (ChartKind::Heatmap, self.heatmap.hint()),
            (ChartKind::StarChart, self.star.hint()),
            (ChartKind::Sankey, self.sankey.hint()),
        ]
        .into_iter()
        .filter(|(_, hint)| !hint.timeout_elapsed())
        .map(|(chart, hint)| ScheduledTimer {
            token: TimerToken {
                chart,
                generation: self.generation,
            },
            fire_at: hint.deadline(),
        })
        .collect()
    }

    #[must_use]
    pub fn hit_regions(&self) -> Vec<HitBox> {
        let mut regions = self.heatmap.hit_regions();
        regions.extend(self.sankey.hit_regions());
        regions.extend(self.star.hit_regions());
        regions
    }

    /// Named region under `(x, y)`, if any.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitRegion> {
        self.hit_regions()
            .into_iter()
            .find(|hit| hit.shape.contains(x, y))
            .map(|hit| hit.region)
    }

    /// Applies one host event and re-renders when the scene changed.
    ///
    /// Returns `true` when a new frame was drawn.
    pub fn handle_event(&mut self, event: HostEvent) -> DashboardResult<bool> {
        let changed = match event {
            HostEvent::Resize { viewport, now } => {
                self.rebuild(self.config.with_viewport(viewport), now)?;
                true
            }
            HostEvent::PointerEnter { region, x, y, now }
            | HostEvent::PointerMove { region, x, y, now } => match region {
                HitRegion::StarChart => self.star.on_pointer_move(Point::new(x, y), now),
                HitRegion::SankeyNode(index) => self.sankey.on_node_enter(index, now)?,
                HitRegion::HeatmapLabel(_) => false,
            },
            HostEvent::PointerLeave { region, .. } => match region {
                HitRegion::StarChart => self.star.on_pointer_leave(),
                HitRegion::SankeyNode(_) => self.sankey.on_node_leave(),
                HitRegion::HeatmapLabel(_) => false,
            },
            HostEvent::Click { region, now } => match region {
                HitRegion::HeatmapLabel(label) => self.heatmap.on_label_clicked(&label, now)?,
                HitRegion::SankeyNode(_) | HitRegion::StarChart => false,
            },
            HostEvent::TimerFired { token, now } => self.on_timer_fired(token, now),
        };
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    fn on_timer_fired(&mut self, token: TimerToken, now: f64) -> bool {
        if token.generation != self.generation {
            warn!(
                chart = ?token.chart,
                token_generation = token.generation,
                generation = self.generation,
                "ignoring stale hint timer"
            );
            return false;
        }
        match token.chart {
            ChartKind::Heatmap => self.heatmap.on_timer_fired(now),
            ChartKind::StarChart => self.star.on_timer_fired(now),
            ChartKind::Sankey => self.sankey.on_timer_fired(now),
        }
    }

    /// Full rebuild from the retained store; hints restart at `now`.
    fn rebuild(&mut self, config: DashboardConfig, now: f64) -> DashboardResult<()> {
        config.validate()?;
        let heatmap = HeatmapChart::build(&self.store, &config, now)?;
        let star = StarChart::build(&self.store, &config, now)?;
        let sankey = SankeyChart::build(&self.store, &config, now)?;
        self.config = config;
        self.heatmap = heatmap;
        self.star = star;
        self.sankey = sankey;
        self.generation += 1;
        debug!(
            generation = self.generation,
            width = config.viewport.width,
            height = config.viewport.height,
            "dashboard rebuilt"
        );
        Ok(())
    }
}

use moodchart_rs::api::{Dashboard, DashboardConfig, HitRegion, HostEvent};
use moodchart_rs::core::{
    Condition, Dimension, EffectValue, MusicEffect, RecordStore, SurveyRecord, Viewport,
};
use moodchart_rs::interaction::AxisLabel;
use moodchart_rs::render::NullRenderer;

const GENRES: [&str; 5] = ["Rock", "Jazz", "Pop", "Lofi", "Metal"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = moodchart_rs::telemetry::init_default_tracing();

    let records = (0..60)
        .map(|i| {
            let t = i as f64;
            let effect = match i % 5 {
                0..=2 => MusicEffect::Improve,
                3 => MusicEffect::NoEffect,
                _ => MusicEffect::Worsen,
            };
            Condition::ALL.iter().fold(
                SurveyRecord::new(Some(GENRES[i % GENRES.len()]), EffectValue::Recognized(effect))
                    .with_dimension(Dimension::HoursPerDay, Some(1.0 + (t * 0.7) % 8.0))
                    .with_dimension(Dimension::Age, Some(18.0 + (t * 1.3) % 40.0))
                    .with_dimension(Dimension::Bpm, Some(80.0 + (t * 3.1) % 90.0)),
                |record, condition| {
                    let severity = ((i * 7 + condition.index()) % 11) as f64;
                    record.with_severity(*condition, Some(severity))
                },
            )
        })
        .collect();

    let config = DashboardConfig::new(Viewport::new(1280, 900));
    let mut dashboard = Dashboard::from_store(
        RecordStore::from_records(records),
        NullRenderer::default(),
        config,
        0.0,
    )?;
    println!("records kept: {}", dashboard.store().len());
    println!("pending hint timers: {}", dashboard.pending_timers().len());

    dashboard.handle_event(HostEvent::Click {
        region: HitRegion::HeatmapLabel(AxisLabel::Condition(Condition::Depression)),
        now: 2.0,
    })?;
    println!(
        "genres by depression: {:?}",
        dashboard.heatmap().sort_state().genre_order()
    );

    let center = dashboard.star_chart().center();
    dashboard.handle_event(HostEvent::PointerMove {
        region: HitRegion::StarChart,
        x: center.x + 10.0,
        y: center.y,
        now: 3.0,
    })?;
    println!("magnifier active: {}", dashboard.star_chart().magnifier().is_active());

    dashboard.handle_event(HostEvent::PointerEnter {
        region: HitRegion::SankeyNode(0),
        x: 0.0,
        y: 0.0,
        now: 4.0,
    })?;

    let frame = dashboard.frame();
    for scene in &frame.scenes {
        println!(
            "{:?}: rects={} links={} texts={} clipped={}",
            scene.kind,
            scene.rects.len(),
            scene.links.len(),
            scene.texts.len(),
            scene.clipped.len()
        );
    }

    Ok(())
}

use criterion::{Criterion, criterion_group, criterion_main};
use moodchart_rs::api::{Dashboard, DashboardConfig, HitRegion, HostEvent};
use moodchart_rs::core::{
    Condition, Dimension, EffectValue, Extent, MusicEffect, RecordStore, SurveyRecord, Viewport,
    aggregate_flow, aggregate_group_profiles, aggregate_heatmap, compute_sankey_layout,
};
use moodchart_rs::interaction::AxisLabel;
use moodchart_rs::render::NullRenderer;
use std::hint::black_box;

const GENRES: [&str; 16] = [
    "Classical",
    "Country",
    "EDM",
    "Folk",
    "Gospel",
    "Hip hop",
    "Jazz",
    "K pop",
    "Latin",
    "Lofi",
    "Metal",
    "Pop",
    "R&B",
    "Rap",
    "Rock",
    "Video game music",
];

fn synthetic_records(count: usize) -> Vec<SurveyRecord> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let effect = match i % 7 {
                0..=3 => EffectValue::Recognized(MusicEffect::Improve),
                4 | 5 => EffectValue::Recognized(MusicEffect::NoEffect),
                _ => EffectValue::Recognized(MusicEffect::Worsen),
            };
            let bpm = if i % 997 == 0 {
                999_999.0
            } else {
                60.0 + (t * 1.7) % 140.0
            };
            Condition::ALL.iter().enumerate().fold(
                SurveyRecord::new(Some(GENRES[i % GENRES.len()]), effect)
                    .with_dimension(Dimension::HoursPerDay, Some((t * 0.3) % 12.0))
                    .with_dimension(Dimension::Age, Some(16.0 + (t * 0.9) % 50.0))
                    .with_dimension(Dimension::Bpm, Some(bpm)),
                |record, (offset, condition)| {
                    record.with_severity(*condition, Some(((i + offset * 3) % 11) as f64))
                },
            )
        })
        .collect()
}

fn bench_store_and_heatmap_10k(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("store_and_heatmap_10k", |b| {
        b.iter(|| {
            let store = RecordStore::from_records(black_box(records.clone()));
            let _ = aggregate_heatmap(store.records(), &store.genres(), &Condition::ALL);
        })
    });
}

fn bench_group_profiles_10k(c: &mut Criterion) {
    let store = RecordStore::from_records(synthetic_records(10_000));

    c.bench_function("group_profiles_10k", |b| {
        b.iter(|| {
            let _ = aggregate_group_profiles(
                black_box(store.records()),
                &MusicEffect::ALL,
                &Dimension::ALL,
            );
        })
    });
}

fn bench_flow_and_sankey_layout_10k(c: &mut Criterion) {
    let store = RecordStore::from_records(synthetic_records(10_000));
    let genres = store.genres();
    let extent = Extent::new(200.0, 500.0, 1_100.0, 880.0);

    c.bench_function("flow_and_sankey_layout_10k", |b| {
        b.iter(|| {
            let graph = aggregate_flow(black_box(store.records()), &genres, &MusicEffect::ALL);
            let _ = compute_sankey_layout(&graph, black_box(extent), 20.0, 10.0)
                .expect("layout should succeed");
        })
    });
}

fn bench_dashboard_label_click_2k(c: &mut Criterion) {
    let store = RecordStore::from_records(synthetic_records(2_000));
    let config = DashboardConfig::new(Viewport::new(1280, 900));
    let mut dashboard = Dashboard::from_store(store, NullRenderer::default(), config, 0.0)
        .expect("dashboard init");
    let labels: Vec<AxisLabel> = Condition::ALL
        .iter()
        .map(|condition| AxisLabel::Condition(*condition))
        .chain(GENRES.iter().map(|genre| AxisLabel::Genre((*genre).to_owned())))
        .collect();

    c.bench_function("dashboard_label_click_2k", |b| {
        let mut next = 0_usize;
        b.iter(|| {
            let label = labels[next % labels.len()].clone();
            next += 1;
            let _ = dashboard
                .handle_event(HostEvent::Click {
                    region: HitRegion::HeatmapLabel(label),
                    now: 1.0,
                })
                .expect("click should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_store_and_heatmap_10k,
    bench_group_profiles_10k,
    bench_flow_and_sankey_layout_10k,
    bench_dashboard_label_click_2k
);
criterion_main!(benches);

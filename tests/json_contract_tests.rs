use moodchart_rs::api::{
    Dashboard, DashboardConfig, FRAME_JSON_SCHEMA_V1, HEATMAP_TITLE, HeatmapLayoutConfig,
};
use moodchart_rs::core::{RawRecord, Viewport};
use moodchart_rs::io::MemoryRecordSource;
use moodchart_rs::render::{ChartKind, NullRenderer, RenderFrame};

fn rows() -> Vec<RawRecord> {
    let headers = ["Fav genre", "Music effects", "Depression"];
    [["Rock", "Improve", "4"], ["Jazz", "No effect", "2"]]
        .iter()
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .map(|(header, cell)| ((*header).to_owned(), (*cell).to_owned()))
                .collect()
        })
        .collect()
}

fn dashboard() -> Dashboard<NullRenderer> {
    let mut source = MemoryRecordSource::new(rows());
    Dashboard::load(
        &mut source,
        NullRenderer::default(),
        DashboardConfig::new(Viewport::new(900, 600)),
        0.0,
    )
    .expect("dashboard")
}

fn texts(frame: &RenderFrame) -> Vec<String> {
    frame
        .scenes
        .iter()
        .flat_map(|scene| scene.texts.iter().map(|text| text.text.clone()))
        .collect()
}

#[test]
fn frame_contract_carries_schema_version() {
    let json = dashboard()
        .frame_json_contract_v1_pretty()
        .expect("contract");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(value["schema_version"], FRAME_JSON_SCHEMA_V1);
    assert_eq!(value["frame"]["viewport"]["width"], 900);
    assert_eq!(value["frame"]["scenes"].as_array().map(Vec::len), Some(3));
}

#[test]
fn compat_parser_accepts_wrapped_and_bare_frames() {
    let frame = dashboard().frame();

    let wrapped = frame.to_json_contract_v1_pretty().expect("wrapped");
    let bare = frame.to_json_pretty().expect("bare");
    let from_wrapped = RenderFrame::from_json_compat_str(&wrapped).expect("parse wrapped");
    let from_bare = RenderFrame::from_json_compat_str(&bare).expect("parse bare");

    for restored in [&from_wrapped, &from_bare] {
        assert_eq!(restored.viewport, frame.viewport);
        assert_eq!(restored.primitive_count(), frame.primitive_count());
        assert_eq!(texts(restored), texts(&frame));
    }
    assert!(
        from_wrapped
            .scene(ChartKind::Heatmap)
            .and_then(|scene| scene.find_text(HEATMAP_TITLE))
            .is_some()
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(10, 10));
    let json = frame
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");

    assert!(RenderFrame::from_json_compat_str(&json).is_err());
    assert!(RenderFrame::from_json_compat_str("not json").is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = DashboardConfig::new(Viewport::new(1024, 768))
        .with_hint_timeout(3.5)
        .with_heatmap_layout(HeatmapLayoutConfig {
            band_padding: 0.1,
            ..HeatmapLayoutConfig::default()
        });

    let json = config.to_json_pretty().expect("serialize");
    let restored = DashboardConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored.viewport, config.viewport);
    assert_eq!(restored.heatmap, config.heatmap);
    assert_eq!(restored.star, config.star);
    assert_eq!(restored.sankey, config.sankey);
    assert_eq!(restored.interaction.hint_timeout_seconds, 3.5);
    restored.validate().expect("valid");
}

#[test]
fn partial_config_json_uses_defaults() {
    let config =
        DashboardConfig::from_json_str(r#"{"viewport":{"width":800,"height":600}}"#)
            .expect("parse");

    assert_eq!(config, DashboardConfig::new(Viewport::new(800, 600)));
    assert_eq!(config.interaction.hint_timeout_seconds, 10.0);
    assert_eq!(config.interaction.magnifier_factor, 2.0);
}

#[test]
fn invalid_config_values_are_rejected() {
    let config = DashboardConfig::new(Viewport::new(800, 600)).with_hint_timeout(-1.0);
    assert!(config.validate().is_err());

    let mut config = DashboardConfig::new(Viewport::new(800, 600));
    config.sankey.extent_x1_ratio = 0.01;
    assert!(config.validate().is_err());

    let mut config = DashboardConfig::new(Viewport::new(800, 600));
    config.interaction.link_opacity.dimmed = 1.5;
    assert!(config.validate().is_err());

    assert!(DashboardConfig::from_json_str("{}").is_err());
}

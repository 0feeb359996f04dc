use approx::assert_abs_diff_eq;
use moodchart_rs::api::{DashboardConfig, StarChart};
use moodchart_rs::core::{
    Dimension, EffectValue, MusicEffect, Point, RecordStore, SurveyRecord, Viewport,
    radial_vertex,
};

const EPSILON: f64 = 1e-9;

fn survey(effect: MusicEffect, values: [Option<f64>; 7]) -> SurveyRecord {
    Dimension::ALL.iter().zip(values).fold(
        SurveyRecord::new(Some("Rock"), EffectValue::Recognized(effect)),
        |record, (dimension, value)| record.with_dimension(*dimension, value),
    )
}

// Axis order: anxiety, depression, insomnia, ocd, hours, age, bpm.
fn mixed_store() -> RecordStore {
    RecordStore::from_records(vec![
        survey(
            MusicEffect::Improve,
            [
                Some(5.0),
                Some(4.0),
                Some(3.0),
                Some(2.0),
                Some(2.0),
                Some(20.0),
                Some(100.0),
            ],
        ),
        survey(
            MusicEffect::Worsen,
            [
                Some(10.0),
                Some(8.0),
                Some(6.0),
                Some(4.0),
                None,
                Some(80.0),
                Some(150.0),
            ],
        ),
    ])
}

fn square_config() -> DashboardConfig {
    DashboardConfig::new(Viewport::new(1000, 1000))
}

#[test]
fn axis_scales_span_incomplete_records_too() {
    let chart = StarChart::build(&mixed_store(), &square_config(), 0.0).expect("star chart");
    let center = chart.center();
    let polygon_range = 270.0;

    let age = chart.scale(Dimension::Age).expect("age scale");
    assert_eq!(age.domain_max(), 80.0);
    assert_eq!(
        chart.scale(Dimension::Anxiety).map(|scale| scale.domain_max()),
        Some(10.0)
    );

    let improve = &chart.polygons()[0];
    assert_eq!(improve.group, MusicEffect::Improve);
    assert_eq!(improve.vertices.len(), Dimension::ALL.len());

    let anxiety = improve.vertices[0];
    assert_abs_diff_eq!(anxiety.x, center.x, epsilon = EPSILON);
    assert_abs_diff_eq!(
        anxiety.y,
        center.y - 5.0 / 10.0 * polygon_range,
        epsilon = EPSILON
    );

    let expected_age =
        radial_vertex(5, Dimension::ALL.len(), 20.0 / 80.0 * polygon_range, center);
    assert_abs_diff_eq!(improve.vertices[5].x, expected_age.x, epsilon = EPSILON);
    assert_abs_diff_eq!(improve.vertices[5].y, expected_age.y, epsilon = EPSILON);
}

#[test]
fn groups_without_complete_records_draw_no_polygon() {
    let chart = StarChart::build(&mixed_store(), &square_config(), 0.0).expect("star chart");

    let groups: Vec<MusicEffect> = chart.polygons().iter().map(|polygon| polygon.group).collect();
    assert_eq!(groups, vec![MusicEffect::Improve]);

    let profiles = chart.profiles();
    assert_eq!(profiles.len(), MusicEffect::ALL.len());
    for profile in profiles.iter().filter(|profile| profile.group != MusicEffect::Improve) {
        assert_eq!(profile.contributing_records, 0);
        assert_eq!(profile.mean(Dimension::Age), None);
    }
    assert_eq!(chart.scene().polygons.len(), 1);
}

#[test]
fn store_without_complete_records_draws_axes_only() {
    let store = RecordStore::from_records(vec![survey(
        MusicEffect::Worsen,
        [Some(3.0), None, Some(1.0), Some(2.0), Some(4.0), Some(30.0), Some(90.0)],
    )]);
    let chart = StarChart::build(&store, &square_config(), 0.0).expect("star chart");

    assert!(chart.polygons().is_empty());
    let scene = chart.scene();
    assert!(scene.polygons.is_empty());
    assert_eq!(scene.lines.len(), Dimension::ALL.len());
}

#[test]
fn lens_keeps_pointer_fixed_and_scales_distances_by_factor() {
    let mut chart = StarChart::build(&mixed_store(), &square_config(), 0.0).expect("star chart");
    let center = chart.center();
    let pointer = Point::new(center.x + 30.0, center.y);

    assert!(chart.on_pointer_move(pointer, 1.0));
    let view = chart.magnifier().view(center).expect("active lens");
    let factor = view.factor;
    assert_eq!(factor, 2.0);

    let fixed = view.project(pointer);
    assert_abs_diff_eq!(fixed.x, pointer.x, epsilon = EPSILON);
    assert_abs_diff_eq!(fixed.y, pointer.y, epsilon = EPSILON);

    let projected_center = view.project(center);
    assert_abs_diff_eq!(projected_center.x, center.x - 30.0, epsilon = EPSILON);
    assert_abs_diff_eq!(projected_center.y, center.y, epsilon = EPSILON);

    let nearby = view.project(pointer.offset(5.0, -4.0));
    assert_abs_diff_eq!(nearby.x - pointer.x, 5.0 * factor, epsilon = EPSILON);
    assert_abs_diff_eq!(nearby.y - pointer.y, -4.0 * factor, epsilon = EPSILON);

    let scene = chart.scene();
    let layer = &scene.clipped[0];
    assert_eq!(layer.clip_center, pointer);
    let first_axis = layer.lines[0];
    assert_abs_diff_eq!(first_axis.x1, projected_center.x, epsilon = EPSILON);
    assert_abs_diff_eq!(first_axis.y1, projected_center.y, epsilon = EPSILON);
    assert_abs_diff_eq!(
        first_axis.stroke_width,
        scene.lines[0].stroke_width * factor,
        epsilon = EPSILON
    );
}

use moodchart_rs::core::{BandScale, LinearScale, Point, radial_polygon, radial_vertex};

#[test]
fn band_scale_splits_range_into_padded_bands() {
    let scale = BandScale::new(&["a", "b", "c", "d"], (0.0, 100.0), 0.1).expect("valid scale");

    assert!((scale.step() - 25.0).abs() <= 1e-9);
    assert!((scale.bandwidth() - 22.5).abs() <= 1e-9);
    let first = scale.band(&"a").expect("first band");
    assert!((first.start - 1.25).abs() <= 1e-9);
    assert!((first.center() - 12.5).abs() <= 1e-9);
    let last = scale.band(&"d").expect("last band");
    assert!((last.end() - 98.75).abs() <= 1e-9);
    assert_eq!(scale.band(&"z"), None);
}

#[test]
fn band_scale_rederivation_is_identical() {
    let domain = ["Rock", "Jazz", "Pop"];
    let first = BandScale::new(&domain, (40.0, 700.0), 0.05).expect("first");
    let second = BandScale::new(&domain, (40.0, 700.0), 0.05).expect("second");

    assert_eq!(first, second);
    for key in &domain {
        assert_eq!(first.band(key), second.band(key));
    }
}

#[test]
fn reordering_domain_keeps_band_geometry() {
    let original = BandScale::new(&["Rock", "Jazz", "Pop"], (0.0, 90.0), 0.05).expect("original");
    let sorted = BandScale::new(&["Pop", "Rock", "Jazz"], (0.0, 90.0), 0.05).expect("sorted");

    assert_eq!(original.bandwidth(), sorted.bandwidth());
    assert_eq!(original.band(&"Rock"), sorted.band(&"Pop"));
    assert_eq!(original.band(&"Pop"), sorted.band(&"Jazz"));
    assert_eq!(sorted.band_at(0), original.band_at(0));
}

#[test]
fn band_scale_rejects_invalid_padding() {
    assert!(BandScale::new(&["a"], (0.0, 10.0), 1.0).is_err());
    assert!(BandScale::new(&["a"], (0.0, 10.0), f64::NAN).is_err());
    assert!(BandScale::new(&["a"], (0.0, f64::INFINITY), 0.1).is_err());
}

#[test]
fn key_at_resolves_positions_inside_steps() {
    let scale = BandScale::new(&["a", "b"], (0.0, 100.0), 0.2).expect("valid scale");

    assert_eq!(scale.key_at(10.0), Some(&"a"));
    assert_eq!(scale.key_at(75.0), Some(&"b"));
    assert_eq!(scale.key_at(-1.0), None);
    assert_eq!(scale.key_at(150.0), None);
}

#[test]
fn linear_scale_maps_zero_to_range_start() {
    let scale = LinearScale::from_max(10.0, (0.0, 270.0)).expect("valid scale");

    assert_eq!(scale.map(0.0), 0.0);
    assert!((scale.map(5.0) - 135.0).abs() <= 1e-9);
    assert!((scale.map(10.0) - 270.0).abs() <= 1e-9);
}

#[test]
fn linear_scale_requires_positive_max() {
    assert!(LinearScale::from_max(0.0, (0.0, 1.0)).is_err());
    assert!(LinearScale::from_max(-3.0, (0.0, 1.0)).is_err());
    assert!(LinearScale::from_max(f64::NAN, (0.0, 1.0)).is_err());
}

#[test]
fn radial_polygon_requires_every_magnitude() {
    let center = Point::new(50.0, 50.0);

    let polygon = radial_polygon(&[Some(10.0), Some(10.0), Some(10.0)], center).expect("polygon");
    assert_eq!(polygon.len(), 3);
    assert_eq!(polygon[0], radial_vertex(0, 3, 10.0, center));

    assert!(radial_polygon(&[Some(10.0), None, Some(10.0)], center).is_none());
}

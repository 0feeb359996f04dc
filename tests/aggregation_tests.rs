use moodchart_rs::core::{
    Condition, Dimension, EffectValue, Extent, FlowNodeKind, MusicEffect, RecordStore,
    SurveyRecord, aggregate_flow, aggregate_group_profiles, aggregate_heatmap,
    compute_sankey_layout,
};

fn record(genre: &str, effect: MusicEffect) -> SurveyRecord {
    SurveyRecord::new(Some(genre), EffectValue::Recognized(effect))
}

fn complete(genre: &str, effect: MusicEffect, value: f64) -> SurveyRecord {
    Dimension::ALL
        .iter()
        .fold(record(genre, effect), |record, dimension| {
            record.with_dimension(*dimension, Some(value))
        })
}

#[test]
fn heatmap_mean_uses_only_numeric_values() {
    let records = vec![
        record("Rock", MusicEffect::Improve).with_severity(Condition::Anxiety, Some(3.0)),
        record("Rock", MusicEffect::Worsen).with_severity(Condition::Anxiety, Some(5.0)),
        record("Rock", MusicEffect::Improve).with_severity(Condition::Anxiety, None),
        record("Jazz", MusicEffect::Improve).with_severity(Condition::Anxiety, Some(9.0)),
    ];
    let genres = vec!["Rock".to_owned(), "Jazz".to_owned()];

    let aggregate = aggregate_heatmap(&records, &genres, &Condition::ALL);

    let rock = aggregate.cell("Rock", Condition::Anxiety).expect("rock cell");
    assert!((rock.mean.expect("rock mean") - 4.0).abs() <= 1e-9);
    assert_eq!(rock.observations, 2);
    assert_eq!(aggregate.value("Jazz", Condition::Anxiety), Some(9.0));
    assert_eq!(aggregate.len(), genres.len() * Condition::ALL.len());
}

#[test]
fn empty_heatmap_pair_is_no_data() {
    let records = vec![
        record("Rock", MusicEffect::Improve).with_severity(Condition::Ocd, Some(2.0)),
        record("Jazz", MusicEffect::Improve),
    ];
    let genres = vec!["Rock".to_owned(), "Jazz".to_owned()];

    let aggregate = aggregate_heatmap(&records, &genres, &Condition::ALL);

    let jazz = aggregate.cell("Jazz", Condition::Ocd).expect("jazz cell");
    assert_eq!(jazz.mean, None);
    assert_eq!(jazz.observations, 0);
    assert_eq!(aggregate.value("Rock", Condition::Depression), None);
}

#[test]
fn tempo_outliers_never_reach_the_heatmap() {
    let store = RecordStore::from_records(vec![
        record("Rock", MusicEffect::Improve)
            .with_severity(Condition::Anxiety, Some(2.0))
            .with_dimension(Dimension::Bpm, Some(110.0)),
        record("Rock", MusicEffect::Improve)
            .with_severity(Condition::Anxiety, Some(10.0))
            .with_dimension(Dimension::Bpm, Some(5000.0)),
    ]);

    let aggregate = aggregate_heatmap(store.records(), &store.genres(), &Condition::ALL);

    assert_eq!(aggregate.value("Rock", Condition::Anxiety), Some(2.0));
}

#[test]
fn group_profiles_keep_only_complete_records() {
    let records = vec![
        complete("Rock", MusicEffect::Improve, 4.0),
        complete("Rock", MusicEffect::Improve, 8.0).with_severity(Condition::Ocd, None),
    ];

    let profiles = aggregate_group_profiles(&records, &MusicEffect::ALL, &Dimension::ALL);

    assert_eq!(profiles.len(), 3);
    let improve = &profiles[0];
    assert_eq!(improve.group, MusicEffect::Improve);
    assert_eq!(improve.contributing_records, 1);
    for dimension in Dimension::ALL {
        assert_eq!(improve.mean(dimension), Some(4.0));
    }
    assert_eq!(profiles[1].contributing_records, 0);
    assert_eq!(profiles[1].mean(Dimension::Age), None);
}

#[test]
fn unrecognized_effects_are_left_out_of_profiles() {
    let records = vec![
        complete("Rock", MusicEffect::Worsen, 6.0),
        Dimension::ALL.iter().fold(
            SurveyRecord::new(Some("Rock"), EffectValue::Unrecognized("Maybe".to_owned())),
            |record, dimension| record.with_dimension(*dimension, Some(1.0)),
        ),
    ];

    let profiles = aggregate_group_profiles(&records, &MusicEffect::ALL, &Dimension::ALL);
    let total: usize = profiles.iter().map(|profile| profile.contributing_records).sum();

    assert_eq!(total, 1);
    assert_eq!(profiles[2].mean(Dimension::Anxiety), Some(6.0));
}

#[test]
fn flow_edges_count_genre_effect_pairs() {
    let store = RecordStore::from_records(vec![
        record("Rock", MusicEffect::Improve),
        record("Rock", MusicEffect::Improve),
        record("Rock", MusicEffect::Worsen),
        record("Jazz", MusicEffect::NoEffect),
        SurveyRecord::new(Some("Jazz"), EffectValue::Missing),
        SurveyRecord::new(None, EffectValue::Recognized(MusicEffect::Improve)),
    ]);

    let graph = aggregate_flow(store.records(), &store.genres(), &MusicEffect::ALL);

    let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
    assert_eq!(names, vec!["Rock", "Improve", "No effect", "Worsen", "Jazz"]);
    assert_eq!(graph.nodes[0].kind, FlowNodeKind::Genre);
    assert_eq!(
        graph.nodes[3].kind,
        FlowNodeKind::Effect(MusicEffect::Worsen)
    );

    assert_eq!(graph.total_weight(), 4);
    assert!(graph.edges.iter().all(|edge| edge.weight > 0));
    let rock_improve = graph
        .edges
        .iter()
        .find(|edge| edge.source == 0 && edge.target == 1)
        .expect("rock -> improve");
    assert_eq!(rock_improve.weight, 2);
    assert!(
        !graph
            .edges
            .iter()
            .any(|edge| edge.source == 0 && edge.target == 2)
    );
}

#[test]
fn genre_named_like_an_effect_shares_its_node_without_self_loops() {
    let records = vec![
        record("Rock", MusicEffect::Worsen),
        record("Worsen", MusicEffect::Worsen),
        record("Worsen", MusicEffect::Improve),
    ];
    let genres = vec!["Rock".to_owned(), "Worsen".to_owned()];

    let graph = aggregate_flow(&records, &genres, &MusicEffect::ALL);

    let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
    assert_eq!(names, vec!["Rock", "Improve", "No effect", "Worsen"]);
    assert_eq!(graph.nodes[3].kind, FlowNodeKind::Effect(MusicEffect::Worsen));

    let pairs: Vec<(usize, usize, u32)> = graph
        .edges
        .iter()
        .map(|edge| (edge.source, edge.target, edge.weight))
        .collect();
    assert_eq!(pairs, vec![(0, 3, 1), (3, 1, 1)]);
    assert_eq!(graph.total_weight(), 2);

    let layout = compute_sankey_layout(&graph, Extent::new(0.0, 0.0, 100.0, 100.0), 10.0, 10.0)
        .expect("merged node still lays out");
    assert_eq!(layout.nodes.len(), 4);
}

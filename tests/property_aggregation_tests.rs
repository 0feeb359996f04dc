use moodchart_rs::core::{
    BPM_EXCLUSION_THRESHOLD, Condition, Dimension, EffectValue, MusicEffect, RecordStore,
    SurveyRecord, aggregate_flow, aggregate_group_profiles, aggregate_heatmap,
};
use proptest::prelude::*;

const GENRES: [&str; 4] = ["Rock", "Jazz", "Pop", "Lofi"];

fn effect_value(slot: u8) -> EffectValue {
    match slot {
        0 => EffectValue::Recognized(MusicEffect::Improve),
        1 => EffectValue::Recognized(MusicEffect::NoEffect),
        2 => EffectValue::Recognized(MusicEffect::Worsen),
        3 => EffectValue::Unrecognized("Sometimes".to_owned()),
        _ => EffectValue::Missing,
    }
}

fn record_strategy() -> impl Strategy<Value = SurveyRecord> {
    (
        prop::option::of(0usize..GENRES.len()),
        0u8..5,
        prop::array::uniform4(prop::option::of(0.0f64..10.0)),
        prop::option::of(0.0f64..2_000.0),
        prop::option::of(10.0f64..80.0),
    )
        .prop_map(|(genre, effect, severities, bpm, age)| {
            Condition::ALL.iter().zip(severities).fold(
                SurveyRecord::new(genre.map(|index| GENRES[index]), effect_value(effect))
                    .with_dimension(Dimension::Bpm, bpm)
                    .with_dimension(Dimension::Age, age)
                    .with_dimension(Dimension::HoursPerDay, Some(2.0)),
                |record, (condition, value)| record.with_severity(*condition, value),
            )
        })
}

proptest! {
    #[test]
    fn tempo_outliers_never_survive_the_store(
        records in prop::collection::vec(record_strategy(), 0..60)
    ) {
        let total = records.len();
        let store = RecordStore::from_records(records);

        prop_assert_eq!(store.len() + store.excluded_count(), total);
        for record in store.records() {
            prop_assert!(record.bpm().is_none_or(|bpm| bpm < BPM_EXCLUSION_THRESHOLD));
        }
    }

    #[test]
    fn edge_weights_sum_to_counted_records(
        records in prop::collection::vec(record_strategy(), 0..60)
    ) {
        let store = RecordStore::from_records(records);
        let graph = aggregate_flow(store.records(), &store.genres(), &MusicEffect::ALL);

        let counted = store
            .records()
            .iter()
            .filter(|record| {
                record.favorite_genre().is_some() && record.music_effect().recognized().is_some()
            })
            .count();
        prop_assert_eq!(graph.total_weight(), counted as u64);
        prop_assert!(graph.edges.iter().all(|edge| edge.weight > 0));
        prop_assert!(graph.edges.iter().all(|edge| edge.source != edge.target));
    }

    #[test]
    fn heatmap_cells_average_exactly_the_numeric_values(
        records in prop::collection::vec(record_strategy(), 0..60)
    ) {
        let store = RecordStore::from_records(records);
        let genres = store.genres();
        let aggregate = aggregate_heatmap(store.records(), &genres, &Condition::ALL);

        prop_assert_eq!(aggregate.len(), genres.len() * Condition::ALL.len());
        for cell in aggregate.cells() {
            let values: Vec<f64> = store
                .records()
                .iter()
                .filter(|record| record.favorite_genre() == Some(cell.genre.as_str()))
                .filter_map(|record| record.severity(cell.condition))
                .collect();
            prop_assert_eq!(cell.observations, values.len());
            match cell.mean {
                None => prop_assert!(values.is_empty()),
                Some(mean) => {
                    let expected = values.iter().sum::<f64>() / values.len() as f64;
                    prop_assert!((mean - expected).abs() <= 1e-9);
                }
            }
        }
    }

    #[test]
    fn group_profiles_count_only_complete_records(
        records in prop::collection::vec(record_strategy(), 0..60)
    ) {
        let store = RecordStore::from_records(records);
        let profiles =
            aggregate_group_profiles(store.records(), &MusicEffect::ALL, &Dimension::ALL);

        for profile in &profiles {
            let complete = store
                .records()
                .iter()
                .filter(|record| record.music_effect().recognized() == Some(profile.group))
                .filter(|record| record.is_complete(&Dimension::ALL))
                .count();
            prop_assert_eq!(profile.contributing_records, complete);
            for dimension in Dimension::ALL {
                prop_assert_eq!(profile.mean(dimension).is_some(), complete > 0);
            }
        }
    }
}

use moodchart_rs::core::{
    Condition, Dimension, EffectValue, MusicEffect, RawRecord, RecordStore, parse_numeric,
};

fn raw(pairs: &[(&str, &str)]) -> RawRecord {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn survey_row(genre: &str, effect: &str, anxiety: &str, bpm: &str) -> RawRecord {
    raw(&[
        ("Fav genre", genre),
        ("Music effects", effect),
        ("Anxiety", anxiety),
        ("BPM", bpm),
    ])
}

#[test]
fn tempo_outliers_are_dropped_and_missing_tempo_is_kept() {
    let rows = vec![
        survey_row("Rock", "Improve", "7", "120"),
        survey_row("Jazz", "Improve", "4", "9999999"),
        survey_row("Pop", "Worsen", "5", ""),
        survey_row("Lofi", "No effect", "2", "fast"),
        survey_row("Metal", "Improve", "8", "1000"),
        survey_row("Folk", "Improve", "1", "999.5"),
    ];

    let store = RecordStore::from_raw(&rows);

    assert_eq!(store.len(), 4);
    assert_eq!(store.excluded_count(), 2);
    assert_eq!(
        store.genres(),
        vec![
            "Rock".to_owned(),
            "Pop".to_owned(),
            "Lofi".to_owned(),
            "Folk".to_owned()
        ]
    );
    assert!(
        store
            .records()
            .iter()
            .all(|record| record.bpm().is_none_or(|bpm| bpm < 1000.0))
    );
}

#[test]
fn empty_cells_are_absent_not_zero() {
    let store = RecordStore::from_raw(&[survey_row("Rock", "Improve", "", "")]);
    let record = &store.records()[0];

    assert_eq!(record.severity(Condition::Anxiety), None);
    assert_eq!(record.dimension(Dimension::Bpm), None);
    assert_eq!(record.dimension(Dimension::Age), None);
}

#[test]
fn numeric_cells_are_trimmed() {
    assert_eq!(parse_numeric(" 7 "), Some(7.0));
    assert_eq!(parse_numeric("3.5"), Some(3.5));
    assert_eq!(parse_numeric("seven"), None);
    assert_eq!(parse_numeric("NaN"), None);
    assert_eq!(parse_numeric("inf"), None);
}

#[test]
fn effect_labels_match_exactly() {
    let store = RecordStore::from_raw(&[
        survey_row("Rock", "Improve", "1", "100"),
        survey_row("Rock", "improve", "1", "100"),
        survey_row("Rock", "", "1", "100"),
    ]);
    let effects: Vec<&EffectValue> = store
        .records()
        .iter()
        .map(|record| record.music_effect())
        .collect();

    assert_eq!(effects[0], &EffectValue::Recognized(MusicEffect::Improve));
    assert_eq!(effects[1], &EffectValue::Unrecognized("improve".to_owned()));
    assert_eq!(effects[2], &EffectValue::Missing);
}

#[test]
fn blank_genre_is_not_a_genre() {
    let store = RecordStore::from_raw(&[
        survey_row("", "Improve", "1", "100"),
        survey_row("Rock", "Improve", "1", "100"),
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.genres(), vec!["Rock".to_owned()]);
    assert_eq!(store.records()[0].favorite_genre(), None);
}

#[test]
fn non_numeric_tempo_is_kept_like_a_blank_cell() {
    let rows = vec![
        survey_row("Rock", "Improve", "7", "120"),
        survey_row("Jazz", "Improve", "4", ""),
        survey_row("Pop", "Worsen", "5", "n/a"),
        survey_row("Lofi", "No effect", "2", "9999999"),
    ];

    let store = RecordStore::from_raw(&rows);

    assert_eq!(store.len(), 3);
    assert_eq!(store.excluded_count(), 1);
    let pop = store
        .records()
        .iter()
        .find(|record| record.favorite_genre() == Some("Pop"))
        .expect("non-numeric tempo row is kept");
    assert_eq!(pop.bpm(), None);
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One untyped survey row: header name to cell text, in header order.
pub type RawRecord = IndexMap<String, String>;

pub const GENRE_COLUMN: &str = "Fav genre";
pub const EFFECT_COLUMN: &str = "Music effects";

/// Mental-health condition scored by respondents (typically 0..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    Anxiety,
    Depression,
    Insomnia,
    Ocd,
}

impl Condition {
    /// Declaration order used for the initial heatmap rows.
    pub const ALL: [Condition; 4] = [
        Condition::Anxiety,
        Condition::Depression,
        Condition::Insomnia,
        Condition::Ocd,
    ];

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Condition::Anxiety => "Anxiety",
            Condition::Depression => "Depression",
            Condition::Insomnia => "Insomnia",
            Condition::Ocd => "OCD",
        }
    }

    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.column() == name)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Self-reported effect of music on mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicEffect {
    Improve,
    NoEffect,
    Worsen,
}

impl MusicEffect {
    pub const ALL: [MusicEffect; 3] = [
        MusicEffect::Improve,
        MusicEffect::NoEffect,
        MusicEffect::Worsen,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MusicEffect::Improve => "Improve",
            MusicEffect::NoEffect => "No effect",
            MusicEffect::Worsen => "Worsen",
        }
    }

    /// Exact, case-sensitive match against the survey's three answers.
    #[must_use]
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|effect| effect.label() == text)
    }
}

/// Parsed `Music effects` cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectValue {
    Recognized(MusicEffect),
    Unrecognized(String),
    Missing,
}

impl EffectValue {
    #[must_use]
    pub fn parse(text: Option<&str>) -> Self {
        match text {
            None | Some("") => EffectValue::Missing,
            Some(text) => match MusicEffect::from_label(text) {
                Some(effect) => EffectValue::Recognized(effect),
                None => EffectValue::Unrecognized(text.to_owned()),
            },
        }
    }

    #[must_use]
    pub fn recognized(&self) -> Option<MusicEffect> {
        match self {
            EffectValue::Recognized(effect) => Some(*effect),
            EffectValue::Unrecognized(_) | EffectValue::Missing => None,
        }
    }
}

/// Radar axis, in the fixed clockwise order starting at twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Anxiety,
    Depression,
    Insomnia,
    Ocd,
    HoursPerDay,
    Age,
    Bpm,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Anxiety,
        Dimension::Depression,
        Dimension::Insomnia,
        Dimension::Ocd,
        Dimension::HoursPerDay,
        Dimension::Age,
        Dimension::Bpm,
    ];

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Dimension::Anxiety => "Anxiety",
            Dimension::Depression => "Depression",
            Dimension::Insomnia => "Insomnia",
            Dimension::Ocd => "OCD",
            Dimension::HoursPerDay => "Hours per day",
            Dimension::Age => "Age",
            Dimension::Bpm => "BPM",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Anxiety => "Severity of Anxiety",
            Dimension::Depression => "Severity of Depression",
            Dimension::Insomnia => "Severity of Insomnia",
            Dimension::Ocd => "Severity of OCD",
            Dimension::HoursPerDay => "Daily Listening Hours",
            Dimension::Age => "Age of Patient",
            Dimension::Bpm => "Average Music Tempo",
        }
    }

    #[must_use]
    pub const fn condition(self) -> Option<Condition> {
        match self {
            Dimension::Anxiety => Some(Condition::Anxiety),
            Dimension::Depression => Some(Condition::Depression),
            Dimension::Insomnia => Some(Condition::Insomnia),
            Dimension::Ocd => Some(Condition::Ocd),
            Dimension::HoursPerDay | Dimension::Age | Dimension::Bpm => None,
        }
    }
}

/// Parses a cell as a finite number.
///
/// Empty text, non-numeric text and non-finite values all yield `None`; a
/// missing cell is never read as zero.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// One typed survey response. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    favorite_genre: Option<String>,
    music_effect: EffectValue,
    severities: [Option<f64>; 4],
    hours_per_day: Option<f64>,
    age: Option<f64>,
    bpm: Option<f64>,
}

impl SurveyRecord {
    #[must_use]
    pub fn from_raw(raw: &RawRecord) -> Self {
        let numeric = |column: &str| raw.get(column).and_then(|text| parse_numeric(text));
        let favorite_genre = raw
            .get(GENRE_COLUMN)
            .filter(|genre| !genre.is_empty())
            .cloned();

        Self {
            favorite_genre,
            music_effect: EffectValue::parse(raw.get(EFFECT_COLUMN).map(String::as_str)),
            severities: Condition::ALL.map(|condition| numeric(condition.column())),
            hours_per_day: numeric(Dimension::HoursPerDay.column()),
            age: numeric(Dimension::Age.column()),
            bpm: numeric(Dimension::Bpm.column()),
        }
    }

    /// Starts a record with only genre and effect set; see the `with_*` setters.
    #[must_use]
    pub fn new(favorite_genre: Option<&str>, music_effect: EffectValue) -> Self {
        Self {
            favorite_genre: favorite_genre
                .filter(|genre| !genre.is_empty())
                .map(str::to_owned),
            music_effect,
            severities: [None; 4],
            hours_per_day: None,
            age: None,
            bpm: None,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, condition: Condition, value: Option<f64>) -> Self {
        self.severities[condition.index()] = value.filter(|value| value.is_finite());
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension, value: Option<f64>) -> Self {
        let value = value.filter(|value| value.is_finite());
        match dimension {
            Dimension::HoursPerDay => self.hours_per_day = value,
            Dimension::Age => self.age = value,
            Dimension::Bpm => self.bpm = value,
            other => {
                if let Some(condition) = other.condition() {
                    self.severities[condition.index()] = value;
                }
            }
        }
        self
    }

    #[must_use]
    pub fn favorite_genre(&self) -> Option<&str> {
        self.favorite_genre.as_deref()
    }

    #[must_use]
    pub fn music_effect(&self) -> &EffectValue {
        &self.music_effect
    }

    #[must_use]
    pub fn severity(&self, condition: Condition) -> Option<f64> {
        self.severities[condition.index()]
    }

    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::HoursPerDay => self.hours_per_day,
            Dimension::Age => self.age,
            Dimension::Bpm => self.bpm,
            other => other
                .condition()
                .and_then(|condition| self.severity(condition)),
        }
    }

    #[must_use]
    pub fn bpm(&self) -> Option<f64> {
        self.bpm
    }

    /// `true` when every listed dimension holds a number.
    #[must_use]
    pub fn is_complete(&self, dimensions: &[Dimension]) -> bool {
        dimensions
            .iter()
            .all(|dimension| self.dimension(*dimension).is_some())
    }
}

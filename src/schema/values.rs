/// Validated value types — range-checked newtypes for style profile fields.
///
/// Every type here is checked once, at construction, and is immutable
/// afterwards. Deserialization goes through the same constructors, so a RON
/// or JSON document cannot produce an out-of-range value either.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} range is inverted: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// A type whose values are guaranteed to satisfy an invariant.
pub trait Validated: Sized {
    /// The unchecked representation the value is built from.
    type Raw;
    /// Field label used in validation errors.
    const FIELD: &'static str;

    fn make(raw: Self::Raw) -> Result<Self, ValidationError>;

    fn is_valid(raw: &Self::Raw) -> bool;
}

/// Construct a validated value, failing if `raw` violates the invariant of `T`.
pub fn make<T: Validated>(raw: T::Raw) -> Result<T, ValidationError> {
    T::make(raw)
}

/// Check whether `raw` would construct a valid `T`.
pub fn is_valid<T: Validated>(raw: &T::Raw) -> bool {
    T::is_valid(raw)
}

/// Clamp to the unit interval. NaN maps to 0.
pub fn clamp01(value: f64) -> f64 {
    clamp_to(value, 0.0, 1.0)
}

/// Clamp to [0, 100]. NaN maps to 0.
pub fn clamp100(value: f64) -> f64 {
    clamp_to(value, 0.0, 100.0)
}

fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

fn check_bounded(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

macro_rules! bounded_score {
    ($(#[$meta:meta])* $name:ident, $field:literal, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(try_from = "f64", into = "f64")]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            pub fn new(value: f64) -> Result<Self, ValidationError> {
                check_bounded($field, value, $min, $max).map(Self)
            }

            pub fn is_valid(value: f64) -> bool {
                value.is_finite() && ($min..=$max).contains(&value)
            }

            /// Clamp `value` into range first, then construct. NaN becomes the minimum.
            pub fn saturating(value: f64) -> Self {
                Self(clamp_to(value, $min, $max))
            }

            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl Validated for $name {
            type Raw = f64;
            const FIELD: &'static str = $field;

            fn make(raw: f64) -> Result<Self, ValidationError> {
                Self::new(raw)
            }

            fn is_valid(raw: &f64) -> bool {
                $name::is_valid(*raw)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = ValidationError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(score: $name) -> f64 {
                score.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

bounded_score!(
    /// Machine certainty attached to an analyzed field, 0–100.
    ConfidenceScore,
    "confidence",
    0.0,
    100.0
);

bounded_score!(
    /// Narrative pacing, 0 (slow) to 1 (fast).
    PacingScore,
    "pacing_score",
    0.0,
    1.0
);

bounded_score!(
    /// Share of words drawn from the emotion vocabulary, 0–1.
    EmotionDensity,
    "emotion_density",
    0.0,
    1.0
);

bounded_score!(
    /// Type/token ratio of the text, 0–1.
    LexicalComplexity,
    "lexical_complexity",
    0.0,
    1.0
);

bounded_score!(
    /// Sample standard deviation of sentence word counts. Finite, unbounded above.
    SentenceVariance,
    "sentence_variance",
    0.0,
    f64::INFINITY
);

/// A string with at least one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: <Self as Validated>::FIELD,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Validated for NonEmptyString {
    type Raw = String;
    const FIELD: &'static str = "string";

    fn make(raw: String) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn is_valid(raw: &String) -> bool {
        !raw.is_empty()
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> String {
        value.0
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A list with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T>(Vec<T>);

impl<T> NonEmptyList<T> {
    pub fn new(items: Vec<T>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::Empty {
                field: <Self as Validated>::FIELD,
            });
        }
        Ok(Self(items))
    }

    pub fn single(item: T) -> Self {
        Self(vec![item])
    }

    /// Use `items` if non-empty, otherwise a list holding only `fallback`.
    pub fn or_single(items: Vec<T>, fallback: T) -> Self {
        if items.is_empty() {
            Self::single(fallback)
        } else {
            Self(items)
        }
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Validated for NonEmptyList<T> {
    type Raw = Vec<T>;
    const FIELD: &'static str = "list";

    fn make(raw: Vec<T>) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn is_valid(raw: &Vec<T>) -> bool {
        !raw.is_empty()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = ValidationError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T> Deref for NonEmptyList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Serialize> Serialize for NonEmptyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(D::Error::custom)
    }
}

/// An inclusive `(min, max)` pair of scores with `min <= max`.
///
/// Serialized as a two-element tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange<T> {
    min: T,
    max: T,
}

impl<T: Copy + PartialOrd + Into<f64>> ScoreRange<T> {
    pub fn new(min: T, max: T) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvertedRange {
                field: "range",
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.into() && value <= self.max.into()
    }

    pub fn midpoint(&self) -> f64 {
        (self.min.into() + self.max.into()) / 2.0
    }
}

impl<T: Serialize + Copy> Serialize for ScoreRange<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.min, self.max).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for ScoreRange<T>
where
    T: Deserialize<'de> + Copy + PartialOrd + Into<f64>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (min, max) = <(T, T)>::deserialize(deserializer)?;
        Self::new(min, max).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_accepts_bounds() {
        assert_eq!(ConfidenceScore::new(0.0).unwrap().value(), 0.0);
        assert_eq!(ConfidenceScore::new(100.0).unwrap().value(), 100.0);
        assert_eq!(ConfidenceScore::new(42.5).unwrap().value(), 42.5);
    }

    #[test]
    fn confidence_rejects_out_of_range() {
        let err = ConfidenceScore::new(100.5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "confidence",
                value: 100.5,
                min: 0.0,
                max: 100.0,
            }
        );
        assert!(ConfidenceScore::new(-1.0).is_err());
    }

    #[test]
    fn unit_scores_reject_non_finite() {
        assert!(matches!(
            PacingScore::new(f64::NAN),
            Err(ValidationError::NotFinite { field: "pacing_score", .. })
        ));
        assert!(EmotionDensity::new(f64::INFINITY).is_err());
        assert!(LexicalComplexity::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn sentence_variance_is_finite_and_non_negative() {
        assert_eq!(SentenceVariance::new(0.0).unwrap().value(), 0.0);
        assert_eq!(SentenceVariance::new(1e6).unwrap().value(), 1e6);
        assert!(matches!(
            SentenceVariance::new(-5.0),
            Err(ValidationError::OutOfRange { field: "sentence_variance", .. })
        ));
        assert!(matches!(
            SentenceVariance::new(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(!SentenceVariance::is_valid(f64::NAN));
        assert!(serde_json::from_str::<SentenceVariance>("-5.0").is_err());
    }

    #[test]
    fn display_honours_precision() {
        assert_eq!(format!("{:.2}", PacingScore::new(0.3).unwrap()), "0.30");
    }

    #[test]
    fn error_message_names_field_value_and_range() {
        let msg = EmotionDensity::new(1.5).unwrap_err().to_string();
        assert_eq!(msg, "emotion_density must be within [0, 1], got 1.5");
    }

    #[test]
    fn is_valid_matches_constructor() {
        for raw in [-0.1, 0.0, 0.5, 1.0, 1.1, f64::NAN] {
            assert_eq!(PacingScore::is_valid(raw), PacingScore::new(raw).is_ok());
            assert_eq!(is_valid::<PacingScore>(&raw), PacingScore::new(raw).is_ok());
        }
    }

    #[test]
    fn make_dispatches_through_trait() {
        let score: ConfidenceScore = make(70.0).unwrap();
        assert_eq!(score.value(), 70.0);
        let name: Result<NonEmptyString, _> = make(String::new());
        assert_eq!(name.unwrap_err(), ValidationError::Empty { field: "string" });
    }

    #[test]
    fn clamp_helpers() {
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp100(130.0), 100.0);
        assert_eq!(clamp100(-5.0), 0.0);
        assert_eq!(clamp100(55.5), 55.5);
    }

    #[test]
    fn saturating_clamps_before_construction() {
        assert_eq!(ConfidenceScore::saturating(-20.0).value(), 0.0);
        assert_eq!(PacingScore::saturating(2.0).value(), 1.0);
    }

    #[test]
    fn non_empty_string() {
        assert!(NonEmptyString::new("").is_err());
        let s = NonEmptyString::new("Young Adult").unwrap();
        assert_eq!(s.as_str(), "Young Adult");
        assert_eq!(s.len(), 11);
        assert!(is_valid::<NonEmptyString>(&"x".to_string()));
    }

    #[test]
    fn non_empty_list() {
        assert!(NonEmptyList::<u8>::new(Vec::new()).is_err());
        let list = NonEmptyList::new(vec![1, 2, 3]).unwrap();
        assert_eq!(*list.first(), 1);
        assert_eq!(list.len(), 3);

        let fallback = NonEmptyList::or_single(Vec::new(), "none");
        assert_eq!(fallback.as_slice(), &["none"]);
    }

    #[test]
    fn score_range_rejects_inverted() {
        let lo = PacingScore::new(0.8).unwrap();
        let hi = PacingScore::new(0.2).unwrap();
        assert!(matches!(
            ScoreRange::new(lo, hi),
            Err(ValidationError::InvertedRange { .. })
        ));

        let range = ScoreRange::new(hi, lo).unwrap();
        assert!(range.contains(0.5));
        assert!(!range.contains(0.9));
        assert!((range.midpoint() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn deserialize_validates() {
        assert!(ron::from_str::<ConfidenceScore>("101.0").is_err());
        assert!(ron::from_str::<PacingScore>("0.25").is_ok());
        assert!(ron::from_str::<NonEmptyString>("\"\"").is_err());
        assert!(ron::from_str::<NonEmptyList<String>>("[]").is_err());
        assert!(ron::from_str::<ScoreRange<EmotionDensity>>("(0.4, 0.1)").is_err());

        let range: ScoreRange<EmotionDensity> = ron::from_str("(0.1, 0.4)").unwrap();
        assert_eq!(range.min().value(), 0.1);
        assert_eq!(range.max().value(), 0.4);
    }

    #[test]
    fn serialize_as_plain_values() {
        let score = ConfidenceScore::new(80.0).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "80.0");
        let list = NonEmptyList::single("calm".to_string());
        assert_eq!(serde_json::to_string(&list).unwrap(), "[\"calm\"]");
    }
}

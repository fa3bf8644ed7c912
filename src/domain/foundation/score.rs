//! Score value object for feedback sub-scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A numeric feedback score.
///
/// No scale is imposed. The value must be finite so it survives a JSON
/// round trip.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Creates a Score, returning an error naming `field` if the value is not finite.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::non_finite(field));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Score::try_new("score", value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_try_new_accepts_any_finite_value() {
        assert_eq!(Score::try_new("relevance", 8.0).unwrap().value(), 8.0);
        assert_eq!(Score::try_new("relevance", -3.5).unwrap().value(), -3.5);
        assert_eq!(Score::try_new("relevance", 1e9).unwrap().value(), 1e9);
    }

    #[test]
    fn score_try_new_rejects_nan_and_infinity() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Score::try_new("clarity", value) {
                Err(ValidationError::NonFinite { field }) => assert_eq!(field, "clarity"),
                other => panic!("Expected NonFinite, got {:?}", other),
            }
        }
    }

    #[test]
    fn score_displays_number() {
        assert_eq!(format!("{}", Score::try_new("depth", 6.0).unwrap()), "6");
        assert_eq!(format!("{}", Score::try_new("depth", 6.5).unwrap()), "6.5");
    }

    #[test]
    fn score_serializes_transparently() {
        let score = Score::try_new("depth", 7.5).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "7.5");
    }

    #[test]
    fn score_deserializes_from_integer() {
        let score: Score = serde_json::from_str("8").unwrap();
        assert_eq!(score.value(), 8.0);
    }

    #[test]
    fn score_deserialize_rejects_non_numbers() {
        assert!(serde_json::from_str::<Score>("\"8\"").is_err());
        assert!(serde_json::from_str::<Score>("null").is_err());
    }

    #[test]
    fn score_deserialize_rejects_yaml_nan() {
        assert!(serde_yaml::from_str::<Score>(".nan").is_err());
        assert!(serde_yaml::from_str::<Score>(".inf").is_err());
    }
}

//! QuestionType enum: the closed set of interview question categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Category of an interview question.
///
/// The wire literals are case-sensitive and exhaustive: `Technical`,
/// `Behavioral` and `HR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    Technical,
    Behavioral,
    #[serde(rename = "HR")]
    Hr,
}

impl QuestionType {
    /// Wire literals in canonical order.
    pub const LITERALS: [&'static str; 3] = ["Technical", "Behavioral", "HR"];

    /// Returns all question types in canonical order.
    pub fn all() -> &'static [QuestionType] {
        &[
            QuestionType::Technical,
            QuestionType::Behavioral,
            QuestionType::Hr,
        ]
    }

    /// Returns the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "Technical",
            QuestionType::Behavioral => "Behavioral",
            QuestionType::Hr => "HR",
        }
    }
}

impl FromStr for QuestionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_variant("type", s, &Self::LITERALS))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_three_types_in_order() {
        assert_eq!(
            QuestionType::all(),
            &[
                QuestionType::Technical,
                QuestionType::Behavioral,
                QuestionType::Hr
            ]
        );
    }

    #[test]
    fn literals_match_as_str() {
        let literals: Vec<&str> = QuestionType::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(literals, QuestionType::LITERALS);
    }

    #[test]
    fn from_str_accepts_exact_literals() {
        assert_eq!("Technical".parse::<QuestionType>().unwrap(), QuestionType::Technical);
        assert_eq!("Behavioral".parse::<QuestionType>().unwrap(), QuestionType::Behavioral);
        assert_eq!("HR".parse::<QuestionType>().unwrap(), QuestionType::Hr);
    }

    #[test]
    fn from_str_is_case_sensitive() {
        for input in ["technical", "TECHNICAL", "behavioral", "Hr", "hr"] {
            assert!(input.parse::<QuestionType>().is_err(), "accepted {}", input);
        }
    }

    #[test]
    fn from_str_rejects_unknown_literal() {
        match "Coding".parse::<QuestionType>() {
            Err(ValidationError::UnknownVariant { field, value, expected }) => {
                assert_eq!(field, "type");
                assert_eq!(value, "Coding");
                assert_eq!(expected, vec!["Technical", "Behavioral", "HR"]);
            }
            other => panic!("Expected UnknownVariant, got {:?}", other),
        }
    }

    #[test]
    fn displays_wire_literal() {
        assert_eq!(format!("{}", QuestionType::Hr), "HR");
        assert_eq!(format!("{}", QuestionType::Behavioral), "Behavioral");
    }

    #[test]
    fn serializes_to_wire_literal() {
        assert_eq!(serde_json::to_string(&QuestionType::Hr).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::to_string(&QuestionType::Technical).unwrap(),
            "\"Technical\""
        );
    }

    #[test]
    fn deserializes_from_wire_literal() {
        let t: QuestionType = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(t, QuestionType::Hr);
    }

    #[test]
    fn deserialize_rejects_rust_variant_name_and_other_cases() {
        assert!(serde_json::from_str::<QuestionType>("\"Hr\"").is_err());
        assert!(serde_json::from_str::<QuestionType>("\"technical\"").is_err());
        assert!(serde_json::from_str::<QuestionType>("\"Coding\"").is_err());
    }
}

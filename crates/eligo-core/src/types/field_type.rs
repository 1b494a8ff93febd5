//! Field type classification
//!
//! Conditions declare a field's type implicitly through the literal it is
//! compared against; inference collects those declarations into a
//! [`FieldTypeMap`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar type inferred for a referenced field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain integral literal
    Integer,
    /// Numeric literal containing a decimal point
    Double,
    /// Quoted literal
    String,
    /// Literal that fits no other category
    Unknown,
    /// Two occurrences of the field disagreed; absorbing
    Mixed,
}

/// Field name to inferred type, built fresh per inference call
pub type FieldTypeMap = HashMap<String, FieldType>;

impl FieldType {
    /// Classify a raw literal from a condition.
    ///
    /// Numeric literals win over quote checks, so a quoted literal is one
    /// that failed to parse as a number first.
    pub fn classify(literal: &str) -> FieldType {
        // NaN parses as a float in Rust but is not a numeric literal here.
        if matches!(literal.parse::<f64>(), Ok(n) if !n.is_nan()) {
            if literal.contains('.') {
                FieldType::Double
            } else {
                FieldType::Integer
            }
        } else if literal.starts_with('\'') || literal.starts_with('"') {
            FieldType::String
        } else {
            FieldType::Unknown
        }
    }

    /// Merge a later occurrence into this one. Disagreement yields
    /// `Mixed`, and `Mixed` never recovers.
    pub fn merge(self, other: FieldType) -> FieldType {
        if self == other {
            self
        } else {
            FieldType::Mixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(FieldType::classify("30"), FieldType::Integer);
        assert_eq!(FieldType::classify("0"), FieldType::Integer);
        assert_eq!(FieldType::classify("50000"), FieldType::Integer);
    }

    #[test]
    fn test_classify_double() {
        assert_eq!(FieldType::classify("30.5"), FieldType::Double);
        assert_eq!(FieldType::classify("0.25"), FieldType::Double);
    }

    #[test]
    fn test_classify_string() {
        assert_eq!(FieldType::classify("'Sales'"), FieldType::String);
        assert_eq!(FieldType::classify("\"Sales\""), FieldType::String);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(FieldType::classify("active"), FieldType::Unknown);
        assert_eq!(FieldType::classify("NaN"), FieldType::Unknown);
    }

    #[test]
    fn test_merge_agreement_keeps_type() {
        assert_eq!(
            FieldType::Integer.merge(FieldType::Integer),
            FieldType::Integer
        );
        assert_eq!(
            FieldType::String.merge(FieldType::String),
            FieldType::String
        );
    }

    #[test]
    fn test_merge_disagreement_is_mixed() {
        assert_eq!(
            FieldType::Integer.merge(FieldType::String),
            FieldType::Mixed
        );
        assert_eq!(
            FieldType::Double.merge(FieldType::Integer),
            FieldType::Mixed
        );
    }

    #[test]
    fn test_mixed_is_absorbing() {
        let mixed = FieldType::Integer.merge(FieldType::String);
        assert_eq!(mixed.merge(FieldType::Integer), FieldType::Mixed);
        assert_eq!(mixed.merge(FieldType::Mixed), FieldType::Mixed);
    }

    #[test]
    fn test_field_type_serialized_names() {
        assert_eq!(
            serde_json::to_string(&FieldType::Integer).unwrap(),
            "\"integer\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Double).unwrap(),
            "\"double\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Mixed).unwrap(),
            "\"mixed\""
        );
    }
}

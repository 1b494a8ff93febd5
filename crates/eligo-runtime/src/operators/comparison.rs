//! Comparison operator execution
//!
//! Reproduces the comparison rules stored rules were written against: a
//! numeric literal compares numerically and coerces string field values
//! toward numbers; a single-quoted literal compares as a string; equality
//! is strict across types. Anything unresolvable is false.

use std::cmp::Ordering;

use eligo_core::ast::Comparator;
use eligo_core::types::Value;

/// Compare a record field value against a condition literal.
///
/// An absent field never satisfies a condition, and null field values
/// degrade to false so rules tolerate missing data.
pub(crate) fn compare(field: Option<&Value>, comparator: Comparator, literal: &str) -> bool {
    let Some(field) = field else {
        return false;
    };

    if matches!(field, Value::Null) {
        tracing::debug!("null field value never satisfies a condition");
        return false;
    }

    match comparator {
        Comparator::Eq => equals(field, literal),
        _ => ordering(field, comparator, literal),
    }
}

/// Strict equality: a quoted literal matches string values only, a
/// numeric literal matches number values only.
fn equals(field: &Value, literal: &str) -> bool {
    if let Some(unquoted) = unquote(literal) {
        return matches!(field, Value::String(s) if s == unquoted);
    }

    match literal.parse::<f64>() {
        Ok(number) => matches!(field, Value::Number(n) if *n == number),
        Err(_) => false,
    }
}

/// Ordering comparison. A numeric literal pulls the field value toward a
/// number; a non-numeric literal compares lexicographically against
/// string field values, quotes included.
fn ordering(field: &Value, comparator: Comparator, literal: &str) -> bool {
    if let Ok(number) = literal.parse::<f64>() {
        return match to_number(field) {
            Some(value) => ordering_holds(comparator, value.partial_cmp(&number)),
            None => false,
        };
    }

    match field {
        Value::String(s) => ordering_holds(comparator, Some(s.as_str().cmp(literal))),
        other => {
            tracing::debug!(
                "cannot order {:?} against {:?}, returning false",
                other,
                literal
            );
            false
        }
    }
}

fn ordering_holds(comparator: Comparator, ordering: Option<Ordering>) -> bool {
    match (comparator, ordering) {
        (Comparator::Gt, Some(Ordering::Greater)) => true,
        (Comparator::Lt, Some(Ordering::Less)) => true,
        (Comparator::Ge, Some(Ordering::Greater | Ordering::Equal)) => true,
        (Comparator::Le, Some(Ordering::Less | Ordering::Equal)) => true,
        _ => false,
    }
}

/// Numeric coercion for field values: numbers pass through, numeric
/// strings parse (an empty string counts as zero), booleans map to 1/0.
/// Everything else has no numeric form.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(true) => Some(1.0),
        Value::Bool(false) => Some(0.0),
        _ => None,
    }
}

/// Strip the quote pair from a single-quoted literal. The final character
/// is dropped without checking it is a quote; stored rules truncated at
/// the first space rely on that.
fn unquote(literal: &str) -> Option<&str> {
    let inner = literal.strip_prefix('\'')?;
    match inner.char_indices().last() {
        Some((idx, _)) => Some(&inner[..idx]),
        None => Some(inner),
    }
}

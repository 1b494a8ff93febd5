//! Tree evaluator
//!
//! Walks a parsed rule tree against an input record and reports whether
//! the record qualifies. Total over well-formed trees: missing fields,
//! type mismatches, unknown comparators, and absent children all degrade
//! to a non-qualifying `false`.

use eligo_core::ast::{Comparator, Connective, Node};
use eligo_core::types::Record;

use crate::operators;

/// Rule tree evaluator
pub struct Evaluator;

impl Evaluator {
    /// Evaluate a rule tree against an input record.
    pub fn evaluate(node: &Node, record: &Record) -> bool {
        match node {
            Node::Operand { value } => Self::evaluate_condition(value, record),
            Node::Operator { value, left, right } => {
                // Both sides are evaluated unconditionally; the connective
                // combines the two finished results without
                // short-circuiting.
                let left = left.as_deref().map_or(false, |n| Self::evaluate(n, record));
                let right = right
                    .as_deref()
                    .map_or(false, |n| Self::evaluate(n, record));
                match value {
                    Connective::And => left && right,
                    Connective::Or => left || right,
                }
            }
        }
    }

    /// Split a condition into field, comparator, and literal, then
    /// compare. The first three whitespace-separated fragments are used;
    /// anything past the literal is ignored.
    fn evaluate_condition(condition: &str, record: &Record) -> bool {
        let mut parts = condition.split_whitespace();
        let (Some(field), Some(op), Some(literal)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let Some(comparator) = Comparator::parse(op) else {
            tracing::debug!("unknown comparator {:?} in condition {:?}", op, condition);
            return false;
        };

        operators::compare(record.get(field), comparator, literal)
    }
}

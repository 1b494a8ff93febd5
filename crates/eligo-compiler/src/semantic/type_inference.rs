//! Field type inference
//!
//! Derives, for every field a rule references, the scalar type implied by
//! the literal it is compared against. Two entry points share one
//! classification rule: a global scan over raw rule text, and a tree walk
//! over parsed operand nodes.

use eligo_core::ast::Node;
use eligo_core::types::{FieldType, FieldTypeMap};
use once_cell::sync::Lazy;
use regex::Regex;

/// Global scan over raw rule text. Matches are consumed left to right
/// without overlap. Decimal literals match whole here, so `age > 30.5`
/// classifies as `double`.
static TEXT_CONDITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\w+)\s*(>=|<=|>|<|=)\s*('[^']*'|"[^"]*"|\d+\.\d+|\w+)"#).unwrap()
});

/// Per-operand scan, identical to the parser's condition grammar. Only
/// single-quoted strings and plain integers are recognized as literals,
/// so a decimal literal classifies by its integer-looking prefix. Stored
/// trees depend on this; do not widen.
static TREE_CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_]+)\s*(>=|<=|>|<|=)\s*('[^']*'|[0-9]+)").unwrap());

/// Field type inference over rules
pub struct TypeInference;

impl TypeInference {
    /// Infer field types from raw rule text.
    pub fn infer_from_text(rule: &str) -> FieldTypeMap {
        let mut fields = FieldTypeMap::new();
        for caps in TEXT_CONDITION_RE.captures_iter(rule) {
            Self::record(&mut fields, &caps[1], &caps[3]);
        }
        fields
    }

    /// Infer field types from a parsed tree, visiting every operand in
    /// pre-order.
    pub fn infer_from_tree(node: &Node) -> FieldTypeMap {
        let mut fields = FieldTypeMap::new();
        Self::visit(node, &mut fields);
        fields
    }

    fn visit(node: &Node, fields: &mut FieldTypeMap) {
        match node {
            Node::Operand { value } => {
                if let Some(caps) = TREE_CONDITION_RE.captures(value) {
                    Self::record(fields, &caps[1], &caps[3]);
                }
            }
            Node::Operator { left, right, .. } => {
                if let Some(left) = left {
                    Self::visit(left, fields);
                }
                if let Some(right) = right {
                    Self::visit(right, fields);
                }
            }
        }
    }

    fn record(fields: &mut FieldTypeMap, field: &str, literal: &str) {
        let inferred = FieldType::classify(literal);
        fields
            .entry(field.to_string())
            .and_modify(|existing| *existing = existing.merge(inferred))
            .or_insert(inferred);
    }
}

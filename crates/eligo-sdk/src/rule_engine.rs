//! RuleEngine - main API for rule validation and evaluation

use crate::error::Result;
use eligo_compiler::{RuleCombiner, TypeInference};
use eligo_core::ast::{CombinedNode, Node};
use eligo_core::types::{FieldTypeMap, Record};
use eligo_parser::RuleParser;
use eligo_runtime::Evaluator;
use serde::{Deserialize, Serialize};

/// A validated rule: the record shape hosts persist and echo back to
/// callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRule {
    /// Display name supplied by the caller
    pub name: String,
    /// Original rule text
    pub rule: String,
    /// Parsed expression tree
    pub tree: Node,
    /// Inferred type per referenced field
    pub field_types: FieldTypeMap,
}

/// Facade over the parser, evaluator, type inference, and combiner
pub struct RuleEngine;

impl RuleEngine {
    /// Parse rule text into an expression tree.
    pub fn parse(rule: &str) -> Result<Node> {
        let tree = RuleParser::parse(rule)?;
        tracing::debug!(rule, "parsed rule");
        Ok(tree)
    }

    /// Evaluate a parsed tree against an input record: does the record
    /// qualify?
    pub fn evaluate(tree: &Node, record: &Record) -> bool {
        Evaluator::evaluate(tree, record)
    }

    /// Infer field types from raw rule text.
    pub fn infer_from_text(rule: &str) -> FieldTypeMap {
        TypeInference::infer_from_text(rule)
    }

    /// Infer field types from a parsed tree.
    pub fn infer_from_tree(tree: &Node) -> FieldTypeMap {
        TypeInference::infer_from_tree(tree)
    }

    /// Combine independent rules into one decision tree.
    pub fn combine(rules: &[String]) -> Result<CombinedNode> {
        let combined = RuleCombiner::combine(rules)?;
        tracing::debug!(count = rules.len(), "combined rules");
        Ok(combined)
    }

    /// Parse and type-check a named rule in one step.
    pub fn validate(name: &str, rule: &str) -> Result<ValidatedRule> {
        let tree = RuleParser::parse(rule)?;
        let field_types = TypeInference::infer_from_text(rule);
        tracing::debug!(name, fields = field_types.len(), "validated rule");

        Ok(ValidatedRule {
            name: name.to_string(),
            rule: rule.to_string(),
            tree,
            field_types,
        })
    }
}

//! Rule combiner
//!
//! Folds a set of independent rule strings into one combined decision
//! tree under a majority-vote connective. Purely structural: nothing is
//! parsed or evaluated here, and each rule survives verbatim as a leaf.

use crate::error::{CompileError, Result};
use eligo_core::ast::{CombinedNode, Connective};

/// Combiner for independent rule strings
pub struct RuleCombiner;

impl RuleCombiner {
    /// Combine rules into a single left-leaning decision tree.
    pub fn combine(rules: &[String]) -> Result<CombinedNode> {
        if rules.is_empty() {
            return Err(CompileError::EmptyRuleSet);
        }

        let connective = Self::majority_connective(rules);

        let mut node = CombinedNode::LogicalExpression {
            operator: connective,
            left: None,
            right: None,
        };
        for rule in rules {
            node = Self::place(node, CombinedNode::rule(rule.clone()), connective);
        }

        Ok(node)
    }

    /// Majority vote by keyword presence. A rule containing both keywords
    /// votes AND only; a rule containing neither casts no vote; ties
    /// resolve to AND.
    fn majority_connective(rules: &[String]) -> Connective {
        let mut and_votes = 0usize;
        let mut or_votes = 0usize;
        for rule in rules {
            if rule.contains("AND") {
                and_votes += 1;
            } else if rule.contains("OR") {
                or_votes += 1;
            }
        }

        if and_votes >= or_votes {
            Connective::And
        } else {
            Connective::Or
        }
    }

    /// Drop the next leaf into the first empty child slot of the
    /// accumulator, or grow the tree leftward once both slots are full.
    fn place(node: CombinedNode, leaf: CombinedNode, connective: Connective) -> CombinedNode {
        match node {
            CombinedNode::LogicalExpression {
                operator,
                left: None,
                right,
            } => CombinedNode::LogicalExpression {
                operator,
                left: Some(Box::new(leaf)),
                right,
            },
            CombinedNode::LogicalExpression {
                operator,
                left,
                right: None,
            } => CombinedNode::LogicalExpression {
                operator,
                left,
                right: Some(Box::new(leaf)),
            },
            full => CombinedNode::LogicalExpression {
                operator: connective,
                left: Some(Box::new(full)),
                right: Some(Box::new(leaf)),
            },
        }
    }
}

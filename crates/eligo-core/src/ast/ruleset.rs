//! Combined rule-set tree nodes

use super::operator::Connective;
use serde::{Deserialize, Serialize};

/// A node in a combined decision tree built from several independent
/// rules.
///
/// Serializes to the wire shape hosts exchange:
/// `{"type":"LogicalExpression","operator":"AND","left":...,"right":...}`
/// for internal nodes and `{"type":"Rule","value":"age >= 18"}` for
/// leaves. The tree is left-leaning: past the first, every internal node
/// has both children populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombinedNode {
    /// Internal node joining rules (or further combinations) with the
    /// chosen connective
    LogicalExpression {
        /// The combining connective
        operator: Connective,
        /// Left subtree
        #[serde(default, skip_serializing_if = "Option::is_none")]
        left: Option<Box<CombinedNode>>,
        /// Right subtree
        #[serde(default, skip_serializing_if = "Option::is_none")]
        right: Option<Box<CombinedNode>>,
    },

    /// Leaf node holding one rule string verbatim
    Rule {
        /// The original rule text
        value: String,
    },
}

impl CombinedNode {
    /// Create a rule leaf
    pub fn rule(value: impl Into<String>) -> Self {
        CombinedNode::Rule {
            value: value.into(),
        }
    }

    /// Number of rule leaves under this node
    pub fn leaf_count(&self) -> usize {
        match self {
            CombinedNode::Rule { .. } => 1,
            CombinedNode::LogicalExpression { left, right, .. } => {
                left.as_ref().map_or(0, |n| n.leaf_count())
                    + right.as_ref().map_or(0, |n| n.leaf_count())
            }
        }
    }
}

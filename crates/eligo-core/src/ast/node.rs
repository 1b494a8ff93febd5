//! Rule tree nodes

use super::operator::Connective;
use serde::{Deserialize, Serialize};

/// A node in a parsed rule tree.
///
/// Serializes to the wire shape hosts exchange and persist:
/// `{"type":"operand","value":"age > 30"}` for leaves and
/// `{"type":"operator","value":"AND","left":...,"right":...}` for
/// connectives, with absent children omitted.
///
/// An operator node under construction may hold only a left child; a
/// well-formed tree has both children populated on every operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Leaf node holding one condition's raw text verbatim
    Operand {
        /// Condition text, e.g. `age > 30`
        value: String,
    },

    /// Internal node joining up to two subtrees with AND/OR
    Operator {
        /// The connective
        value: Connective,
        /// Left subtree
        #[serde(default, skip_serializing_if = "Option::is_none")]
        left: Option<Box<Node>>,
        /// Right subtree
        #[serde(default, skip_serializing_if = "Option::is_none")]
        right: Option<Box<Node>>,
    },
}

impl Node {
    /// Create an operand node from raw condition text
    pub fn operand(value: impl Into<String>) -> Self {
        Node::Operand {
            value: value.into(),
        }
    }

    /// Create an operator node with both children populated
    pub fn operator(value: Connective, left: Node, right: Node) -> Self {
        Node::Operator {
            value,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Returns true if this is a leaf condition
    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand { .. })
    }
}

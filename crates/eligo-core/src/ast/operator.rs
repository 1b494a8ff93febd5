//! Connectives and comparators for Eligo rule expressions

use serde::{Deserialize, Serialize};

/// Logical connective joining two subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    /// Both children must qualify
    And,
    /// Either child may qualify
    Or,
}

impl Connective {
    /// The keyword as it appears in rule text
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// Comparison operator inside a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,
    /// Equal (=)
    Eq,
}

impl Comparator {
    /// Parse a comparator token. Anything outside the supported set has no
    /// comparator, so conditions carrying one never qualify.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Comparator::Gt),
            "<" => Some(Comparator::Lt),
            ">=" => Some(Comparator::Ge),
            "<=" => Some(Comparator::Le),
            "=" => Some(Comparator::Eq),
            _ => None,
        }
    }

    /// The operator as it appears in rule text
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
            Comparator::Eq => "=",
        }
    }

    /// Returns true for the ordering comparators (everything except `=`)
    pub fn is_ordering(&self) -> bool {
        !matches!(self, Comparator::Eq)
    }
}

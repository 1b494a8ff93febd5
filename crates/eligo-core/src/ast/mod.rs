//! Abstract Syntax Tree (AST) definitions for Eligo
//!
//! This module contains the AST node definitions for:
//! - Parsed rule trees (operand and operator nodes)
//! - Connectives and comparators
//! - Combined rule-set trees

pub mod node;
pub mod operator;
pub mod ruleset;

pub use node::Node;
pub use operator::{Comparator, Connective};
pub use ruleset::CombinedNode;

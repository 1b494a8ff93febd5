//! Eligo Core - Core types and definitions for the Eligo rule engine
//!
//! This crate provides the fundamental types used across the Eligo
//! ecosystem:
//! - Value types for input records
//! - AST (Abstract Syntax Tree) definitions for rule trees
//! - Field type classification for inference results

pub mod ast;
pub mod types;

// Re-export commonly used types
pub use ast::{CombinedNode, Comparator, Connective, Node};
pub use types::{FieldType, FieldTypeMap, Record, Value};

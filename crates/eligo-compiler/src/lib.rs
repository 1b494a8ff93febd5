//! Eligo Compiler - semantic analysis and rule combination
//!
//! This crate derives field-type metadata from rules (semantic analysis)
//! and folds independent rule strings into one combined decision tree.

pub mod combiner;
pub mod error;
pub mod semantic;

// Re-export main types
pub use combiner::RuleCombiner;
pub use error::{CompileError, Result};
pub use semantic::TypeInference;

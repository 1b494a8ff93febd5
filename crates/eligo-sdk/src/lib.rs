//! Eligo SDK - high-level API for the Eligo rule engine
//!
//! One entry point for hosts: parse rule text, evaluate trees against
//! records, infer field types, and combine rule sets. Everything the
//! engine accepts or returns is plain serde data, so hosts can marshal
//! requests and responses directly.

pub mod error;
pub mod rule_engine;

// Re-export main types
pub use error::{Result, SdkError};
pub use rule_engine::{RuleEngine, ValidatedRule};

// Re-export commonly used types from dependencies
pub use eligo_compiler::{CompileError, RuleCombiner, TypeInference};
pub use eligo_core::ast::{CombinedNode, Comparator, Connective, Node};
pub use eligo_core::types::{FieldType, FieldTypeMap, Record, Value};
pub use eligo_parser::{ParseError, RuleParser};
pub use eligo_runtime::Evaluator;

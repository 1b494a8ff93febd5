//! Compiler error types

use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// Combine was called with no rules
    #[error("Rules should be a non-empty list")]
    EmptyRuleSet,
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

//! Parser error types

use thiserror::Error;

/// Parse error raised for rule text outside the expression grammar
#[derive(Error, Debug)]
pub enum ParseError {
    /// Opening and closing parenthesis counts disagree
    #[error("Unbalanced parentheses: {open} opening vs {close} closing")]
    UnbalancedParentheses { open: usize, close: usize },

    /// A token that is neither a connective nor a parenthesis failed the
    /// condition grammar
    #[error("Invalid condition format: \"{token}\"")]
    InvalidCondition { token: String },

    /// The rule text produced no tree
    #[error("Empty rule expression")]
    EmptyRule,
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

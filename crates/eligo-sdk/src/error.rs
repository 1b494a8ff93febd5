//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] eligo_parser::ParseError),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] eligo_compiler::CompileError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_conversion() {
        let parse_error = eligo_parser::ParseError::EmptyRule;
        let sdk_error: SdkError = parse_error.into();
        assert!(sdk_error.to_string().contains("Parser error"));
        assert!(sdk_error.to_string().contains("Empty rule expression"));
    }

    #[test]
    fn test_compile_error_conversion() {
        let compile_error = eligo_compiler::CompileError::EmptyRuleSet;
        let sdk_error: SdkError = compile_error.into();
        assert!(sdk_error.to_string().contains("Compiler error"));
        assert!(sdk_error.to_string().contains("non-empty"));
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(SdkError::ParseError(
            eligo_parser::ParseError::EmptyRule,
        ));
        assert!(result.is_err());
    }
}

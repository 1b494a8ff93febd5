//! Eligo Parser - rule text to AST parser for the Eligo rule engine
//!
//! This crate turns human-written boolean eligibility expressions such as
//! `age > 30 AND department = 'Sales'` into [`eligo_core::ast::Node`]
//! trees.

pub mod error;
pub mod rule_parser;
pub mod tokenizer;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use rule_parser::RuleParser;
pub use tokenizer::{Token, Tokenizer};

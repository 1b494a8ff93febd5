//! Rule text tokenizer
//!
//! Splits a raw rule string into parenthesis, connective, and condition
//! tokens. Splitting is purely textual: `AND` and `OR` are recognized
//! wherever they occur, with no word-boundary awareness. Stored rules
//! were written against that splitter, so it must not be tightened.

use eligo_core::ast::Connective;

/// A lexical token of the rule language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `AND` or `OR`
    Connective(Connective),
    /// Everything between delimiters; expected to match the condition
    /// grammar, which the parser enforces
    Condition(String),
}

/// Tokenizer for rule text
pub struct Tokenizer;

impl Tokenizer {
    /// Collapse whitespace runs to single spaces and trim the ends.
    pub fn normalize(rule: &str) -> String {
        rule.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split normalized rule text into tokens, discarding empty and
    /// whitespace-only fragments. Delimiters are tried in order at each
    /// position: `AND`, `OR`, `(`, `)`.
    pub fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            let delimiter = if rest.starts_with("AND") {
                Some((3, Token::Connective(Connective::And)))
            } else if rest.starts_with("OR") {
                Some((2, Token::Connective(Connective::Or)))
            } else if rest.starts_with('(') {
                Some((1, Token::OpenParen))
            } else if rest.starts_with(')') {
                Some((1, Token::CloseParen))
            } else {
                None
            };

            match delimiter {
                Some((len, token)) => {
                    Self::push_condition(&mut tokens, &text[start..i]);
                    tokens.push(token);
                    i += len;
                    start = i;
                }
                None => {
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        Self::push_condition(&mut tokens, &text[start..]);

        tokens
    }

    fn push_condition(tokens: &mut Vec<Token>, fragment: &str) {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            tokens.push(Token::Condition(fragment.to_string()));
        }
    }
}

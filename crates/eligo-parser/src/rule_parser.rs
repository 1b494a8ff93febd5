//! Stack-based rule parser
//!
//! Builds a binary expression tree from tokenized rule text. Sequences of
//! connectives at one nesting depth produce a flat left-associative
//! chain: `A AND B OR C` parses as `(A AND B) OR C` by construction
//! order, never by precedence. Only explicit parentheses change
//! grouping. This is intentional; persisted rules and the evaluator both
//! assume it.

use crate::error::{ParseError, Result};
use crate::tokenizer::{Token, Tokenizer};
use eligo_core::ast::Node;
use once_cell::sync::Lazy;
use regex::Regex;

/// Condition grammar: `<identifier> <cmp-op> <quoted-string-or-integer>`.
/// Deliberately unanchored: a token is accepted when any substring
/// matches, and the operand keeps the full raw token text.
static CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_]+)\s*(>=|<=|>|<|=)\s*('[^']*'|[0-9]+)").unwrap());

/// Rule expression parser
pub struct RuleParser;

impl RuleParser {
    /// Parse rule text into an expression tree.
    pub fn parse(rule: &str) -> Result<Node> {
        let text = Tokenizer::normalize(rule);

        let open = text.matches('(').count();
        let close = text.matches(')').count();
        if open != close {
            return Err(ParseError::UnbalancedParentheses { open, close });
        }

        let tokens = Tokenizer::tokenize(&text);
        log::debug!("tokenized {:?} into {} tokens", rule, tokens.len());

        let mut current: Option<Node> = None;
        let mut stack: Vec<Option<Node>> = Vec::new();

        for token in tokens {
            match token {
                Token::OpenParen => {
                    stack.push(current.take());
                }
                Token::CloseParen => {
                    // Popping past the bottom of the stack behaves like an
                    // absent saved node.
                    match stack.pop().flatten() {
                        Some(saved) => {
                            current = Some(Self::attach(saved, current.take()));
                        }
                        // Standalone group: the parenthesized subtree is
                        // already the current node, unwrapped.
                        None => {}
                    }
                }
                Token::Connective(connective) => {
                    current = Some(Node::Operator {
                        value: connective,
                        left: current.take().map(Box::new),
                        right: None,
                    });
                }
                Token::Condition(text) => {
                    if !CONDITION_RE.is_match(&text) {
                        return Err(ParseError::InvalidCondition { token: text });
                    }
                    let operand = Node::Operand { value: text };
                    match current.as_mut() {
                        Some(Node::Operator {
                            right: right @ None,
                            ..
                        }) => {
                            *right = Some(Box::new(operand));
                        }
                        _ => current = Some(operand),
                    }
                }
            }
        }

        current.ok_or(ParseError::EmptyRule)
    }

    /// Reattach the finished group to the node that was saved at `(`: the
    /// first empty child slot takes it, and a populated left pushes it to
    /// the right. Operand nodes have no child slots, so a group meeting
    /// one collapses into the operand itself.
    fn attach(saved: Node, subtree: Option<Node>) -> Node {
        match saved {
            Node::Operator {
                value,
                left: None,
                right,
            } => Node::Operator {
                value,
                left: subtree.map(Box::new),
                right,
            },
            Node::Operator {
                value,
                left: Some(left),
                ..
            } => Node::Operator {
                value,
                left: Some(left),
                right: subtree.map(Box::new),
            },
            operand @ Node::Operand { .. } => operand,
        }
    }
}

//! Eligo Runtime - rule tree evaluation
//!
//! Walks parsed rule trees against input records. Every call is a pure,
//! synchronous function of its inputs: no shared state, no I/O, and no
//! errors — malformed input degrades to a non-qualifying result.

pub mod evaluator;
mod operators;

// Re-export main types
pub use evaluator::Evaluator;

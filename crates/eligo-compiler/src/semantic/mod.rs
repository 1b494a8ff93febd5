//! Semantic analysis
//!
//! Field-type inference over rule text and parsed trees.

pub mod type_inference;

pub use type_inference::TypeInference;

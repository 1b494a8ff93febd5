//! Runtime value types for Eligo records
//!
//! The `Value` enum represents all possible values in an input record,
//! mirroring JSON values so hosts can deserialize request bodies
//! directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A field value inside an input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number; f64 covers both integral and floating inputs
    Number(f64),
    /// String
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Nested object
    Object(HashMap<String, Value>),
}

/// An input record: field name to value. Rule conditions reference
/// fields by name; an absent field never satisfies a condition.
pub type Record = HashMap<String, Value>;

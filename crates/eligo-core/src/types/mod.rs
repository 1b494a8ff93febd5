//! Type system for Eligo
//!
//! This module contains the runtime type system:
//! - Value types for input records
//! - Field type classification for inference results

pub mod field_type;
pub mod value;

pub use field_type::{FieldType, FieldTypeMap};
pub use value::{Record, Value};

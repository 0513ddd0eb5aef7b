//! Parameter types for GitHub PR tools
//!
//! Each tool has a typed parameter record plus the declarative schema it is
//! validated against.

mod pr;

pub use pr::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::schema::{ToolSchema, ValidationError};

/// A typed parameter record backed by a declarative schema
pub trait ToolParams: DeserializeOwned {
    const SCHEMA: ToolSchema;

    /// Validate raw arguments against [`Self::SCHEMA`] and build the record
    fn from_args(args: &Value) -> Result<Self, ValidationError> {
        let normalized = Self::SCHEMA.validate(args)?;
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationError::Shape(e.to_string()))
    }
}

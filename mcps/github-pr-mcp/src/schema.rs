//! Declarative argument schemas
//!
//! Each tool describes its arguments as a table of [`FieldSpec`]s. One
//! checker walks that table, so the four tools share a single validation
//! path and the published JSON schema is rendered from the same table.

use rmcp::model::JsonObject;
use schemars::{json_schema, Schema};
use serde_json::{Map, Value};
use thiserror::Error;

/// Primitive shape of a single argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
    Number,
    /// Whole number >= 1; integral floats such as `5.0` are normalized
    PositiveInteger,
    /// Text restricted to a closed set
    OneOf(&'static [&'static str]),
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::OneOf(_) => "a string",
            FieldKind::Boolean => "a boolean",
            FieldKind::Number | FieldKind::PositiveInteger => "a number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }

    /// Check one present value, returning its normalized form
    fn check(&self, value: &Value) -> Result<Value, ValidationError> {
        let field = self.name;
        let wrong_type = || ValidationError::WrongType {
            field,
            expected: self.kind.expected(),
        };

        match self.kind {
            FieldKind::Text => value.is_string().then(|| value.clone()).ok_or_else(wrong_type),
            FieldKind::Boolean => value.is_boolean().then(|| value.clone()).ok_or_else(wrong_type),
            FieldKind::Number => value.is_number().then(|| value.clone()).ok_or_else(wrong_type),
            FieldKind::PositiveInteger => {
                let n = value.as_number().ok_or_else(wrong_type)?;
                positive_integer(n)
                    .map(Value::from)
                    .ok_or(ValidationError::NotPositiveInteger { field })
            }
            FieldKind::OneOf(allowed) => {
                let s = value.as_str().ok_or_else(wrong_type)?;
                if allowed.contains(&s) {
                    Ok(value.clone())
                } else {
                    Err(ValidationError::NotAllowed {
                        field,
                        value: s.to_string(),
                        allowed,
                    })
                }
            }
        }
    }

    fn property_schema(&self) -> Value {
        let mut schema = match self.kind {
            FieldKind::Text => json_schema!({ "type": "string" }),
            FieldKind::Boolean => json_schema!({ "type": "boolean" }),
            FieldKind::Number => json_schema!({ "type": "number" }),
            FieldKind::PositiveInteger => json_schema!({ "type": "integer", "minimum": 1 }),
            FieldKind::OneOf(allowed) => json_schema!({ "type": "string", "enum": allowed }),
        };
        schema.insert("description".to_string(), Value::from(self.description));
        schema.to_value()
    }
}

fn positive_integer(n: &serde_json::Number) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f >= 1.0 && f <= u64::MAX as f64).then_some(f as u64)
}

/// Why a tool's arguments were rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("arguments must be a JSON object")]
    NotAnObject,

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field '{field}' must be a positive integer")]
    NotPositiveInteger { field: &'static str },

    #[error("field '{field}' must be one of {allowed:?}, got {value:?}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// Normalized arguments did not fit the typed parameter record
    #[error("{0}")]
    Shape(String),
}

/// Name, description and argument table of one tool
#[derive(Debug, Clone, Copy)]
pub struct ToolSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ToolSchema {
    /// Validate raw arguments
    ///
    /// Returns only the declared fields, with numeric identifiers
    /// normalized to integers. Unknown fields are dropped, not rejected.
    /// An explicit `null` counts as a value of the wrong type.
    pub fn validate(&self, args: &Value) -> Result<JsonObject, ValidationError> {
        let object = args.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut normalized = Map::new();
        for field in self.fields {
            match object.get(field.name) {
                Some(value) => {
                    normalized.insert(field.name.to_string(), field.check(value)?);
                }
                None if field.required => {
                    return Err(ValidationError::MissingField { field: field.name });
                }
                None => {}
            }
        }
        Ok(normalized)
    }

    /// JSON schema describing the tool's input object
    pub fn input_schema(&self) -> Schema {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.property_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        let mut schema = json_schema!({
            "type": "object",
            "properties": properties
        });
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::from(required));
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATES: &[&str] = &["open", "closed"];

    const SAMPLE: ToolSchema = ToolSchema {
        name: "sample",
        description: "Sample tool",
        fields: &[
            FieldSpec::required("id", FieldKind::PositiveInteger, "Identifier"),
            FieldSpec::optional("note", FieldKind::Text, "Free text"),
            FieldSpec::optional("flag", FieldKind::Boolean, "A switch"),
            FieldSpec::optional("count", FieldKind::Number, "A count"),
            FieldSpec::optional("state", FieldKind::OneOf(STATES), "A state"),
        ],
    };

    #[test]
    fn accepts_minimal_arguments() {
        let out = SAMPLE.validate(&json!({ "id": 3 })).unwrap();
        assert_eq!(Value::Object(out), json!({ "id": 3 }));
    }

    #[test]
    fn drops_unknown_fields() {
        let out = SAMPLE.validate(&json!({ "id": 1, "extra": [1, 2] })).unwrap();
        assert!(!out.contains_key("extra"));
    }

    #[test]
    fn rejects_non_objects() {
        for args in [json!(null), json!([1]), json!("id"), json!(4)] {
            assert_eq!(SAMPLE.validate(&args), Err(ValidationError::NotAnObject));
        }
    }

    #[test]
    fn rejects_missing_required_field() {
        assert_eq!(
            SAMPLE.validate(&json!({ "note": "x" })),
            Err(ValidationError::MissingField { field: "id" })
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert_eq!(
            SAMPLE.validate(&json!({ "id": 1, "note": 5 })),
            Err(ValidationError::WrongType {
                field: "note",
                expected: "a string"
            })
        );
        assert_eq!(
            SAMPLE.validate(&json!({ "id": 1, "flag": "true" })),
            Err(ValidationError::WrongType {
                field: "flag",
                expected: "a boolean"
            })
        );
        assert_eq!(
            SAMPLE.validate(&json!({ "id": 1, "count": "5" })),
            Err(ValidationError::WrongType {
                field: "count",
                expected: "a number"
            })
        );
        assert_eq!(
            SAMPLE.validate(&json!({ "id": "7" })),
            Err(ValidationError::WrongType {
                field: "id",
                expected: "a number"
            })
        );
    }

    #[test]
    fn null_is_not_absence() {
        assert!(matches!(
            SAMPLE.validate(&json!({ "id": 1, "note": null })),
            Err(ValidationError::WrongType { field: "note", .. })
        ));
    }

    #[test]
    fn positive_integer_rules() {
        for bad in [json!(0), json!(-1), json!(1.5), json!(-2.0), json!(0.0)] {
            assert_eq!(
                SAMPLE.validate(&json!({ "id": bad.clone() })),
                Err(ValidationError::NotPositiveInteger { field: "id" }),
                "{bad} should be rejected"
            );
        }
        let out = SAMPLE.validate(&json!({ "id": 5.0 })).unwrap();
        assert_eq!(out["id"], json!(5));
    }

    #[test]
    fn enum_rules() {
        assert!(SAMPLE.validate(&json!({ "id": 1, "state": "open" })).is_ok());
        assert!(matches!(
            SAMPLE.validate(&json!({ "id": 1, "state": "draft" })),
            Err(ValidationError::NotAllowed { field: "state", .. })
        ));
    }

    #[test]
    fn renders_input_schema() {
        let schema = SAMPLE.input_schema().to_value();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id"]));
        assert_eq!(schema["properties"]["id"]["type"], "integer");
        assert_eq!(schema["properties"]["id"]["minimum"], 1);
        assert_eq!(schema["properties"]["state"]["enum"], json!(["open", "closed"]));
        assert_eq!(schema["properties"]["note"]["description"], "Free text");
    }

    #[test]
    fn omits_empty_required_list() {
        const NO_REQUIRED: ToolSchema = ToolSchema {
            name: "none",
            description: "",
            fields: &[FieldSpec::optional("note", FieldKind::Text, "")],
        };
        let schema = NO_REQUIRED.input_schema().to_value();
        assert!(schema.get("required").is_none());
    }
}

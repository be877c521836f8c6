use std::fmt;
use std::fmt::{Display, Formatter};
use serde_json::Value;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            // a JSON float or a numeric string is not an integer
            FieldType::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Integer => write!(f, "integer"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type, required: true }
    }
}

// Schema declares the expected shape of an inbound payload, checked before the
// payload reaches typed request structures. A null field counts as missing.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn validate(&self, payload: &Value) -> LibraryResult<()> {
        let object = match payload.as_object() {
            Some(object) => object,
            None => {
                return Err(LibraryError::validation(
                    vec!["payload must be a JSON object".to_string()]));
            }
        };
        let mut violations = vec![];
        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        violations.push(format!("{} is required", field.name));
                    }
                }
                Some(value) => {
                    if !field.field_type.matches(value) {
                        violations.push(format!("{} must be of type {}", field.name, field.field_type));
                    }
                }
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(LibraryError::validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::library::LibraryError;
    use crate::core::validation::{FieldSpec, FieldType, Schema};

    fn test_schema() -> Schema {
        Schema::new(vec![
            FieldSpec::required("title", FieldType::String),
            FieldSpec::required("pages", FieldType::Integer),
        ])
    }

    #[tokio::test]
    async fn test_should_pass_valid_payload() {
        let payload = json!({"title": "test book", "pages": 394});
        assert!(test_schema().validate(&payload).is_ok());
    }

    #[tokio::test]
    async fn test_should_ignore_unknown_fields() {
        let payload = json!({"title": "test book", "pages": 394, "extra": true});
        assert!(test_schema().validate(&payload).is_ok());
    }

    #[tokio::test]
    async fn test_should_fail_missing_field() {
        let payload = json!({"pages": 394});
        let err = test_schema().validate(&payload).unwrap_err();
        match err {
            LibraryError::Validation { messages } => {
                assert_eq!(vec!["title is required".to_string()], messages);
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_null_field() {
        let payload = json!({"title": null, "pages": 394});
        let err = test_schema().validate(&payload).unwrap_err();
        match err {
            LibraryError::Validation { messages } => {
                assert_eq!(vec!["title is required".to_string()], messages);
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_wrong_types() {
        let payload = json!({"title": false, "pages": "394"});
        let err = test_schema().validate(&payload).unwrap_err();
        match err {
            LibraryError::Validation { messages } => {
                assert_eq!(2, messages.len());
                assert!(messages.contains(&"title must be of type string".to_string()));
                assert!(messages.contains(&"pages must be of type integer".to_string()));
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_float_for_integer() {
        let payload = json!({"title": "test book", "pages": 394.5});
        assert!(test_schema().validate(&payload).is_err());
    }

    #[tokio::test]
    async fn test_should_skip_missing_optional_field() {
        let schema = Schema::new(vec![
            FieldSpec { name: "notes", field_type: FieldType::String, required: false },
        ]);
        assert!(schema.validate(&json!({})).is_ok());
        assert!(schema.validate(&json!({"notes": 1})).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_non_object_payload() {
        assert!(test_schema().validate(&json!([1, 2])).is_err());
    }
}

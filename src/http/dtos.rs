//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;

pub const FIELDS_REQUIRED: &str = "Name and email are required";

/// Body of `POST /api/users` and `PUT /api/users/:id`. Unknown fields are
/// ignored. Fields are kept as raw JSON values so a number or boolean is
/// judged by `supplied` instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

/// A field counts as supplied when it is truthy: a non-empty string, a
/// non-zero number or `true`. Numbers and `true` are stored in their text
/// form. `null`, `false`, `0`, `""`, arrays and objects count as absent.
fn supplied(field: Option<Value>) -> Option<String> {
    match field? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

impl UserPayload {
    pub fn into_create(self) -> Result<UserCreate, UserError> {
        match (supplied(self.name), supplied(self.email)) {
            (Some(name), Some(email)) => Ok(UserCreate { name, email }),
            _ => Err(UserError::ValidationError(FIELDS_REQUIRED.to_string())),
        }
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: supplied(self.name),
            email: supplied(self.email),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub framework: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserDeletedResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn payload(name: Option<&str>, email: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(Value::from),
            email: email.map(Value::from),
        }
    }

    #[test]
    fn test_create_requires_both_fields() {
        for case in [
            payload(None, Some("a@b.c")),
            payload(Some("A"), None),
            payload(Some(""), Some("a@b.c")),
            payload(Some("A"), Some("")),
        ] {
            let err = case.into_create().unwrap_err();
            assert_eq!(err, UserError::ValidationError(FIELDS_REQUIRED.to_string()));
        }

        let ok = payload(Some("A"), Some("a@b.c")).into_create().unwrap();
        assert_eq!(ok, UserCreate::new("A", "a@b.c"));
    }

    #[test]
    fn test_patch_skips_empty_strings() {
        let patch = payload(Some(""), Some("new@example.com")).into_patch();
        assert_eq!(patch.name, None);
        assert_eq!(patch.email.as_deref(), Some("new@example.com"));
    }

    #[test]
    fn test_scalar_values_are_coerced_to_text() {
        let create: UserPayload =
            serde_json::from_value(json!({ "name": 5, "email": "a@b.c" })).unwrap();
        assert_eq!(create.into_create().unwrap(), UserCreate::new("5", "a@b.c"));

        let patch: UserPayload =
            serde_json::from_value(json!({ "name": 2.5, "email": true })).unwrap();
        let patch = patch.into_patch();
        assert_eq!(patch.name.as_deref(), Some("2.5"));
        assert_eq!(patch.email.as_deref(), Some("true"));
    }

    #[test]
    fn test_falsy_and_structured_values_are_not_supplied() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([1]), json!({ "a": 1 })] {
            let payload: UserPayload =
                serde_json::from_value(json!({ "name": value, "email": "a@b.c" })).unwrap();
            assert_eq!(payload.clone().into_patch().name, None, "{value}");
            assert!(payload.into_create().is_err(), "{value}");
        }
    }
}

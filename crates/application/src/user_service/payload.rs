//! Decoding and shape validation for remote user API bodies.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use userlink_core::{AppError, AppResult};
use userlink_domain::UserRecord;

/// Required top-level key absent from a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MissingKey {
    Data,
    Page,
    Id,
}

impl Display for MissingKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::Data => "data missing",
            Self::Page => "pagination data missing",
            Self::Id => "id missing",
        };
        formatter.write_str(reason)
    }
}

impl From<MissingKey> for AppError {
    fn from(value: MissingKey) -> Self {
        Self::InvalidResponse(value.to_string())
    }
}

/// Top-level shape of a decoded body.
#[derive(Debug)]
pub(super) enum ResponseBody {
    /// Blank, `null`, `{}` or `[]`.
    Empty,
    /// Non-empty JSON object.
    Object(Map<String, Value>),
    /// Anything else, including undecodable text.
    Unexpected,
}

impl ResponseBody {
    pub(super) fn decode(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Null) => Self::Empty,
            Ok(Value::Object(object)) if object.is_empty() => Self::Empty,
            Ok(Value::Array(items)) if items.is_empty() => Self::Empty,
            Ok(Value::Object(object)) => Self::Object(object),
            _ => Self::Unexpected,
        }
    }

    /// Returns the top-level object, reporting `missing` when there is none.
    pub(super) fn into_object(self, missing: MissingKey) -> Result<Map<String, Value>, MissingKey> {
        match self {
            Self::Object(object) => Ok(object),
            Self::Empty | Self::Unexpected => Err(missing),
        }
    }
}

pub(super) fn take_key(
    object: &mut Map<String, Value>,
    key: &str,
    missing: MissingKey,
) -> Result<Value, MissingKey> {
    object.remove(key).ok_or(missing)
}

/// User object as the remote API spells it.
#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(deserialize_with = "deserialize_id")]
    id: i64,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar: Option<String>,
}

impl From<WireUser> for UserRecord {
    fn from(value: WireUser) -> Self {
        UserRecord::new(value.id)
            .with_email(value.email)
            .with_first_name(value.first_name)
            .with_last_name(value.last_name)
            .with_avatar(value.avatar)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    numeric_id(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("id is not numeric: {value}")))
}

fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub(super) fn user_from_value(value: Value) -> AppResult<UserRecord> {
    serde_json::from_value::<WireUser>(value)
        .map(UserRecord::from)
        .map_err(|error| {
            AppError::InvalidResponse(format!("user object has unexpected shape: {error}"))
        })
}

pub(super) fn users_from_value(value: Value) -> AppResult<Vec<UserRecord>> {
    let Value::Array(items) = value else {
        return Err(AppError::InvalidResponse(
            "data is not a list of users".to_owned(),
        ));
    };

    items.into_iter().map(user_from_value).collect()
}

/// Reads an optional integer; absent and `null` both map to `None`.
pub(super) fn optional_integer(object: &Map<String, Value>, key: &str) -> AppResult<Option<i64>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            AppError::InvalidResponse(format!("{key} is not an integer: {value}"))
        }),
    }
}

/// Coerces an identifier that may arrive as a JSON number or string.
pub(super) fn coerce_id(value: &Value) -> AppResult<i64> {
    numeric_id(value)
        .ok_or_else(|| AppError::InvalidResponse(format!("id is not numeric: {value}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use userlink_core::AppError;

    use super::{MissingKey, ResponseBody, coerce_id, optional_integer};

    #[test]
    fn blank_null_and_empty_containers_decode_as_empty() {
        for raw in ["", "  \n", "null", "{}", "[]"] {
            assert!(matches!(ResponseBody::decode(raw), ResponseBody::Empty), "{raw:?}");
        }
    }

    #[test]
    fn non_object_bodies_decode_as_unexpected() {
        for raw in ["not json", "[1]", "42", "\"data\""] {
            assert!(matches!(ResponseBody::decode(raw), ResponseBody::Unexpected), "{raw:?}");
        }
    }

    #[test]
    fn missing_keys_map_to_invalid_response_reasons() {
        assert_eq!(
            AppError::from(MissingKey::Page),
            AppError::InvalidResponse("pagination data missing".to_owned())
        );
    }

    #[test]
    fn coerce_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_id(&json!(12)).ok(), Some(12));
        assert_eq!(coerce_id(&json!("12")).ok(), Some(12));
        assert_eq!(coerce_id(&json!(" 7 ")).ok(), Some(7));
    }

    #[test]
    fn coerce_id_rejects_non_numeric_values() {
        for value in [json!("abc"), json!(1.5), json!(null), json!({"id": 1})] {
            assert!(matches!(coerce_id(&value), Err(AppError::InvalidResponse(_))));
        }
    }

    #[test]
    fn optional_integer_treats_null_as_absent() {
        let object = json!({"total": null, "page": 3});
        let object = object.as_object().cloned().unwrap_or_default();

        assert_eq!(optional_integer(&object, "total").ok(), Some(None));
        assert_eq!(optional_integer(&object, "page").ok(), Some(Some(3)));
        assert_eq!(optional_integer(&object, "missing").ok(), Some(None));
    }
}

//! Request DTOs for the cache server API

use serde::Deserialize;
use serde_json::Value;

/// Maximum accepted key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for `PUT /cache`
///
/// `value` may be any JSON document, including `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key, e.g. `arena_42`
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: Value,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} characters",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_request_deserialize() {
        let json = r#"{"key": "arena_1", "value": {"city": "Minsk", "capacity": 22000}}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "arena_1");
        assert_eq!(req.value["city"], "Minsk");
    }

    #[test]
    fn test_put_request_missing_value_is_null() {
        let req: PutRequest = serde_json::from_str(r#"{"key": "team_1"}"#).unwrap();
        assert_eq!(req.value, Value::Null);
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_empty_key() {
        let req = PutRequest {
            key: "".to_string(),
            value: json!(1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_long_key() {
        let req = PutRequest {
            key: "x".repeat(MAX_KEY_LENGTH + 1),
            value: json!(1),
        };
        assert!(req.validate().is_some());
    }
}

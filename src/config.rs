//! Validator options: failure status code and response body

use axum::http::StatusCode;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a computed failure message
///
/// Receives the missing field names of the first failing section, in the order
/// the spec declared them.
pub type MessageFn = Arc<dyn Fn(&[&str]) -> Value + Send + Sync>;

/// The body sent with a failure response
///
/// Either a fixed value sent as-is, or a function of the missing field names.
#[derive(Clone)]
pub enum Message {
    /// A fixed body, sent regardless of which fields were missing
    Fixed(Value),
    /// A body computed from the missing field names
    Computed(MessageFn),
}

impl Message {
    /// Resolve the body for a concrete missing-fields report
    pub fn resolve(&self, missing: &[&str]) -> Value {
        match self {
            Message::Fixed(value) => value.clone(),
            Message::Computed(f) => f(missing),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Message::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

/// Options applied when a request fails validation
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Status code of the failure response
    pub status_code: StatusCode,
    /// Optional failure body; when unset, only the status is sent
    pub message: Option<Message>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: None,
        }
    }
}

impl ValidatorOptions {
    /// Create options with the defaults: status 400, no body
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the failure status code
    pub fn with_status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Send a fixed body with every failure response
    pub fn with_message(mut self, message: impl Into<Value>) -> Self {
        self.message = Some(Message::Fixed(message.into()));
        self
    }

    /// Compute the failure body from the missing field names
    pub fn with_message_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&[&str]) -> Value + Send + Sync + 'static,
    {
        self.message = Some(Message::Computed(Arc::new(f)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = ValidatorOptions::default();
        assert_eq!(options.status_code, StatusCode::BAD_REQUEST);
        assert!(options.message.is_none());
    }

    #[test]
    fn test_fixed_message_ignores_missing_fields() {
        let message = Message::Fixed(json!("required parameters missing"));
        assert_eq!(
            message.resolve(&["foo", "bar"]),
            json!("required parameters missing")
        );
        assert_eq!(message.resolve(&[]), json!("required parameters missing"));
    }

    #[test]
    fn test_computed_message_sees_missing_fields() {
        let options = ValidatorOptions::new()
            .with_message_fn(|missing| Value::String(format!("Missing: {}", missing.join(","))));

        let Some(message) = options.message else {
            panic!("message should be set");
        };
        assert_eq!(message.resolve(&["foo", "bar"]), json!("Missing: foo,bar"));
    }

    #[test]
    fn test_status_code_override() {
        let options = ValidatorOptions::new().with_status_code(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(options.status_code, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_message_debug_does_not_panic() {
        let fixed = Message::Fixed(json!({"error": true}));
        let computed = Message::Computed(Arc::new(|_| Value::Null));
        assert!(format!("{fixed:?}").contains("Fixed"));
        assert!(format!("{computed:?}").contains("Computed"));
    }
}

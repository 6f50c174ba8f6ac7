//! Axum middleware adapter for the required-fields gate

use crate::validator::{RequiredFieldsValidator, Responder};
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Largest request body the adapter will buffer for the "body" section
const MAX_BUFFERED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Axum middleware that rejects requests missing required fields
///
/// Wraps a shared [`RequiredFieldsValidator`] and adapts incoming HTTP requests
/// to its section model: `"query"` is the URI query string, `"body"` is a JSON
/// object body, `"headers"` is the header map. The body is buffered only when
/// the spec names a `"body"` section, and is replayed to the inner service
/// unchanged.
///
/// Integrate with [`axum::middleware::from_fn`]:
///
/// ```rust,ignore
/// let gate = RequiredFieldsMiddleware::new(validator);
/// let app = Router::new()
///     .route("/search", get(search))
///     .layer(from_fn(move |req, next| {
///         let gate = gate.clone();
///         async move { gate.process(req, next).await }
///     }));
/// ```
#[derive(Debug, Clone)]
pub struct RequiredFieldsMiddleware {
    validator: Arc<RequiredFieldsValidator>,
}

/// Responder that captures the failure response so it can be returned after
/// the synchronous gate has decided
#[derive(Default)]
struct ResponseCapture {
    sent: Option<(StatusCode, Option<Value>)>,
}

impl Responder for ResponseCapture {
    fn send_error(&mut self, status: StatusCode, body: Option<Value>) {
        self.sent = Some((status, body));
    }
}

impl RequiredFieldsMiddleware {
    /// Wrap a validator for use as axum middleware
    pub fn new(validator: RequiredFieldsValidator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Validate the request and either respond or forward to the inner service
    pub async fn process(&self, request: Request, next: Next) -> Response {
        let (parts, body) = request.into_parts();
        let spec = self.validator.spec();

        let mut sections: HashMap<String, Map<String, Value>> = HashMap::new();

        if spec.has_section("query") {
            if let Some(query) = parts.uri.query() {
                sections.insert("query".to_string(), query_section(query));
            }
        }

        if spec.has_section("headers") {
            sections.insert("headers".to_string(), header_section(&parts.headers));
        }

        // Buffer the body only when the spec actually inspects it, then replay
        // the buffered bytes downstream.
        let body = if spec.has_section("body") {
            let bytes = match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    debug!("failed to buffer request body: {err}");
                    return StatusCode::BAD_REQUEST.into_response();
                }
            };
            if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&bytes) {
                sections.insert("body".to_string(), map);
            }
            Body::from(bytes)
        } else {
            body
        };

        // The continuation is async here, so capture the decision from the
        // synchronous gate and act on it afterwards.
        let mut responder = ResponseCapture::default();
        self.validator.handle(&sections, &mut responder, || {});

        match responder.sent {
            Some((status, Some(body))) => (status, axum::Json(body)).into_response(),
            Some((status, None)) => status.into_response(),
            None => next.run(Request::from_parts(parts, body)).await,
        }
    }
}

/// Decode a URI query string into a section mapping
///
/// Repeated keys keep the last value; presence is all the validator cares
/// about.
fn query_section(query: &str) -> Map<String, Value> {
    let mut section = Map::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        section.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    section
}

/// Expose request headers as a section mapping
fn header_section(headers: &HeaderMap) -> Map<String, Value> {
    let mut section = Map::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            section.insert(name.as_str().to_string(), Value::String(value.to_string()));
        }
    }
    section
}

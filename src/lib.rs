//! # Required Fields Middleware
//!
//! Declarative required-field validation for server-side request pipelines.
//!
//! Given a spec of which fields must be present in which named sections of a
//! request (query parameters, body fields, headers), the validator
//! short-circuits the pipeline with an error response when anything is absent
//! and otherwise hands control to the next stage untouched. Only presence is
//! checked; value shape and type are the next stage's business.
//!
//! ## Quick Start
//!
//! ```rust
//! use required_fields_middleware::{RequiredFieldsValidator, ValidationSpec, ValidatorOptions};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = ValidationSpec::new()
//!     .section("query", ["term"])
//!     .section("body", ["name", "email"]);
//!
//! let validator = RequiredFieldsValidator::new(
//!     spec,
//!     ValidatorOptions::new().with_message_fn(|missing| json!({ "missing": missing })),
//! )?;
//!
//! // A JSON document can stand in for a request directly:
//! let request = json!({ "query": { "term": "rust" }, "body": { "name": "ada" } });
//! let failure = validator.check(&request).unwrap();
//! assert_eq!(failure.section, "body");
//! assert_eq!(failure.missing, vec!["email"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Axum Integration
//!
//! ```rust,no_run
//! use required_fields_middleware::{
//!     RequiredFieldsMiddleware, RequiredFieldsValidator, ValidationSpec,
//! };
//! use axum::{Router, middleware::from_fn, routing::get};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = ValidationSpec::new().section("query", ["term"]);
//! let gate = RequiredFieldsMiddleware::new(RequiredFieldsValidator::with_defaults(spec)?);
//!
//! let app: Router = Router::new()
//!     .route("/search", get(|| async { "results" }))
//!     .layer(from_fn(move |req, next| {
//!         let gate = gate.clone();
//!         async move { gate.process(req, next).await }
//!     }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior Notes
//!
//! - Sections are checked in declaration order and the gate fails fast: the
//!   failure report covers only the first failing section.
//! - A section absent from the request reports all of its required fields as
//!   missing; a field set to JSON `null` counts as missing.
//! - An empty spec is rejected at construction time. A gate that can never
//!   fail is a misconfiguration, not a feature.
//! - The validator holds no mutable state, so one instance can serve any
//!   number of concurrent requests.

pub mod config;
pub mod error;
pub mod middleware;
pub mod spec;
pub mod validator;

pub use config::{Message, MessageFn, ValidatorOptions};
pub use error::{ValidatorError, ValidatorResult};
pub use middleware::RequiredFieldsMiddleware;
pub use spec::{RequiredFields, ValidationSpec};
pub use validator::{
    RequestSections, RequiredFieldsValidator, Responder, ValidationFailure, missing_fields,
};

/// Version information for the middleware crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(
            VERSION.chars().any(|c| c.is_ascii_digit()),
            "VERSION should contain digits: {VERSION}"
        );
    }

    #[test]
    fn test_reexported_surface_composes() {
        let validator = RequiredFieldsValidator::new(
            ValidationSpec::new().section("query", "foo"),
            ValidatorOptions::default(),
        )
        .unwrap();
        assert!(validator.spec().has_section("query"));
    }
}

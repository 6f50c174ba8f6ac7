//! Core validation: missing-field computation and the request-time gate

use crate::config::ValidatorOptions;
use crate::error::{ValidatorError, ValidatorResult};
use crate::spec::{RequiredFields, ValidationSpec};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read access to the named sections of a request
///
/// A section is a field-to-value mapping such as the query parameters or the
/// decoded body. Returning `None` for a name means the section is absent, which
/// the validator treats the same as a section missing all of its fields.
pub trait RequestSections {
    /// Look up a section by name
    fn section(&self, name: &str) -> Option<&Map<String, Value>>;
}

/// JSON documents act as requests directly: each top-level object entry is a
/// section. Non-object entries count as absent sections.
impl RequestSections for Value {
    fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(Value::as_object)
    }
}

impl RequestSections for HashMap<String, Map<String, Value>> {
    fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name)
    }
}

/// Capability used to emit the failure response
///
/// Invoked exactly once per rejected request; never invoked for requests that
/// pass. Serializing the body is the responder's concern.
pub trait Responder {
    /// Send an error response with the given status and optional body
    fn send_error(&mut self, status: StatusCode, body: Option<Value>);
}

/// The first failing section of a request, with its missing fields in
/// declaration order
///
/// Serializes directly into a usable error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure<'a> {
    /// Name of the failing section
    pub section: &'a str,
    /// Required fields absent from that section
    pub missing: Vec<&'a str>,
}

/// Compute which required fields a section is missing
///
/// Returns `None` when the section satisfies the requirement, `Some` with a
/// non-empty list otherwise; callers never see an empty `Some`. An absent
/// section reports every required field as missing. A field whose value is
/// `Null` counts as missing, matching a present-but-undefined entry.
pub fn missing_fields<'a>(
    section: Option<&Map<String, Value>>,
    required: &'a RequiredFields,
) -> Option<Vec<&'a str>> {
    if required.is_empty() {
        return None;
    }

    let Some(section) = section else {
        return Some(required.iter().collect());
    };

    let missing: Vec<&str> = required
        .iter()
        .filter(|field| matches!(section.get(*field), None | Some(Value::Null)))
        .collect();

    if missing.is_empty() { None } else { Some(missing) }
}

/// Request-validation gate built from a [`ValidationSpec`]
///
/// Constructed once, then invoked per request. The spec and options are
/// immutable after construction, so a single validator can be shared across
/// threads or tasks without locking.
#[derive(Debug, Clone)]
pub struct RequiredFieldsValidator {
    spec: ValidationSpec,
    options: ValidatorOptions,
}

impl RequiredFieldsValidator {
    /// Create a validator from a spec and options
    ///
    /// Fails with [`ValidatorError::EmptySpec`] when the spec declares no
    /// sections; a validator that could never reject anything is a
    /// misconfiguration, not a permissive gate.
    pub fn new(spec: ValidationSpec, options: ValidatorOptions) -> ValidatorResult<Self> {
        if spec.is_empty() {
            return Err(ValidatorError::EmptySpec);
        }
        Ok(Self { spec, options })
    }

    /// Create a validator with default options (status 400, no body)
    pub fn with_defaults(spec: ValidationSpec) -> ValidatorResult<Self> {
        Self::new(spec, ValidatorOptions::default())
    }

    /// The spec this validator enforces
    pub fn spec(&self) -> &ValidationSpec {
        &self.spec
    }

    /// The options applied on failure
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Find the first failing section, if any
    ///
    /// Sections are checked in declaration order and checking stops at the
    /// first failure, so the report covers only that section's missing fields.
    pub fn check<'a, Q>(&'a self, request: &Q) -> Option<ValidationFailure<'a>>
    where
        Q: RequestSections + ?Sized,
    {
        for (name, required) in self.spec.iter() {
            if let Some(missing) = missing_fields(request.section(name), required) {
                return Some(ValidationFailure {
                    section: name,
                    missing,
                });
            }
        }
        None
    }

    /// Validate a request and route control accordingly
    ///
    /// On the first failing section, resolves the configured message against
    /// the missing fields and invokes the responder exactly once; the
    /// continuation is never reached. When every section passes, invokes the
    /// continuation exactly once and sends nothing. This method never fails:
    /// all failure paths are the responder side effect.
    pub fn handle<Q, R, N>(&self, request: &Q, responder: &mut R, next: N)
    where
        Q: RequestSections + ?Sized,
        R: Responder + ?Sized,
        N: FnOnce(),
    {
        match self.check(request) {
            Some(failure) => {
                let body = self
                    .options
                    .message
                    .as_ref()
                    .map(|message| message.resolve(&failure.missing));
                warn!(
                    section = failure.section,
                    missing = ?failure.missing,
                    status = %self.options.status_code,
                    "rejecting request: required fields missing"
                );
                responder.send_error(self.options.status_code, body);
            }
            None => {
                debug!("request passed required-field validation");
                next();
            }
        }
    }
}

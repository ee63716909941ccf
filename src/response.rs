//! Response envelopes and the shaper that builds them.
//!
//! # Envelopes
//!
//! - success: `{"code": 200, "status": "Success", "result": ...}`
//! - failure: `{"code": -40001, "message": "...", "error": ["..."] | null}`
//!
//! `error` is `null` when no cause was supplied and a non-empty list of
//! per-cause descriptions otherwise.
//!
//! # Shaping
//!
//! ```rust
//! use envelope_errors::{definitions, shape, Cause};
//!
//! let (status, body) = shape(definitions::INVALID_PASSWORD, Some(&Cause::from("bad password")));
//!
//! assert_eq!(status.as_u16(), 401);
//! assert_eq!(body.message, "Invalid Password");
//! assert_eq!(body.error.as_deref(), Some(&["bad password".to_string()][..]));
//! ```
//!
//! Shaping never fails. Unknown codes degrade to a 500 with the code named in
//! the message.

use crate::cause::Cause;
use crate::classify::Classifier;
use crate::clock::{Clock, SystemClock};
use crate::codes::ErrorCode;
use crate::definitions;
use crate::logging::ResponseLog;
use crate::translate::{English, Translator};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Envelopes
// ============================================================================

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    /// Always serialized; `null` when there was no cause.
    pub error: Option<Vec<String>>,
}

/// Success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub code: ErrorCode,
    pub status: String,
    pub result: T,
}

impl<T> SuccessResponse<T> {
    /// Wrap a result under the `SUCCESS` code and its canned status text.
    pub fn new(result: T) -> Self {
        Self {
            code: definitions::SUCCESS,
            status: definitions::SUCCESS.message().into_owned(),
            result,
        }
    }
}

/// Body for failures raised outside any handler (unmatched routes, framework
/// errors), where no catalog code applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackResponse {
    pub success: bool,
    pub message: String,
}

impl FallbackResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Use the canonical reason phrase of `status` as the message.
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status.canonical_reason().unwrap_or("Unknown error"))
    }
}

// ============================================================================
// Shaped Error
// ============================================================================

/// A shaped failure: HTTP status plus envelope.
///
/// Handlers can return this through `?`; with the `axum` feature it converts
/// straight into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ShapedError {
    /// Shape with the default shaper.
    pub fn new(code: impl Into<ErrorCode>, cause: Option<&Cause>) -> Self {
        Shaper::new().reject(code, cause)
    }

    /// Structured log view of this error.
    #[inline]
    pub fn log(&self) -> ResponseLog<'_> {
        ResponseLog::new(self.status, &self.body)
    }
}

impl From<(StatusCode, ErrorResponse)> for ShapedError {
    fn from((status, body): (StatusCode, ErrorResponse)) -> Self {
        Self { status, body }
    }
}

impl fmt::Display for ShapedError {
    /// `"{message} ({code})"`; causes are left to the body.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.body.message, self.body.code)
    }
}

impl std::error::Error for ShapedError {}

// ============================================================================
// Shaper
// ============================================================================

/// Builds error envelopes from a code and an optional cause.
#[derive(Debug, Clone, Copy)]
pub struct Shaper<C = SystemClock, T = English> {
    classifier: Classifier<C, T>,
}

impl Shaper {
    #[inline]
    pub const fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, T: Translator> Shaper<C, T> {
    /// Shape with a custom classifier.
    #[inline]
    pub const fn with_classifier(classifier: Classifier<C, T>) -> Self {
        Self { classifier }
    }

    /// Build the HTTP status and failure envelope for `code`.
    ///
    /// 1. Canned message, or `"Internal system error ({code})"` when unknown.
    /// 2. `error` from classifying `cause`; `None` without a cause or when
    ///    the cause renders to nothing.
    /// 3. Status from the catalog, `500` when unknown.
    pub fn shape(&self, code: impl Into<ErrorCode>, cause: Option<&Cause>) -> (StatusCode, ErrorResponse) {
        let code = code.into();
        let message = code.message().into_owned();
        let error = cause
            .map(|cause| self.classifier.classify(std::slice::from_ref(cause)))
            .filter(|descriptions| !descriptions.is_empty());
        let status = code.status();

        let body = ErrorResponse {
            code,
            message,
            error,
        };
        ResponseLog::new(status, &body).emit();

        (status, body)
    }

    /// Same as [`shape`](Self::shape), bundled as an error value.
    #[inline]
    pub fn reject(&self, code: impl Into<ErrorCode>, cause: Option<&Cause>) -> ShapedError {
        self.shape(code, cause).into()
    }
}

/// Shape with the default shaper (system clock, English templates).
pub fn shape(code: impl Into<ErrorCode>, cause: Option<&Cause>) -> (StatusCode, ErrorResponse) {
    Shaper::new().shape(code, cause)
}

// ============================================================================
// Axum Integration
// ============================================================================

#[cfg(feature = "axum")]
mod axum_impl {
    use super::{ShapedError, SuccessResponse};
    use axum::Json;
    use axum::response::{IntoResponse, Response};
    use http::StatusCode;
    use serde::Serialize;

    impl IntoResponse for ShapedError {
        fn into_response(self) -> Response {
            (self.status, Json(self.body)).into_response()
        }
    }

    impl<T: Serialize> IntoResponse for SuccessResponse<T> {
        fn into_response(self) -> Response {
            (StatusCode::OK, Json(self)).into_response()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

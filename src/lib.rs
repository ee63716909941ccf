//! # Envelope Errors
//!
//! Uniform JSON error envelopes for HTTP services.
//!
//! ## Design Philosophy
//!
//! 1. **Every failure has a code** drawn from one static catalog
//! 2. **The catalog decides the HTTP status**, handlers never pick one
//! 3. **Causes are rendered, not leaked**: validation failures become one
//!    readable sentence per field, anything else becomes its display string
//! 4. **Shaping never fails**: unknown codes degrade to a 500 that names the code
//!
//! ## Envelope Format
//!
//! ```text
//! {"code": -40001, "message": "Invalid input parameter", "error": ["Name is a required field"]}
//! {"code": -50002, "message": "Database error", "error": null}
//! {"code": 200, "status": "Success", "result": {...}}
//! ```
//!
//! Codes are grouped by block: positive values are success, `-40100..=-40199`
//! is authentication (401), the rest of `-40000..=-49999` is client input
//! (400) and `-50000..=-59999` is server (500).
//!
//! ## Quick Start
//!
//! ```rust
//! use envelope_errors::{definitions, Cause, FieldViolation, Shaper, ValidationErrors};
//!
//! let violations: ValidationErrors = vec![
//!     FieldViolation::new("Name", "required"),
//!     FieldViolation::new("Age", "gt").with_param("17"),
//! ]
//! .into();
//!
//! let (status, body) = Shaper::new().shape(
//!     definitions::INVALID_INPUT_PARAMETER,
//!     Some(&Cause::from(violations)),
//! );
//!
//! assert_eq!(status.as_u16(), 400);
//! assert_eq!(
//!     body.error.unwrap(),
//!     ["Name is a required field", "The field Age must be greater than 17"]
//! );
//! ```
//!
//! ## Decoding Failures
//!
//! ```rust
//! use envelope_errors::{definitions, shape, Cause};
//!
//! let parsed: Result<serde_json::Value, _> = serde_json::from_str("{oops");
//! let cause = Cause::from(parsed.unwrap_err());
//!
//! let (status, body) = shape(definitions::INVALID_INPUT_PARAMETER, Some(&cause));
//! assert_eq!(status.as_u16(), 400);
//! assert_eq!(body.error.map(|e| e.len()), Some(1));
//! ```
//!
//! ## Features
//!
//! - `axum`: `IntoResponse` for [`ShapedError`] and [`SuccessResponse`]
//! - `tokio`: [`password::hash_password_async`] on the blocking pool
//! - `trusted_debug`: [`ResponseLog::format_for_trusted_debug`] (debug builds only)

#![warn(clippy::all)]

pub mod cause;
pub mod classify;
pub mod clock;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod password;
pub mod response;
pub mod translate;
pub mod violation;

pub use cause::Cause;
pub use classify::{classify, Classifier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codes::{CodeClass, CodeEntry, ErrorCode};
pub use logging::ResponseLog;
pub use password::{compare_password, hash_password, Password, PasswordError, HASH_COST};
pub use response::{shape, ErrorResponse, FallbackResponse, ShapedError, Shaper, SuccessResponse};
pub use translate::{English, Translator};
pub use violation::{FieldViolation, TypeMismatch, ValidationErrors};

/// Result type for handlers that reject with a shaped envelope.
pub type Result<T> = std::result::Result<T, ShapedError>;

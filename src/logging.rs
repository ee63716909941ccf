//! Structured log view of a shaped response.
//!
//! # Properties
//!
//! - Borrows from the envelope with an explicit lifetime
//! - CANNOT outlive the response it describes
//! - NO heap allocations in accessors
//! - Every field is bounded when written, so a hostile cause string cannot
//!   blow up log volume
//!
//! Every call to [`Shaper::shape`](crate::Shaper::shape) emits one `tracing`
//! event through [`ResponseLog::emit`]. The level follows the code class:
//! `debug` for client and auth faults, `warn` for server faults and `error`
//! for codes missing from the catalog.

use crate::codes::{CodeClass, ErrorCode};
use crate::response::ErrorResponse;
use http::StatusCode;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output (DoS prevention)
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry borrowing from an [`ErrorResponse`].
///
/// # Example
///
/// ```rust
/// # use envelope_errors::{definitions, Shaper};
/// let err = Shaper::new().reject(definitions::DATABASE_ERROR, None);
/// let mut line = String::new();
/// err.log().write_to(&mut line).unwrap();
/// assert_eq!(line, "[-50002] status=500 class=server message='Database error'");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResponseLog<'a> {
    code: ErrorCode,
    status: StatusCode,
    message: &'a str,
    causes: &'a [String],
}

impl<'a> ResponseLog<'a> {
    #[inline]
    pub fn new(status: StatusCode, body: &'a ErrorResponse) -> Self {
        Self {
            code: body.code,
            status,
            message: &body.message,
            causes: body.error.as_deref().unwrap_or_default(),
        }
    }

    /// Access structured fields for JSON/structured logging.
    ///
    /// Fields are not truncated here - truncation is the responsibility
    /// of the writer that serializes them.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn class(&self) -> CodeClass {
        self.code.class()
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    #[inline]
    pub const fn causes(&self) -> &[String] {
        self.causes
    }

    /// Unknown codes are logged as errors even though they still shape to
    /// a 500: they mean a handler used a code nobody declared.
    pub fn emit(&self) {
        let code = self.code.value();
        let status = self.status.as_u16();
        let class = self.class().display_name();
        let causes = self.causes.len();

        if !self.code.is_known() {
            tracing::error!(code, status, class, causes, "response code missing from catalog");
            return;
        }

        match self.class() {
            CodeClass::Server | CodeClass::Unknown => {
                tracing::warn!(code, status, class, causes, detail = self.message, "server error response");
            }
            CodeClass::ClientInput | CodeClass::Auth => {
                tracing::debug!(code, status, class, causes, "client error response");
            }
            CodeClass::Success => {
                tracing::trace!(code, status, "success code shaped as error");
            }
        }
    }

    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// WARNING: cause strings may echo user input verbatim. Only available
    /// with BOTH the `trusted_debug` feature AND debug assertions.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut output);
        for (i, cause) in self.causes.iter().enumerate() {
            output.push_str(&format!(" cause[{i}]='{cause}'"));
        }
        output
    }

    /// Write structured log data to a formatter without allocating.
    ///
    /// Causes are summarized by count; each written field is truncated to
    /// prevent DoS via memory exhaustion.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] status={} class={} message='{}'",
            self.code,
            self.status.as_u16(),
            self.class(),
            truncate_with_indicator(self.message)
        )?;

        if !self.causes.is_empty() {
            write!(f, " causes={}", self.causes.len())?;
            write!(f, " first='{}'", truncate_with_indicator(&self.causes[0]))?;
        }

        Ok(())
    }
}

impl fmt::Display for ResponseLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate a string for display to prevent DoS via extremely long messages.
///
/// If the string exceeds MAX_FIELD_OUTPUT_LEN, it's truncated with an indicator
/// to make the truncation visible to operators.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    // Reserve space for the truncation indicator
    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Find the last valid UTF-8 character boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

//! Response code namespace - the stable numeric identity of every envelope.
//!
//! Clients branch on `code` programmatically and display `message` to end
//! users. The numeric value is therefore a wire contract: once a code is
//! published it keeps its value, message and HTTP status forever.
//!
//! # Range Structure
//!
//! - **Positive**: success codes (HTTP-like, e.g. `200`)
//! - **-40000..=-49999**: client-caused errors (bad, missing or duplicate input)
//!   - **-40100..=-40199**: authorization and credential problems
//! - **-50000..=-59999**: server-caused errors (internal, database, infrastructure)
//!
//! Anything else is outside the taxonomy and classified as [`CodeClass::Unknown`].
//!
//! # Catalog
//!
//! Every defined code has exactly one [`CodeEntry`] in
//! [`definitions::CATALOG`](crate::definitions::CATALOG). Lookups go through a
//! read-only index built once on first use; there is no mutable global state.
//!
//! # Example
//!
//! ```rust
//! use envelope_errors::{definitions, CodeClass, ErrorCode};
//!
//! assert_eq!(definitions::INVALID_PASSWORD.class(), CodeClass::Auth);
//! assert_eq!(definitions::INVALID_PASSWORD.status().as_u16(), 401);
//!
//! // Unknown codes degrade to a server error, never a panic
//! let unknown = ErrorCode::new(-12345);
//! assert_eq!(unknown.status().as_u16(), 500);
//! assert_eq!(unknown.message(), "Internal system error (-12345)");
//! ```

use crate::definitions::{CATALOG, INTERNAL_SYSTEM_ERROR};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// Code Class (Derived From Numeric Range)
// ============================================================================

/// Coarse classification of a response code by numeric range.
///
/// Copy-enabled metadata: callers can freely extract and propagate it for
/// logging or metrics without touching the code's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeClass {
    /// Positive codes.
    Success,
    /// Bad, missing or duplicate request data (-40000..=-49999 outside auth).
    ClientInput,
    /// Credential and session problems (-40100..=-40199).
    Auth,
    /// Internal, database or infrastructure faults (-50000..=-59999).
    Server,
    /// Outside every known range.
    Unknown,
}

impl CodeClass {
    /// Classify a raw code value.
    #[inline]
    pub const fn from_value(value: i32) -> Self {
        match value {
            1.. => Self::Success,
            -40199..=-40100 => Self::Auth,
            -49999..=-40000 => Self::ClientInput,
            -59999..=-50000 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Static name used in structured logs.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ClientInput => "client_input",
            Self::Auth => "auth",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the fault lies with the caller rather than the server.
    #[inline]
    pub const fn is_client_fault(&self) -> bool {
        matches!(self, Self::ClientInput | Self::Auth)
    }
}

impl fmt::Display for CodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

/// One row of the response catalog: code, canned message and HTTP status.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeEntry {
    code: ErrorCode,
    message: &'static str,
    status: StatusCode,
}

impl CodeEntry {
    /// Build an entry. Used by `define_response_codes!`.
    #[doc(hidden)]
    pub const fn __internal_new(code: ErrorCode, message: &'static str, status: StatusCode) -> Self {
        Self {
            code,
            message,
            status,
        }
    }

    /// Find the catalog entry for a code.
    pub fn lookup(code: ErrorCode) -> Option<&'static CodeEntry> {
        CATALOG_INDEX.get(&code.value()).copied()
    }

    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

static CATALOG_INDEX: LazyLock<HashMap<i32, &'static CodeEntry>> =
    LazyLock::new(|| CATALOG.iter().map(|entry| (entry.code.value(), entry)).collect());

// ============================================================================
// Error Code (Primary Identity Type)
// ============================================================================

/// A response code carried in every envelope.
///
/// Any `i32` is representable so that codes arriving from elsewhere (other
/// services, stored records) can still be shaped; only the values defined in
/// [`definitions`](crate::definitions) have catalog entries.
///
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw numeric value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Range-based class of this code.
    #[inline]
    pub const fn class(self) -> CodeClass {
        CodeClass::from_value(self.0)
    }

    /// Catalog entry, if this code is defined.
    #[inline]
    pub fn entry(self) -> Option<&'static CodeEntry> {
        CodeEntry::lookup(self)
    }

    /// Whether this code has a catalog entry.
    #[inline]
    pub fn is_known(self) -> bool {
        self.entry().is_some()
    }

    /// Canned message, or the internal-error message annotated with the code.
    ///
    /// Borrowed for known codes; allocates only on the unknown-code path.
    pub fn message(self) -> Cow<'static, str> {
        match self.entry() {
            Some(entry) => Cow::Borrowed(entry.message),
            None => Cow::Owned(unknown_code_message(self)),
        }
    }

    /// HTTP status for this code, `500` when the code is not in the catalog.
    #[inline]
    pub fn status(self) -> StatusCode {
        self.entry()
            .map_or(StatusCode::INTERNAL_SERVER_ERROR, CodeEntry::status)
    }
}

fn unknown_code_message(code: ErrorCode) -> String {
    let base = INTERNAL_SYSTEM_ERROR
        .entry()
        .map_or("Internal system error", CodeEntry::message);
    format!("{base} ({code})")
}

impl From<i32> for ErrorCode {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ErrorCode> for i32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

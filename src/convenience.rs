//! Macros for declaring response codes together with their catalog rows.
//!
//! A code, its canned message and its HTTP status are declared on one line so
//! the three can never drift apart. The batch macro emits one `pub const` per
//! code plus the `CATALOG` static the lookup index is built from.
//!
//! # Usage
//!
//! ```rust
//! use envelope_errors::{define_response_codes, CodeEntry, ErrorCode};
//! use http::StatusCode;
//!
//! define_response_codes! {
//!     ORDER_LOCKED = (-40010, StatusCode::BAD_REQUEST, "Order is locked"),
//!     LEDGER_DOWN  = (-50010, StatusCode::INTERNAL_SERVER_ERROR, "Ledger unavailable"),
//! }
//!
//! assert_eq!(ORDER_LOCKED, ErrorCode::new(-40010));
//! assert_eq!(CATALOG.len(), 2);
//! assert_eq!(CATALOG[1].message(), "Ledger unavailable");
//! ```
//!
//! The crate's own table lives in [`definitions`](crate::definitions).

/// Define a single response code constant.
///
/// # Example
///
/// ```rust
/// # use envelope_errors::{define_response_code, ErrorCode};
/// define_response_code!(TEAPOT, 418);
/// assert_eq!(TEAPOT.value(), 418);
/// ```
#[macro_export]
macro_rules! define_response_code {
    ($name:ident, $value:expr) => {
        pub const $name: $crate::ErrorCode = $crate::ErrorCode::new($value);
    };
}

/// Define a batch of response codes and the `CATALOG` static describing them.
///
/// Each row is `NAME = (value, status, message)`. Rows keep declaration
/// order in `CATALOG`.
#[macro_export]
macro_rules! define_response_codes {
    ($( $name:ident = ($value:expr, $status:expr, $message:expr) ),+ $(,)?) => {
        $(
            $crate::define_response_code!($name, $value);
        )+

        /// Every defined code with its canned message and HTTP status.
        pub static CATALOG: &[$crate::CodeEntry] = &[
            $(
                $crate::CodeEntry::__internal_new($name, $message, $status),
            )+
        ];
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use http::StatusCode;

    mod sample {
        use http::StatusCode;

        define_response_codes! {
            FIRST  = (-40901, StatusCode::BAD_REQUEST, "First"),
            SECOND = (-50901, StatusCode::INTERNAL_SERVER_ERROR, "Second"),
        }
    }

    #[test]
    fn batch_definition_keeps_order() {
        assert_eq!(sample::CATALOG.len(), 2);
        assert_eq!(sample::CATALOG[0].code(), sample::FIRST);
        assert_eq!(sample::CATALOG[1].code(), sample::SECOND);
    }

    #[test]
    fn batch_definition_pairs_status_and_message() {
        let first = &sample::CATALOG[0];
        assert_eq!(first.status(), StatusCode::BAD_REQUEST);
        assert_eq!(first.message(), "First");
    }

    #[test]
    fn single_definition() {
        define_response_code!(LOCAL, -40902);
        assert_eq!(LOCAL.value(), -40902);
    }
}

//! Pre-defined response codes for the backend.
//!
//! # Taxonomy & Governance
//!
//! This file is the single source of truth for every code a handler may put
//! in an envelope. Codes, messages and HTTP statuses are wire contracts:
//! clients branch on the numeric value and display the message verbatim.
//!
//! - Success (positive)        | HTTP 200
//! - Client input (-400xx)     | HTTP 400
//! - Authorization (-401xx)    | HTTP 401
//! - Server (-500xx)           | HTTP 500
//!
//! Numeric ranges are enforced by the `tests` module at the bottom of this
//! file. A code declared outside its block, or with a status that disagrees
//! with its block, fails the build.

use crate::define_response_codes;
use http::StatusCode;

/// Code range constants for keeping blocks apart.
/// Checked for consistency in `tests` module.
pub mod ranges {
    pub const INPUT_START: i32 = -40099; pub const INPUT_END: i32 = -40000;
    pub const AUTH_START:  i32 = -40199; pub const AUTH_END:  i32 = -40100;
    pub const SERVER_START: i32 = -50099; pub const SERVER_END: i32 = -50000;
}

define_response_codes! {
    // -------------------------------------------------------------------------
    // Success
    // -------------------------------------------------------------------------
    SUCCESS = (200, StatusCode::OK, "Success"),

    // -------------------------------------------------------------------------
    // Client input (-40001..=-40099)
    // ACTION: Fix the request; never retried automatically
    // -------------------------------------------------------------------------
    INVALID_INPUT_PARAMETER = (-40001, StatusCode::BAD_REQUEST, "Invalid input parameter"),
    DATA_NOT_FOUND          = (-40002, StatusCode::BAD_REQUEST, "Data Not Found"),
    DATA_ALREADY_EXISTS     = (-40003, StatusCode::BAD_REQUEST, "Data already exists"),

    // -------------------------------------------------------------------------
    // Authorization (-40101..=-40199)
    // ACTION: Re-authenticate or contact an administrator
    // -------------------------------------------------------------------------
    INVALID_AUTHORIZATION_KEY  = (-40101, StatusCode::UNAUTHORIZED, "Invalid authorization key"),
    AUTHORIZATION_KEY_EXPIRED  = (-40102, StatusCode::UNAUTHORIZED, "Authorization key expired"),
    AUTHORIZATION_KEY_INACTIVE = (-40103, StatusCode::UNAUTHORIZED, "Authorization key inactive"),
    USER_NOT_FOUND             = (-40104, StatusCode::UNAUTHORIZED, "User Not Found"),
    INVALID_PASSWORD           = (-40105, StatusCode::UNAUTHORIZED, "Invalid Password"),
    USER_EXPIRED               = (-40106, StatusCode::UNAUTHORIZED, "User Expired"),
    PASSWORD_RESET             = (-40107, StatusCode::UNAUTHORIZED, PASSWORD_RESET_MESSAGE),

    // -------------------------------------------------------------------------
    // Server (-50001..=-50099)
    // ACTION: Alert on-call; the request itself may be valid
    // -------------------------------------------------------------------------
    INTERNAL_SYSTEM_ERROR = (-50001, StatusCode::INTERNAL_SERVER_ERROR, "Internal system error"),
    DATABASE_ERROR        = (-50002, StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
    NOT_FOUND             = (-50003, StatusCode::INTERNAL_SERVER_ERROR, "Not Found"),
}

/// The only localized canned message. Kept byte-for-byte as deployed clients
/// display it.
const PASSWORD_RESET_MESSAGE: &str = "Password was reset by admin please change password via WMS on Windows (แจ้งให้User ไปท าการ Change Password ที่ WMS on Windows)";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodeClass, CodeEntry};
    use std::collections::HashSet;

    /// Enforce that all defined codes fall within their assigned block.
    /// This prevents "governance drift" where codes are added ad-hoc.
    #[test]
    fn enforce_block_ranges() {
        for entry in CATALOG {
            let value = entry.code().value();
            match entry.code().class() {
                CodeClass::Success => assert!(value > 0),
                CodeClass::ClientInput => {
                    assert!((ranges::INPUT_START..=ranges::INPUT_END).contains(&value), "{value}")
                }
                CodeClass::Auth => {
                    assert!((ranges::AUTH_START..=ranges::AUTH_END).contains(&value), "{value}")
                }
                CodeClass::Server => {
                    assert!((ranges::SERVER_START..=ranges::SERVER_END).contains(&value), "{value}")
                }
                CodeClass::Unknown => panic!("code {value} is outside every block"),
            }
        }

        // Ensure gap between blocks (Sanity check)
        assert!(ranges::AUTH_END < ranges::INPUT_START);
    }

    #[test]
    fn status_agrees_with_block() {
        for entry in CATALOG {
            let expected = match entry.code().class() {
                CodeClass::Success => StatusCode::OK,
                CodeClass::ClientInput => StatusCode::BAD_REQUEST,
                CodeClass::Auth => StatusCode::UNAUTHORIZED,
                CodeClass::Server | CodeClass::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            };
            assert_eq!(entry.status(), expected, "code {}", entry.code());
        }
    }

    #[test]
    fn every_code_has_exactly_one_entry() {
        let unique: HashSet<i32> = CATALOG.iter().map(|e| e.code().value()).collect();
        assert_eq!(unique.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 14);
    }

    #[test]
    fn messages_are_non_empty() {
        assert!(CATALOG.iter().all(|e| !e.message().is_empty()));
    }

    #[test]
    fn password_reset_message_preserved() {
        let entry = CodeEntry::lookup(PASSWORD_RESET).unwrap();
        assert!(entry.message().starts_with("Password was reset by admin"));
        assert!(entry.message().contains("WMS on Windows"));
    }
}

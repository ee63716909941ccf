//! The closed set of error kinds a response can be shaped from.
//!
//! Dispatch is by `match` on [`Cause`], never by downcasting.

use crate::violation::{FieldViolation, TypeMismatch, ValidationErrors};
use std::fmt;

/// An underlying error supplied to the shaper to be rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    /// One or more struct fields failed validation rules.
    Validation(ValidationErrors),
    /// A value had the wrong type during structured decoding.
    TypeMismatch(TypeMismatch),
    /// Anything else; rendered as its message.
    Opaque(String),
}

impl Cause {
    /// Wrap any displayable error as an opaque cause.
    pub fn opaque(error: impl fmt::Display) -> Self {
        Self::Opaque(error.to_string())
    }

    /// Short name of the variant.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::TypeMismatch(_) => "type_mismatch",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl From<ValidationErrors> for Cause {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<FieldViolation> for Cause {
    fn from(violation: FieldViolation) -> Self {
        Self::Validation(std::iter::once(violation).collect())
    }
}

impl From<TypeMismatch> for Cause {
    fn from(mismatch: TypeMismatch) -> Self {
        Self::TypeMismatch(mismatch)
    }
}

impl From<String> for Cause {
    fn from(message: String) -> Self {
        Self::Opaque(message)
    }
}

impl From<&str> for Cause {
    fn from(message: &str) -> Self {
        Self::Opaque(message.to_owned())
    }
}

/// `serde_json` does not expose the offending field structurally, so its
/// errors are carried as opaque messages. Decoders that know the field
/// should build a [`TypeMismatch`] instead.
impl From<serde_json::Error> for Cause {
    fn from(error: serde_json::Error) -> Self {
        Self::opaque(error)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::TypeMismatch(mismatch) => write!(f, "{mismatch}"),
            Self::Opaque(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for Cause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::TypeMismatch(mismatch) => Some(mismatch),
            Self::Opaque(_) => None,
        }
    }
}

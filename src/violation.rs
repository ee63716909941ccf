//! Payloads produced by the validation and decoding layers.
//!
//! # Architecture
//!
//! The validation engine and the structured decoder are external
//! collaborators: handlers run them, then hand their findings to this crate
//! as plain data.
//!
//! - [`FieldViolation`]: one failed rule on one field (field, tag, value, param)
//! - [`ValidationErrors`]: the ordered set of violations for one struct
//! - [`TypeMismatch`]: a value of the wrong type met during decoding
//!
//! All three implement `Display` with a library-style default string and
//! `std::error::Error`, so they can travel through `?` before being shaped.
//! User-facing wording is produced later by the classifier.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;

// ============================================================================
// Field Violation
// ============================================================================

/// A single failed validation rule on a single struct field.
///
/// Serializes with the wire names clients already parse (`Error`,
/// `FailedField`, `Tag`, `Value`). The rule parameter is an input to message
/// rendering only and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    #[serde(rename = "Error")]
    pub failed: bool,
    #[serde(rename = "FailedField")]
    pub field: String,
    /// Rule tag, possibly a pipe-joined composite such as `gt|gtfield`.
    #[serde(rename = "Tag")]
    pub tag: String,
    /// The offending value as seen by the validator.
    #[serde(rename = "Value")]
    pub value: Value,
    /// Rule parameter (`10` in `min=10`), empty when the rule takes none.
    #[serde(skip)]
    pub param: String,
}

impl FieldViolation {
    /// Create a failed violation with no parameter and a `null` value.
    pub fn new(field: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            failed: true,
            field: field.into(),
            tag: tag.into(),
            value: Value::Null,
            param: String::new(),
        }
    }

    /// Attach the rule parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Attach the offending value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// The significant part of the tag: text before the first `|`.
    ///
    /// Composite tags like `gtfield|ltfield` arrive whole from the validator;
    /// only the first component selects the message.
    #[inline]
    pub fn primary_tag(&self) -> &str {
        self.tag.split('|').next().unwrap_or_default()
    }
}

impl fmt::Display for FieldViolation {
    /// Library-style default string, used when no translation applies.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.field, self.field, self.tag
        )
    }
}

impl std::error::Error for FieldViolation {}

// ============================================================================
// Validation Errors
// ============================================================================

/// Ordered violations reported for one validated struct.
///
/// Most requests fail on a handful of fields, so the first four are stored
/// inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(SmallVec<[FieldViolation; 4]>);

impl ValidationErrors {
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.0.iter()
    }
}

impl FromIterator<FieldViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(SmallVec::from_vec(violations))
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    /// One default string per violation, newline separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Type Mismatch
// ============================================================================

/// A value had the wrong type during structured decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Path of the field within the decoded document.
    pub field: String,
    /// Display name of the type the field should have held.
    pub expected: String,
}

impl TypeMismatch {
    pub fn new(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Mismatch against a Rust type, with module paths stripped everywhere
    /// in the name (`alloc::vec::Vec<alloc::string::String>` becomes
    /// `Vec<String>`).
    pub fn expecting<T: ?Sized>(field: impl Into<String>) -> Self {
        let full = std::any::type_name::<T>();
        Self::new(field, short_type_name(full))
    }
}

fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (idx, ch) in full.char_indices() {
        if matches!(ch, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*') {
            out.push_str(last_segment(&full[start..idx]));
            out.push(ch);
            start = idx + ch.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot decode field {} as {}", self.field, self.expected)
    }
}

impl std::error::Error for TypeMismatch {}

// ============================================================================
// Tests
// ============================================================================

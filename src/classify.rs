//! Cause classification: turns heterogeneous causes into display strings.
//!
//! This is the single seam that knows about validation and decoding
//! payloads. The response shaper only ever sees the resulting strings.
//!
//! # Rules
//!
//! | Cause | Output |
//! |---|---|
//! | validation, `required_without` | `The field {field} is required if {param} is not supplied` |
//! | validation, `lt` / `ltfield` | `The field {field} must be less than {param}` |
//! | validation, `gt` / `gtfield` | `The field {field} must be greater than {param}` |
//! | validation, other tag | English translation, else the violation's default string |
//! | type mismatch | `The field {field} must be a {expected}` |
//! | opaque | the message, unchanged |
//!
//! Only the tag component before the first `|` is significant, compared
//! case-insensitively. An empty `lt`/`gt` parameter means "now" and is
//! rendered from the classifier's [`Clock`] in RFC 3339.
//!
//! Classification cannot fail: every cause yields at least a best-effort
//! string, and a validation cause yields exactly one string per violation.

use crate::cause::Cause;
use crate::clock::{Clock, SystemClock};
use crate::translate::{English, Translator};
use crate::violation::{FieldViolation, TypeMismatch};

/// Renders causes with a clock and an optional translator.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<C = SystemClock, T = English> {
    clock: C,
    translator: Option<T>,
}

impl Classifier {
    /// System clock and English templates.
    #[inline]
    pub const fn new() -> Self {
        Self {
            clock: SystemClock,
            translator: Some(English),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, T: Translator> Classifier<C, T> {
    /// Replace the time source.
    #[inline]
    pub fn with_clock<K: Clock>(self, clock: K) -> Classifier<K, T> {
        Classifier {
            clock,
            translator: self.translator,
        }
    }

    /// Replace the translator.
    #[inline]
    pub fn with_translator<U: Translator>(self, translator: U) -> Classifier<C, U> {
        Classifier {
            clock: self.clock,
            translator: Some(translator),
        }
    }

    /// Drop the translator; generic tags fall back to default strings.
    #[inline]
    #[must_use]
    pub fn without_translator(mut self) -> Self {
        self.translator = None;
        self
    }

    /// Render every cause, in order, into one flat list.
    pub fn classify(&self, causes: &[Cause]) -> Vec<String> {
        let mut out = Vec::with_capacity(causes.len());
        for cause in causes {
            match cause {
                Cause::Validation(errors) => {
                    out.extend(errors.iter().map(|violation| self.describe_violation(violation)));
                }
                Cause::TypeMismatch(mismatch) => out.push(describe_mismatch(mismatch)),
                Cause::Opaque(message) => out.push(message.clone()),
            }
        }
        out
    }

    /// Render a single violation.
    pub fn describe_violation(&self, violation: &FieldViolation) -> String {
        let field = violation.field.as_str();
        let tag = violation.primary_tag().to_ascii_lowercase();

        match tag.as_str() {
            "required_without" => format!(
                "The field {field} is required if {} is not supplied",
                violation.param
            ),
            "lt" | "ltfield" => format!(
                "The field {field} must be less than {}",
                self.bound(&violation.param)
            ),
            "gt" | "gtfield" => format!(
                "The field {field} must be greater than {}",
                self.bound(&violation.param)
            ),
            _ => self
                .translator
                .as_ref()
                .and_then(|translator| translator.translate(violation))
                .unwrap_or_else(|| violation.to_string()),
        }
    }

    fn bound(&self, param: &str) -> String {
        if param.is_empty() {
            self.clock.now_rfc3339()
        } else {
            param.to_owned()
        }
    }
}

fn describe_mismatch(mismatch: &TypeMismatch) -> String {
    format!("The field {} must be a {}", mismatch.field, mismatch.expected)
}

/// Classify with the default classifier (system clock, English templates).
pub fn classify(causes: &[Cause]) -> Vec<String> {
    Classifier::new().classify(causes)
}

// ============================================================================
// Tests
// ============================================================================

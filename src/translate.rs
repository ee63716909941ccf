//! Default English messages for generic validation tags.
//!
//! Tags with bespoke wording (`required_without`, `lt`, `gt` and their
//! `*field` forms) are handled by the classifier before a translator is
//! consulted. Everything else lands here.
//!
//! Length-like rules (`len`, `min`, `max`, `lte`, `gte`) read differently for
//! strings, numbers and collections, so the template is picked from the JSON
//! kind of the offending value:
//!
//! ```rust
//! use envelope_errors::{English, FieldViolation, Translator};
//!
//! let name = FieldViolation::new("Name", "min").with_param("3").with_value("ab");
//! let age = FieldViolation::new("Age", "min").with_param("18").with_value(12);
//!
//! assert_eq!(
//!     English.translate(&name).as_deref(),
//!     Some("Name must be at least 3 characters in length")
//! );
//! assert_eq!(English.translate(&age).as_deref(), Some("Age must be 18 or greater"));
//! ```

use crate::violation::FieldViolation;
use serde_json::Value;

/// Renders a violation as a human-readable sentence.
pub trait Translator {
    /// `None` when there is no template for the violation's tag.
    fn translate(&self, violation: &FieldViolation) -> Option<String>;
}

impl<T: Translator + ?Sized> Translator for &T {
    #[inline]
    fn translate(&self, violation: &FieldViolation) -> Option<String> {
        (**self).translate(violation)
    }
}

/// English templates for the common rule tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

/// Shape of the value a length-like rule was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Text,
    Number,
    Collection,
}

impl ValueKind {
    /// A missing value reads as text, the most common target of length rules.
    fn of(value: &Value) -> Self {
        match value {
            Value::Null | Value::String(_) => Self::Text,
            Value::Array(_) | Value::Object(_) => Self::Collection,
            Value::Bool(_) | Value::Number(_) => Self::Number,
        }
    }
}

fn characters(param: &str) -> &'static str {
    if param == "1" { "character" } else { "characters" }
}

fn items(param: &str) -> &'static str {
    if param == "1" { "item" } else { "items" }
}

impl Translator for English {
    fn translate(&self, violation: &FieldViolation) -> Option<String> {
        let field = violation.field.as_str();
        let param = violation.param.as_str();
        let kind = ValueKind::of(&violation.value);
        let tag = violation.primary_tag().to_ascii_lowercase();

        let message = match (tag.as_str(), kind) {
            ("required", _) => format!("{field} is a required field"),

            ("len", ValueKind::Text) => {
                format!("{field} must be {param} {} in length", characters(param))
            }
            ("len", ValueKind::Number) => format!("{field} must be equal to {param}"),
            ("len", ValueKind::Collection) => format!("{field} must contain {param} {}", items(param)),

            ("min" | "gte", ValueKind::Text) => {
                format!("{field} must be at least {param} {} in length", characters(param))
            }
            ("min" | "gte", ValueKind::Number) => format!("{field} must be {param} or greater"),
            ("min" | "gte", ValueKind::Collection) => {
                format!("{field} must contain at least {param} {}", items(param))
            }

            ("max", ValueKind::Text) => format!(
                "{field} must be a maximum of {param} {} in length",
                characters(param)
            ),
            ("lte", ValueKind::Text) => format!(
                "{field} must be at maximum {param} {} in length",
                characters(param)
            ),
            ("max" | "lte", ValueKind::Number) => format!("{field} must be {param} or less"),
            ("max" | "lte", ValueKind::Collection) => {
                format!("{field} must contain at maximum {param} {}", items(param))
            }

            ("eq", _) => format!("{field} is not equal to {param}"),
            ("ne", _) => format!("{field} should not be equal to {param}"),
            ("eqfield", _) => format!("{field} must be equal to {param}"),
            ("nefield", _) => format!("{field} cannot be equal to {param}"),
            ("gtefield", _) => format!("{field} must be greater than or equal to {param}"),
            ("ltefield", _) => format!("{field} must be less than or equal to {param}"),
            ("oneof", _) => format!("{field} must be one of [{param}]"),
            ("contains", _) => format!("{field} must contain the text '{param}'"),
            ("excludes", _) => format!("{field} cannot contain the text '{param}'"),
            ("datetime", _) => format!("{field} does not match the {param} format"),

            ("email", _) => format!("{field} must be a valid email address"),
            ("url", _) => format!("{field} must be a valid URL"),
            ("uri", _) => format!("{field} must be a valid URI"),
            ("uuid", _) => format!("{field} must be a valid UUID"),
            ("alpha", _) => format!("{field} can only contain alphabetic characters"),
            ("alphanum", _) => format!("{field} can only contain alphanumeric characters"),
            ("numeric", _) => format!("{field} must be a valid numeric value"),
            ("number", _) => format!("{field} must be a valid number"),
            ("boolean", _) => format!("{field} must be a valid boolean value"),
            ("hexadecimal", _) => format!("{field} must be a valid hexadecimal"),
            ("lowercase", _) => format!("{field} must be a lowercase string"),
            ("uppercase", _) => format!("{field} must be an uppercase string"),
            ("json", _) => format!("{field} must be a valid json string"),
            ("ip", _) => format!("{field} must be a valid IP address"),
            ("e164", _) => format!("{field} must be a valid E.164 formatted phone number"),
            ("unique", _) => format!("{field} must contain unique values"),

            _ => return None,
        };

        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(violation: FieldViolation) -> Option<String> {
        English.translate(&violation)
    }

    #[test]
    fn required() {
        assert_eq!(
            render(FieldViolation::new("Name", "required")).unwrap(),
            "Name is a required field"
        );
    }

    #[test]
    fn min_by_value_kind() {
        let text = FieldViolation::new("Name", "min").with_param("1").with_value("");
        assert_eq!(render(text).unwrap(), "Name must be at least 1 character in length");

        let list = FieldViolation::new("Tags", "min").with_param("2").with_value(json!(["a"]));
        assert_eq!(render(list).unwrap(), "Tags must contain at least 2 items");
    }

    #[test]
    fn missing_value_uses_text_templates() {
        let v = FieldViolation::new("Name", "min").with_param("3");
        assert_eq!(render(v).unwrap(), "Name must be at least 3 characters in length");

        let v = FieldViolation::new("Name", "len").with_param("1");
        assert_eq!(render(v).unwrap(), "Name must be 1 character in length");
    }

    #[test]
    fn numeric_value_uses_number_templates() {
        let v = FieldViolation::new("Age", "max").with_param("99").with_value(120);
        assert_eq!(render(v).unwrap(), "Age must be 99 or less");
    }

    #[test]
    fn max_and_lte_differ_for_text() {
        let max = FieldViolation::new("Code", "max").with_param("4").with_value("abcdef");
        let lte = FieldViolation::new("Code", "lte").with_param("4").with_value("abcdef");
        assert_eq!(render(max).unwrap(), "Code must be a maximum of 4 characters in length");
        assert_eq!(render(lte).unwrap(), "Code must be at maximum 4 characters in length");
    }

    #[test]
    fn len_for_collection_single_item() {
        let v = FieldViolation::new("Pair", "len").with_param("1").with_value(json!([1, 2]));
        assert_eq!(render(v).unwrap(), "Pair must contain 1 item");
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        assert_eq!(
            render(FieldViolation::new("Mail", "EMAIL")).unwrap(),
            "Mail must be a valid email address"
        );
    }

    #[test]
    fn oneof_lists_choices() {
        let v = FieldViolation::new("Color", "oneof").with_param("red green");
        assert_eq!(render(v).unwrap(), "Color must be one of [red green]");
    }

    #[test]
    fn unknown_tag_has_no_template() {
        assert!(render(FieldViolation::new("X", "my_custom_rule")).is_none());
    }
}

//! Property-based tests for envelope_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use envelope_errors::{
    Cause, Classifier, CodeEntry, ErrorCode, FieldViolation, FixedClock, ShapedError, Shaper,
    ValidationErrors, definitions,
};
use proptest::prelude::*;

fn fixed_shaper() -> Shaper<FixedClock> {
    let clock = FixedClock::parse("2025-02-03T04:05:06Z").unwrap();
    Shaper::with_classifier(Classifier::new().with_clock(clock))
}

// ============================================================================
// CODE PROPERTIES
// ============================================================================

proptest! {
    /// Codes outside the catalog always degrade to 500 and name the code
    #[test]
    fn unknown_codes_degrade(value in any::<i32>()) {
        prop_assume!(CodeEntry::lookup(ErrorCode::new(value)).is_none());

        let (status, body) = fixed_shaper().shape(value, None);

        prop_assert_eq!(status.as_u16(), 500);
        prop_assert!(body.message.contains(&value.to_string()));
        prop_assert_eq!(body.code.value(), value);
        prop_assert_eq!(body.error, None);
    }

    /// Classification by block never panics and agrees with the catalog
    #[test]
    fn class_of_catalog_code_matches_status(index in 0usize..definitions::CATALOG.len()) {
        let entry = &definitions::CATALOG[index];
        let expected = match entry.code().class() {
            envelope_errors::CodeClass::Success => 200,
            envelope_errors::CodeClass::ClientInput => 400,
            envelope_errors::CodeClass::Auth => 401,
            envelope_errors::CodeClass::Server | envelope_errors::CodeClass::Unknown => 500,
        };
        prop_assert_eq!(entry.status().as_u16(), expected);
    }
}

// ============================================================================
// CLASSIFICATION PROPERTIES
// ============================================================================

proptest! {
    /// N violations always yield N strings, in input order
    #[test]
    fn violations_map_one_to_one(fields in prop::collection::vec("[A-Z][a-z]{0,12}", 0..16)) {
        let errors: ValidationErrors = fields
            .iter()
            .map(|field| FieldViolation::new(field.as_str(), "required"))
            .collect();

        let (_, body) = fixed_shaper().shape(definitions::INVALID_INPUT_PARAMETER, Some(&errors.into()));

        if fields.is_empty() {
            prop_assert_eq!(body.error, None);
        } else {
            let rendered = body.error.unwrap();
            prop_assert_eq!(rendered.len(), fields.len());
            for (line, field) in rendered.iter().zip(&fields) {
                prop_assert_eq!(line, &format!("{field} is a required field"));
            }
        }
    }

    /// Arbitrary tags never panic and always produce exactly one string
    #[test]
    fn arbitrary_tags_render(field in "\\PC{0,64}", tag in "\\PC{0,64}", param in "\\PC{0,64}") {
        let violation = FieldViolation::new(field, tag).with_param(param);
        let out = Classifier::new().classify(&[violation.into()]);
        prop_assert_eq!(out.len(), 1);
    }

    /// Opaque causes pass through unchanged
    #[test]
    fn opaque_text_unchanged(text in "\\PC*") {
        let (_, body) = fixed_shaper().shape(definitions::INTERNAL_SYSTEM_ERROR, Some(&Cause::from(text.as_str())));
        prop_assert_eq!(body.error, Some(vec![text]));
    }

    /// Shaping twice with the same inputs yields identical bytes
    #[test]
    fn shaping_is_idempotent(code in -60000i32..300, text in "\\PC{0,200}") {
        let shaper = fixed_shaper();
        let cause = Cause::from(text);

        let first = shaper.shape(code, Some(&cause));
        let second = shaper.shape(code, Some(&cause));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_vec(&first.1).unwrap(),
            serde_json::to_vec(&second.1).unwrap()
        );
    }
}

// ============================================================================
// LOG PROPERTIES
// ============================================================================

proptest! {
    /// Log lines stay valid UTF-8 and bounded regardless of cause size
    #[test]
    fn log_line_is_bounded(text in "\\PC{0,10000}") {
        let err: ShapedError = fixed_shaper().reject(definitions::DATABASE_ERROR, Some(&Cause::from(text)));

        let mut buffer = String::new();
        err.log().write_to(&mut buffer).unwrap();

        assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
        // Max: 1024 per field + indicators + formatting
        prop_assert!(buffer.len() < 2300);
    }
}

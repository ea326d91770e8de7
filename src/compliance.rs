//! Advisory compliance notes derived from extracted fields.
//!
//! A fixed decision table: each rule is an independent predicate over the
//! field record paired with a note, evaluated in declaration order with
//! no early exit. The same field record always yields the same note
//! sequence, and the closing review reminder is always last.

use crate::models::PolicyFields;

pub const NOTE_MISSING_EFFECTIVE_DATE: &str =
    "⚠️ Effective date not found - verify policy activation date";
pub const NOTE_MISSING_POLICY_AMOUNT: &str =
    "⚠️ Policy amount not identified - confirm coverage limits";
pub const NOTE_MISSING_LEGAL_DESCRIPTION: &str =
    "⚠️ Legal description missing - property boundaries may need verification";
pub const NOTE_EXCEPTIONS_LISTED: &str =
    "✓ Policy exceptions identified - review for potential issues";
pub const NOTE_STANDARD_COVERAGE: &str = "ℹ️ No exceptions listed - standard coverage applies";
pub const NOTE_UNDERWRITER_CONFIRMED: &str = "✓ Underwriter identified - policy issuer confirmed";
pub const NOTE_REVIEW_REMINDER: &str = "📋 Document processed - review all fields for accuracy";

type NoteRule = (fn(&PolicyFields) -> bool, &'static str);

/// Ordered rule table; output order follows this sequence exactly.
const RULES: &[NoteRule] = &[
    (|f| f.effective_date.is_none(), NOTE_MISSING_EFFECTIVE_DATE),
    (|f| f.policy_amount.is_none(), NOTE_MISSING_POLICY_AMOUNT),
    (
        |f| f.legal_description.is_none(),
        NOTE_MISSING_LEGAL_DESCRIPTION,
    ),
    (|f| f.exceptions.is_some(), NOTE_EXCEPTIONS_LISTED),
    (|f| f.exceptions.is_none(), NOTE_STANDARD_COVERAGE),
    (|f| f.underwriter.is_some(), NOTE_UNDERWRITER_CONFIRMED),
    (|_| true, NOTE_REVIEW_REMINDER),
];

/// Derive the advisory notes for an extracted field record.
pub fn generate_notes(fields: &PolicyFields) -> Vec<String> {
    let mut notes = Vec::new();
    for (applies, note) in RULES {
        if applies(fields) {
            notes.push((*note).to_string());
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> PolicyFields {
        PolicyFields {
            effective_date: Some("March 15, 2024".to_string()),
            insured_party: Some("John Smith".to_string()),
            underwriter: Some("First American Title".to_string()),
            legal_description: Some("Lot 5, Block 2".to_string()),
            exceptions: Some("Utility easement".to_string()),
            policy_amount: Some("$450,000".to_string()),
        }
    }

    #[test]
    fn test_empty_record_flags_every_gap() {
        let notes = generate_notes(&PolicyFields::default());
        assert_eq!(
            notes,
            vec![
                NOTE_MISSING_EFFECTIVE_DATE.to_string(),
                NOTE_MISSING_POLICY_AMOUNT.to_string(),
                NOTE_MISSING_LEGAL_DESCRIPTION.to_string(),
                NOTE_STANDARD_COVERAGE.to_string(),
                NOTE_REVIEW_REMINDER.to_string(),
            ]
        );
    }

    #[test]
    fn test_full_record_confirms_findings() {
        let notes = generate_notes(&full_fields());
        assert_eq!(
            notes,
            vec![
                NOTE_EXCEPTIONS_LISTED.to_string(),
                NOTE_UNDERWRITER_CONFIRMED.to_string(),
                NOTE_REVIEW_REMINDER.to_string(),
            ]
        );
    }

    #[test]
    fn test_exception_notes_are_mutually_exclusive() {
        let with_exceptions = generate_notes(&full_fields());
        assert!(with_exceptions.contains(&NOTE_EXCEPTIONS_LISTED.to_string()));
        assert!(!with_exceptions.contains(&NOTE_STANDARD_COVERAGE.to_string()));

        let without = generate_notes(&PolicyFields::default());
        assert!(without.contains(&NOTE_STANDARD_COVERAGE.to_string()));
        assert!(!without.contains(&NOTE_EXCEPTIONS_LISTED.to_string()));
    }

    #[test]
    fn test_partial_record_scenario() {
        // Date, amount, underwriter and exceptions found; insured party
        // and legal description not.
        let fields = PolicyFields {
            effective_date: Some("January 2, 2023".to_string()),
            underwriter: Some("Stewart Title Guaranty".to_string()),
            exceptions: Some("Standard exceptions".to_string()),
            policy_amount: Some("$300,000".to_string()),
            ..Default::default()
        };

        let notes = generate_notes(&fields);
        assert_eq!(
            notes,
            vec![
                NOTE_MISSING_LEGAL_DESCRIPTION.to_string(),
                NOTE_EXCEPTIONS_LISTED.to_string(),
                NOTE_UNDERWRITER_CONFIRMED.to_string(),
                NOTE_REVIEW_REMINDER.to_string(),
            ]
        );
    }

    #[test]
    fn test_review_reminder_is_always_last() {
        let records = [
            PolicyFields::default(),
            full_fields(),
            PolicyFields {
                underwriter: Some("Old Republic".to_string()),
                ..Default::default()
            },
        ];
        for fields in &records {
            let notes = generate_notes(fields);
            assert_eq!(notes.last().map(String::as_str), Some(NOTE_REVIEW_REMINDER));
        }
    }

    #[test]
    fn test_missing_insured_party_has_no_dedicated_note() {
        // The insured party does not participate in any rule; two records
        // differing only there produce identical notes.
        let mut with_party = full_fields();
        with_party.insured_party = None;
        assert_eq!(generate_notes(&with_party), generate_notes(&full_fields()));
    }
}

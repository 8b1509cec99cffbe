//! Row deduplication and payload assembly
//!
//! Two entry points over the same outcome stream, one per validation
//! policy:
//! - [`deduplicate`] (lenient) drops invalid and duplicate rows silently
//!   and keeps the rest;
//! - [`validate_strict`] rejects the whole file on the first invalid row
//!   and otherwise keeps every valid row.
//!
//! Both preserve file order and always emit the header first, even if the
//! header itself would fail the character policy.

use std::collections::HashSet;

use crate::error::ImportError;
use crate::types::{CleanedPayload, Line, ValidationOutcome};

/// Lenient mode: keep the first occurrence per dedup key, drop invalid
/// outcomes and later duplicates silently. Returns `None` when no rows
/// survive — the signal that the file contains no usable data.
///
/// Running this on its own output is a no-op: surviving lines re-validate
/// and their keys are already unique.
pub fn deduplicate(header: &Line, outcomes: &[ValidationOutcome]) -> Option<CleanedPayload> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut surviving = Vec::new();

    for outcome in outcomes {
        if let ValidationOutcome::Valid { line, row } = outcome {
            if seen.insert(row.dedup_key()) {
                surviving.push(line.text.clone());
            }
        }
    }

    CleanedPayload::new(&header.text, surviving)
}

/// Strict mode: the first invalid outcome (in file order) rejects the
/// whole file with its 1-based line number. A file that passes keeps
/// every valid row verbatim, duplicates included — dropping rows is the
/// lenient policy's business, so a clean file round-trips with only
/// line-ending normalization.
pub fn validate_strict(
    header: &Line,
    outcomes: &[ValidationOutcome],
) -> Result<CleanedPayload, ImportError> {
    let mut surviving = Vec::new();
    for outcome in outcomes {
        match outcome {
            ValidationOutcome::Invalid { line, reason } => {
                return Err(ImportError::InvalidFormat { line: *line, reason: *reason });
            }
            ValidationOutcome::Valid { line, .. } => surviving.push(line.text.clone()),
        }
    }
    CleanedPayload::new(&header.text, surviving).ok_or(ImportError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{csv_parser, row_validator};
    use crate::types::InvalidReason;

    fn outcomes_for(content: &str) -> (Line, Vec<ValidationOutcome>) {
        let lines = csv_parser::split_lines(content);
        let header = lines[0].clone();
        let outcomes = lines[1..]
            .iter()
            .filter_map(row_validator::validate_line)
            .collect();
        (header, outcomes)
    }

    #[test]
    fn test_lenient_drops_duplicates_and_invalid_rows() {
        let (header, outcomes) =
            outcomes_for("Name,Surname\nJohn,Doe\njohn, doe\nJane,Smith\n123,Doe");
        let payload = deduplicate(&header, &outcomes).unwrap();
        assert_eq!(payload.as_str(), "Name,Surname\nJohn,Doe\nJane,Smith");
        assert_eq!(payload.row_count(), 2);
    }

    #[test]
    fn test_first_occurrence_survives() {
        let (header, outcomes) = outcomes_for("Name,Surname\nJOHN,DOE\njohn,doe");
        let payload = deduplicate(&header, &outcomes).unwrap();
        // The original text of the first occurrence is what gets emitted.
        assert_eq!(payload.as_str(), "Name,Surname\nJOHN,DOE");
    }

    #[test]
    fn test_no_surviving_rows_yields_none() {
        let (header, outcomes) = outcomes_for("Name,Surname\n123,456\n\n");
        assert!(deduplicate(&header, &outcomes).is_none());
    }

    #[test]
    fn test_header_is_never_validated() {
        // A header violating the character policy is still emitted first.
        let (header, outcomes) = outcomes_for("First Name;#1,Last\nJohn,Doe");
        let payload = deduplicate(&header, &outcomes).unwrap();
        assert!(payload.as_str().starts_with("First Name;#1,Last\n"));
    }

    #[test]
    fn test_deduplication_is_idempotent() {
        let (header, outcomes) =
            outcomes_for("Name,Surname\nJohn,Doe\njohn, doe\nJane,Smith\n123,Doe");
        let first = deduplicate(&header, &outcomes).unwrap();

        let (header2, outcomes2) = outcomes_for(first.as_str());
        let second = deduplicate(&header2, &outcomes2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_strict_rejects_on_first_invalid_line() {
        let (header, outcomes) =
            outcomes_for("Name,Surname\nJohn,Doe\njohn, doe\nJane,Smith\n123,Doe");
        let err = validate_strict(&header, &outcomes).unwrap_err();
        match err {
            ImportError::InvalidFormat { line, reason } => {
                assert_eq!(line, 5);
                assert_eq!(reason, InvalidReason::DisallowedCharacters);
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_accepts_clean_input() {
        let (header, outcomes) = outcomes_for("Name,Surname\nJohn,Doe\nJane,Smith");
        let payload = validate_strict(&header, &outcomes).unwrap();
        assert_eq!(payload.as_str(), "Name,Surname\nJohn,Doe\nJane,Smith");
    }

    #[test]
    fn test_strict_preserves_duplicate_rows() {
        let (header, outcomes) = outcomes_for("Name,Surname\nJohn,Doe\njohn, doe");
        let payload = validate_strict(&header, &outcomes).unwrap();
        assert_eq!(payload.as_str(), "Name,Surname\nJohn,Doe\njohn, doe");
    }

    #[test]
    fn test_strict_empty_result() {
        let (header, outcomes) = outcomes_for("Name,Surname\n\n");
        assert!(matches!(
            validate_strict(&header, &outcomes),
            Err(ImportError::EmptyResult)
        ));
    }
}

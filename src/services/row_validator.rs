//! Single-row validation
//!
//! Checks one data line against the required shape (exactly two
//! comma-separated fields) and the name character policy (ASCII letters,
//! spaces, and hyphens). Validation is line-local: one bad line never
//! affects another's verdict.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{InvalidReason, Line, Row, ValidationOutcome};

/// A trimmed name field must fully match this policy. `+` also rejects
/// fields that are empty after trimming.
static NAME_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z -]+$").expect("valid name field regex"));

/// Validate a single data line (number > 1).
///
/// Returns `None` for blank lines — they are skipped, not rows. Every
/// other line maps to exactly one [`ValidationOutcome`].
pub fn validate_line(line: &Line) -> Option<ValidationOutcome> {
    if line.is_blank() {
        return None;
    }

    let fields: Vec<&str> = line.text.split(',').collect();
    if fields.len() != 2 {
        return Some(ValidationOutcome::Invalid {
            line: line.number,
            reason: InvalidReason::WrongFieldCount,
        });
    }

    let first_name = fields[0].trim();
    let last_name = fields[1].trim();
    if !NAME_FIELD.is_match(first_name) || !NAME_FIELD.is_match(last_name) {
        return Some(ValidationOutcome::Invalid {
            line: line.number,
            reason: InvalidReason::DisallowedCharacters,
        });
    }

    Some(ValidationOutcome::Valid {
        line: line.clone(),
        row: Row {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        },
    })
}

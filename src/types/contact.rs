//! Contact CSV data model
//!
//! A raw file decomposes into [`Line`]s, data lines validate into
//! [`ValidationOutcome`]s, and surviving rows re-serialize into a
//! [`CleanedPayload`] ready for upload.

use std::fmt;

/// One `\n`- or `\r\n`-delimited segment of the raw file content.
///
/// Line 1 is always the header and is never validated as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the file, used for diagnostics.
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn is_header(&self) -> bool {
        self.number == 1
    }

    /// Empty or whitespace-only lines are skipped, never validated.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A parsed data line: exactly two ordered name fields, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub first_name: String,
    pub last_name: String,
}

impl Row {
    /// Normalized key under which two rows count as the same contact.
    pub fn dedup_key(&self) -> String {
        format!(
            "{} {}",
            self.first_name.trim().to_lowercase(),
            self.last_name.trim().to_lowercase()
        )
    }
}

/// Why a data line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Splitting on `,` did not yield exactly two fields.
    WrongFieldCount,
    /// A field is empty after trimming or contains characters outside
    /// ASCII letters, spaces, and hyphens.
    DisallowedCharacters,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::WrongFieldCount => write!(f, "wrong field count"),
            InvalidReason::DisallowedCharacters => {
                write!(f, "disallowed characters or empty field")
            }
        }
    }
}

/// Verdict for a single non-blank data line.
///
/// Every non-blank, non-header line maps to exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The line parsed cleanly; the original line is kept so the payload
    /// can re-emit it verbatim.
    Valid { line: Line, row: Row },
    Invalid { line: usize, reason: InvalidReason },
}

/// Header plus surviving, deduplicated rows serialized back to
/// row-per-line text.
///
/// Only constructible with at least one surviving row, so a payload in
/// hand always means the file had usable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPayload {
    text: String,
    row_count: usize,
}

impl CleanedPayload {
    /// Build from the header text and surviving row texts, in file order.
    /// Returns `None` when no rows survived.
    pub fn new(header: &str, rows: Vec<String>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let row_count = rows.len();
        let mut text = String::from(header);
        for row in rows {
            text.push('\n');
            text.push_str(&row);
        }
        Some(Self { text, row_count })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of surviving data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

use std::{io, path::PathBuf};

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors produced while loading or mapping contact rows.
#[derive(Debug, Error, Diagnostic)]
pub enum ContactsError {
    /// The default data file could not be read.
    ///
    /// Raised only at construction; there is no way to recover a store
    /// without its default rows.
    #[error("Source unavailable: {}", .path.display())]
    #[diagnostic(
        code(contacts::source_unavailable),
        help("check that the CSV file exists and is readable")
    )]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row did not split into the expected number of fields.
    #[error("Malformed row {line}: expected {expected} fields, found {found}")]
    #[diagnostic(
        code(contacts::malformed_row),
        help("fields are separated by ',' and quoting is not supported")
    )]
    MalformedRow {
        /// Zero-based position of the row in the active row set.
        line: usize,
        expected: usize,
        found: usize,
        #[source_code]
        row: String,
        #[label("malformed row")]
        span: SourceSpan,
    },
}

impl ContactsError {
    pub(crate) fn malformed_row(line: usize, expected: usize, found: usize, row: &str) -> Self {
        Self::MalformedRow {
            line,
            expected,
            found,
            row: row.to_owned(),
            span: (0, row.len()).into(),
        }
    }
}

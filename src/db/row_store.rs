use std::path::{Path, PathBuf};

use crate::{ContactsError, db::column::CsvRow};

/// Holds the raw contact rows currently in use.
///
/// Rows are loaded once from a default source file with the header line
/// stripped and blank lines skipped. Callers can swap in their own rows and
/// switch back to the default ones at any time.
#[derive(Debug, Clone)]
pub struct RowStore {
    /// File the default rows were read from.
    source: PathBuf,

    /// Rows read from `source`, header excluded.
    default_rows: Vec<String>,

    /// Rows set by the caller. Takes precedence over `default_rows` when present.
    custom_rows: Option<Vec<String>>,
}

impl RowStore {
    /// Loads the default rows from `source`, discarding the first line.
    ///
    /// Each record is kept as its raw comma-joined text; nothing is validated.
    ///
    /// Fails with [`ContactsError::SourceUnavailable`] if the file cannot be read.
    pub fn open<P: AsRef<Path>>(source: P) -> Result<Self, ContactsError> {
        let source = source.as_ref().to_path_buf();

        let contents =
            std::fs::read_to_string(&source).map_err(|e| ContactsError::SourceUnavailable {
                path: source.clone(),
                source: e,
            })?;

        let mut reader = CsvRow::reader_builder()
            .has_headers(true)
            .from_reader(contents.as_bytes());

        let default_rows = reader
            .records()
            .map(|record| {
                record
                    .map(|record| record.iter().collect::<Vec<_>>().join(","))
                    .map_err(|e| ContactsError::SourceUnavailable {
                        path: source.clone(),
                        source: e.into(),
                    })
            })
            .collect::<Result<Vec<String>, _>>()?;

        tracing::debug!(
            path = %source.display(),
            rows = default_rows.len(),
            "loaded default contact rows"
        );

        Ok(Self {
            source,
            default_rows,
            custom_rows: None,
        })
    }

    /// Returns the active rows.
    pub fn rows(&self) -> &[String] {
        self.custom_rows.as_deref().unwrap_or(&self.default_rows)
    }

    /// Replaces the active rows.
    ///
    /// The rows are taken as-is: no header is stripped and nothing is validated.
    pub fn set_rows<I, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        tracing::debug!(rows = rows.len(), "overriding contact rows");
        self.custom_rows = Some(rows);
    }

    /// Drops any custom rows and goes back to the rows loaded from the source.
    pub fn use_default_data(&mut self) {
        if self.custom_rows.take().is_some() {
            tracing::debug!("restored default contact rows");
        }
    }

    /// Whether custom rows are active.
    pub fn is_overridden(&self) -> bool {
        self.custom_rows.is_some()
    }

    /// Path of the default source.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

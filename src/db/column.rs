use csv::{ReaderBuilder, StringRecord};
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::ContactsError;

/// Columns of a contact row, in file order.
///
/// The discriminant is the column's position in the row and the variant name
/// is the name of the record field it fills. Everything that maps raw rows to
/// records goes through this enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(usize)]
pub enum CsvColumn {
    Id,
    FirstName,
    LastName,
    EmailAddress,
    StreetAddress,
    City,
    State,
    Zip,
}

impl CsvColumn {
    /// Position of this column within a row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field name this column maps to.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A raw row split into its fields.
///
/// Rows are read with quoting turned off, so a [`CsvRow::DELIMITER`] inside a
/// field is never escaped and shifts every column after it.
#[derive(Debug, Clone)]
pub struct CsvRow {
    record: StringRecord,
}

impl CsvRow {
    pub const DELIMITER: u8 = b',';

    /// Reader settings shared by row parsing and source loading.
    pub(crate) fn reader_builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(Self::DELIMITER)
            .quoting(false)
            .flexible(true);
        builder
    }

    /// Splits `row` and checks that it has exactly one field per [`CsvColumn`].
    ///
    /// A blank row has no fields. A row holding a line break reads as several
    /// records and counts the fields of all of them. `line` is only used to
    /// point at the row in the error.
    pub fn parse(line: usize, row: &str) -> Result<Self, ContactsError> {
        let mut reader = Self::reader_builder()
            .has_headers(false)
            .from_reader(row.as_bytes());

        let mut records = Vec::new();
        for record in reader.records() {
            // only UTF-8 problems can fail here, and `row` is already a str
            match record {
                Ok(record) => records.push(record),
                Err(_) => return Err(Self::malformed(line, 0, row)),
            }
        }

        match records.pop() {
            Some(record) if records.is_empty() && record.len() == CsvColumn::COUNT => {
                Ok(Self { record })
            }
            last => {
                let found = records.iter().chain(last.iter()).map(StringRecord::len).sum::<usize>();
                Err(Self::malformed(line, found, row))
            }
        }
    }

    fn malformed(line: usize, found: usize, row: &str) -> ContactsError {
        tracing::warn!(line, found, "malformed contact row");
        ContactsError::malformed_row(line, CsvColumn::COUNT, found, row)
    }

    /// Gets the field stored in the given column.
    pub fn get(&self, column: CsvColumn) -> &str {
        // parse guarantees one field per column
        self.record.get(column.index()).unwrap_or_default()
    }
}

use crate::db::column::{CsvColumn, CsvRow};

use super::address::Address;

/// A contact built from one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,

    /// The person's address. Owned by the person and empty by default.
    pub address: Address,
}

impl Person {
    /// Creates a new person.
    pub fn new(first_name: &str, last_name: &str, email_address: &str, address: Address) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email_address: email_address.to_owned(),
            address,
        }
    }

    pub(crate) fn from_row(row: &CsvRow) -> Self {
        Self::new(
            row.get(CsvColumn::FirstName),
            row.get(CsvColumn::LastName),
            row.get(CsvColumn::EmailAddress),
            Address::from_row(row),
        )
    }

    /// Gets the value this person holds for a column, including address columns.
    ///
    /// Returns `None` for [`CsvColumn::Id`], which is not kept on the record.
    pub fn field(&self, column: CsvColumn) -> Option<&str> {
        match column {
            CsvColumn::FirstName => Some(self.first_name.as_str()),
            CsvColumn::LastName => Some(self.last_name.as_str()),
            CsvColumn::EmailAddress => Some(self.email_address.as_str()),
            CsvColumn::Id => None,
            _ => self.address.field(column),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_has_empty_address() {
        let person = Person::default();
        assert_eq!(person.address, Address::default());
        assert_eq!(person.first_name, "");
    }

    #[test]
    fn test_from_row_matches_every_column() {
        let raw = "15,Phillida,Chastagnier,pchastagniere@reference.com,1 Rutledge Point,Spokane,WA,99021";
        let row = CsvRow::parse(0, raw).unwrap();
        let person = Person::from_row(&row);
        let split: Vec<&str> = raw.split(',').collect();

        for column in CsvColumn::iter().filter(|c| *c != CsvColumn::Id) {
            assert_eq!(
                person.field(column),
                Some(split[column.index()]),
                "column {column} does not match"
            );
        }
        assert_eq!(person.field(CsvColumn::Id), None);
    }

    #[test]
    fn test_address_is_mutable_in_place() {
        let mut person = Person::new("Joly", "Scneider", "j@example.com", Address::default());
        person.address.state = "WA".to_string();

        assert_eq!(person.field(CsvColumn::State), Some("WA"));
    }
}

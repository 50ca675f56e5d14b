use std::{cmp::Ordering, fmt::Display};

use crate::db::column::{CsvColumn, CsvRow};

/// A postal address.
///
/// Equality covers all four fields. Ordering is by location only (see
/// [`Address::cmp_by_location`]), which is why there is no `Ord` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Columns an address is built from.
    pub const COLUMNS: [CsvColumn; 4] = [
        CsvColumn::StreetAddress,
        CsvColumn::City,
        CsvColumn::State,
        CsvColumn::Zip,
    ];

    /// Creates a new address.
    pub fn new(street_address: &str, city: &str, state: &str, zip: &str) -> Self {
        Self {
            street_address: street_address.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            zip: zip.to_owned(),
        }
    }

    pub(crate) fn from_row(row: &CsvRow) -> Self {
        Self::new(
            row.get(CsvColumn::StreetAddress),
            row.get(CsvColumn::City),
            row.get(CsvColumn::State),
            row.get(CsvColumn::Zip),
        )
    }

    /// Compares by state, then city, then zip.
    ///
    /// Strings compare byte by byte, with no locale collation. The street is
    /// not part of the ordering.
    pub fn cmp_by_location(&self, other: &Self) -> Ordering {
        self.state
            .cmp(&other.state)
            .then_with(|| self.city.cmp(&other.city))
            .then_with(|| self.zip.cmp(&other.zip))
    }

    /// Gets the value this address holds for a column.
    ///
    /// Returns `None` for columns that belong to the person rather than the address.
    pub fn field(&self, column: CsvColumn) -> Option<&str> {
        match column {
            CsvColumn::StreetAddress => Some(self.street_address.as_str()),
            CsvColumn::City => Some(self.city.as_str()),
            CsvColumn::State => Some(self.state.as_str()),
            CsvColumn::Zip => Some(self.zip.as_str()),
            CsvColumn::Id
            | CsvColumn::FirstName
            | CsvColumn::LastName
            | CsvColumn::EmailAddress => None,
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street_address, self.city, self.state, self.zip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let address = Address::default();
        for column in Address::COLUMNS {
            assert_eq!(address.field(column), Some(""));
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Address::new("53 Grim Point", "Spokane", "WA", "99022");
        let b = Address::new("53 Grim Point", "Spokane", "WA", "99022");
        let c = Address::new("1 Rutledge Point", "Spokane", "WA", "99022");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_location_order_ignores_street() {
        let a = Address::new("53 Grim Point", "Spokane", "WA", "99022");
        let c = Address::new("1 Rutledge Point", "Spokane", "WA", "99022");

        assert_eq!(a.cmp_by_location(&c), Ordering::Equal);
        assert_ne!(a, c);
    }

    #[test]
    fn test_location_order_is_state_city_zip() {
        let spokane = Address::new("", "Spokane", "WA", "99022");
        let spokane_lower_zip = Address::new("", "Spokane", "WA", "99021");
        let seattle = Address::new("", "Seattle", "WA", "98101");
        let boise = Address::new("", "Zeta", "ID", "83701");

        assert_eq!(spokane_lower_zip.cmp_by_location(&spokane), Ordering::Less);
        assert_eq!(seattle.cmp_by_location(&spokane), Ordering::Less);
        assert_eq!(boise.cmp_by_location(&seattle), Ordering::Less);
        assert_eq!(spokane.cmp_by_location(&boise), Ordering::Greater);
    }

    #[test]
    fn test_location_order_is_ordinal() {
        // uppercase sorts before lowercase byte-wise
        let upper = Address::new("", "Zion", "WA", "1");
        let lower = Address::new("", "aberdeen", "WA", "1");

        assert_eq!(upper.cmp_by_location(&lower), Ordering::Less);
    }

    #[test]
    fn test_field_lookup() {
        let address = Address::new("53 Grim Point", "Spokane", "WA", "99022");

        assert_eq!(address.field(CsvColumn::StreetAddress), Some("53 Grim Point"));
        assert_eq!(address.field(CsvColumn::State), Some("WA"));
        assert_eq!(address.field(CsvColumn::FirstName), None);
        assert_eq!(address.to_string(), "53 Grim Point, Spokane, WA 99022");
    }
}

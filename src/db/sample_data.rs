use std::{collections::BTreeSet, path::Path};

use crate::{
    ContactsError,
    db::{
        column::{CsvColumn, CsvRow},
        record::Person,
        row_store::RowStore,
    },
};

/// Query layer over a [`RowStore`].
///
/// Every query re-reads the store's active rows, so a query made after
/// [`SampleData::set_rows`] sees the new rows. Nothing is cached.
///
/// # Example
///
/// ```no_run
/// use contact_rows::SampleData;
///
/// let mut data = SampleData::open("People.csv")?;
/// data.set_rows(["8,Joly,Scneider,jscneider7@pagesperso-orange.fr,53 Grim Point,Spokane,WA,99022"]);
///
/// assert_eq!(data.unique_sorted_states()?, vec!["WA".to_string()]);
/// assert_eq!(data.people()?[0].first_name, "Joly");
///
/// data.use_default_data();
/// # Ok::<(), contact_rows::ContactsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SampleData {
    store: RowStore,
}

impl SampleData {
    /// File loaded by [`SampleData::new`].
    pub const DEFAULT_SOURCE: &'static str = "People.csv";

    /// Loads the default rows from [`SampleData::DEFAULT_SOURCE`] in the working directory.
    pub fn new() -> Result<Self, ContactsError> {
        Self::open(Self::DEFAULT_SOURCE)
    }

    /// Loads the default rows from `source`.
    pub fn open<P: AsRef<Path>>(source: P) -> Result<Self, ContactsError> {
        Ok(Self {
            store: RowStore::open(source)?,
        })
    }

    /// Returns the active rows.
    pub fn rows(&self) -> &[String] {
        self.store.rows()
    }

    /// Replaces the active rows. See [`RowStore::set_rows`].
    pub fn set_rows<I, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store.set_rows(rows);
    }

    /// Goes back to the rows loaded from the default source.
    pub fn use_default_data(&mut self) {
        self.store.use_default_data();
    }

    /// The underlying row store.
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// Splits every active row, failing on the first malformed one.
    fn parsed_rows(&self) -> Result<Vec<CsvRow>, ContactsError> {
        self.rows()
            .iter()
            .enumerate()
            .map(|(line, row)| CsvRow::parse(line, row))
            .collect()
    }

    /// States found in the rows, without duplicates, in ascending byte order.
    pub fn unique_sorted_states(&self) -> Result<Vec<String>, ContactsError> {
        let states: BTreeSet<String> = self
            .parsed_rows()?
            .iter()
            .map(|row| row.get(CsvColumn::State).to_owned())
            .collect();

        Ok(states.into_iter().collect())
    }

    /// [`SampleData::unique_sorted_states`] joined with commas.
    ///
    /// Returns an empty string when there are no rows.
    pub fn aggregate_sorted_states(&self) -> Result<String, ContactsError> {
        Ok(self.unique_sorted_states()?.join(","))
    }

    /// Builds a [`Person`] for every row.
    ///
    /// People are ordered by address location (state, city, zip). Rows with the
    /// same location keep their relative order. Names play no part in the order.
    pub fn people(&self) -> Result<Vec<Person>, ContactsError> {
        let mut people: Vec<Person> = self.parsed_rows()?.iter().map(Person::from_row).collect();

        people.sort_by(|a, b| a.address.cmp_by_location(&b.address));

        Ok(people)
    }

    /// First and last names of people whose email address matches `filter`.
    ///
    /// Results follow the order of [`SampleData::people`].
    pub fn filter_by_email_address<F>(&self, filter: F) -> Result<Vec<(String, String)>, ContactsError>
    where
        F: Fn(&str) -> bool,
    {
        Ok(self
            .people()?
            .into_iter()
            .filter(|person| filter(person.email_address.as_str()))
            .map(|person| (person.first_name, person.last_name))
            .collect())
    }

    /// Unique states of the given people, sorted and joined with commas.
    pub fn aggregate_states_of<'a, I>(people: I) -> String
    where
        I: IntoIterator<Item = &'a Person>,
    {
        people
            .into_iter()
            .map(|person| person.address.state.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub(crate) mod common;
pub(crate) mod db;

pub use common::error::ContactsError;
pub use db::{
    column::{CsvColumn, CsvRow},
    record::{Address, Person},
    row_store::RowStore,
    sample_data::SampleData,
};

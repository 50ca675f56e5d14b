pub mod column;
pub mod record;
pub mod row_store;
pub mod sample_data;

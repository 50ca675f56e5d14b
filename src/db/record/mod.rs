pub mod address;
pub mod person;

pub use address::Address;
pub use person::Person;

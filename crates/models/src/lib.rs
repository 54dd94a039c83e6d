pub mod entry;
pub mod query;

pub mod csv;
pub mod summary;

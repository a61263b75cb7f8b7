//! Pages

pub mod records;

pub use records::RecordsPage;

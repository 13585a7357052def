/// Repository trait and its in-memory implementation
pub mod repository;

/// Session-wide contract and order collections
pub mod business;

pub use business::BusinessData;
pub use repository::{InMemoryRepository, Record, Repository};

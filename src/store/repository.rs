//! Repository abstraction over a record collection.
//!
//! Records are kept newest first: `add` prepends. Lookups are by string identifier.

use crate::{
    entities::{ContractModel, OrderModel},
    errors::{Error, Result},
};

/// A stored record with a stable identifier.
pub trait Record {
    /// Human-readable kind used in `NotFound` errors.
    const KIND: &'static str;

    /// Stable identifier of the record.
    fn id(&self) -> &str;
}

impl Record for ContractModel {
    const KIND: &'static str = "Contract";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for OrderModel {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

/// List/add/update/remove access to one collection of records.
pub trait Repository<T: Record> {
    /// All records, newest first.
    fn list(&self) -> &[T];

    /// The record with identifier `id`, if any.
    fn get(&self, id: &str) -> Option<&T>;

    /// Stores a record ahead of all existing ones.
    fn add(&mut self, record: T) -> &T;

    /// Applies `apply` to the stored record with identifier `id`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no record has that identifier.
    fn update<F>(&mut self, id: &str, apply: F) -> Result<&T>
    where
        F: FnOnce(&mut T);

    /// Removes and returns the record with identifier `id`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no record has that identifier.
    fn remove(&mut self, id: &str) -> Result<T>;
}

/// Process-local repository backed by a `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    /// Wraps records that are already ordered newest first.
    #[must_use]
    pub const fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn add(&mut self, record: T) -> &T {
        self.records.insert(0, record);
        &self.records[0]
    }

    fn update<F>(&mut self, id: &str, apply: F) -> Result<&T>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        apply(&mut self.records[index]);
        Ok(&self.records[index])
    }

    fn remove(&mut self, id: &str) -> Result<T> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }
}

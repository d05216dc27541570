//! CatalogStore - Abstract CRUD storage for catalog records.

use super::CatalogError;
use crate::record::Record;

/// Abstract CRUD storage for catalog records.
///
/// `all` returns records in insertion order; views rely on that order as the
/// only tie-break when sorting and paginating. Updates keep a record's
/// original position.
pub trait CatalogStore: Send + Sync {
    /// Get a record by ID. Returns None if not found.
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>, CatalogError>;

    /// All records of a collection, in insertion order.
    fn all<R: Record>(&self) -> Result<Vec<R>, CatalogError>;

    /// Upsert a record (insert or update).
    fn save<R: Record>(&self, record: &R) -> Result<(), CatalogError>;

    /// Delete a record by ID. Returns true if it existed.
    fn delete<R: Record>(&self, id: &str) -> Result<bool, CatalogError>;

    /// Find records matching a predicate, in insertion order.
    fn find<R: Record>(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, CatalogError>;
}

//! InMemoryCatalog - HashMap-backed catalog store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::store::CatalogStore;
use super::CatalogError;
use crate::record::Record;

/// Internal stored representation of a record.
struct StoredRecord {
    bytes: Vec<u8>,
    /// Insertion sequence; `all` sorts on this so collections keep their
    /// original order. Updates reuse the existing sequence number.
    seq: u64,
}

struct Inner {
    records: HashMap<String, StoredRecord>,
    next_seq: u64,
}

/// In-memory catalog store backed by a HashMap.
///
/// Storage key is `"collection:id"`, values are JSON bytes. Clone-friendly
/// via Arc; every read deserializes a fresh copy of the record.
#[derive(Clone)]
pub struct InMemoryCatalog {
    storage: Arc<RwLock<Inner>>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Inner {
                records: HashMap::new(),
                next_seq: 0,
            })),
        }
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>, CatalogError> {
        let key = Self::make_key(R::COLLECTION, id);
        let inner = self
            .storage
            .read()
            .map_err(|_| CatalogError::LockPoisoned("get"))?;

        match inner.records.get(&key) {
            Some(stored) => {
                let record: R = serde_json::from_slice(&stored.bytes)
                    .map_err(|e| CatalogError::Serde(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn all<R: Record>(&self) -> Result<Vec<R>, CatalogError> {
        let inner = self
            .storage
            .read()
            .map_err(|_| CatalogError::LockPoisoned("all"))?;

        let prefix = format!("{}:", R::COLLECTION);
        let mut entries: Vec<(u64, &StoredRecord)> = inner
            .records
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, stored)| (stored.seq, stored))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        let mut results = Vec::with_capacity(entries.len());
        for (_, stored) in entries {
            let record: R = serde_json::from_slice(&stored.bytes)
                .map_err(|e| CatalogError::Serde(e.to_string()))?;
            results.push(record);
        }

        Ok(results)
    }

    fn save<R: Record>(&self, record: &R) -> Result<(), CatalogError> {
        let key = Self::make_key(R::COLLECTION, record.id());
        let bytes = serde_json::to_vec(record).map_err(|e| CatalogError::Serde(e.to_string()))?;

        let mut inner = self
            .storage
            .write()
            .map_err(|_| CatalogError::LockPoisoned("save"))?;

        let seq = match inner.records.get(&key) {
            Some(existing) => existing.seq,
            None => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                seq
            }
        };

        inner.records.insert(key, StoredRecord { bytes, seq });
        Ok(())
    }

    fn delete<R: Record>(&self, id: &str) -> Result<bool, CatalogError> {
        let key = Self::make_key(R::COLLECTION, id);
        let mut inner = self
            .storage
            .write()
            .map_err(|_| CatalogError::LockPoisoned("delete"))?;

        Ok(inner.records.remove(&key).is_some())
    }

    fn find<R: Record>(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, CatalogError> {
        let matching: Vec<R> = self
            .all::<R>()?
            .into_iter()
            .filter(|record| predicate(record))
            .collect();

        Ok(matching)
    }
}

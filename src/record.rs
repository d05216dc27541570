//! Record - typed catalog data with a collection name and identity.

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be stored in a catalog.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "movies", "genres").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record instance.
    fn id(&self) -> &str;
}

//! Catalog - the in-memory data source backing the movie-rental views.
//!
//! The catalog stands in for a backend API: typed per-collection CRUD over
//! records held as serialized bytes, so every read hands back an independent
//! copy and no caller can alias another caller's data.
//!
//! ## Example
//!
//! ```
//! use vidly::{CatalogExt, InMemoryCatalog, Genre, Movie};
//!
//! let catalog = InMemoryCatalog::new();
//! let action = Genre::new("action", "Action");
//! catalog.save_genre(&action).unwrap();
//! catalog
//!     .save_movie(&Movie::new("movie-1", "Terminator", action, 6, 2.5))
//!     .unwrap();
//!
//! assert_eq!(catalog.get_movies().unwrap().len(), 1);
//! assert!(catalog.delete_movie("movie-1").unwrap());
//! ```

mod fixtures;
mod in_memory;
mod store;

use std::fmt;

use crate::customer::Customer;
use crate::movie::{Genre, Movie};
use crate::rental::Rental;

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A lock guarding the store was poisoned.
    LockPoisoned(&'static str),
    /// Serialization/deserialization error.
    Serde(String),
    /// Record not found.
    NotFound { collection: String, id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::LockPoisoned(operation) => {
                write!(f, "catalog lock poisoned during {}", operation)
            }
            CatalogError::Serde(msg) => write!(f, "catalog serialization error: {}", msg),
            CatalogError::NotFound { collection, id } => {
                write!(f, "record not found: {}:{}", collection, id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience accessors for the movie-rental collections, available on any
/// `CatalogStore`. These mirror the data-source contract the views consume:
/// `get_genres`/`get_movies` plus the save/delete operations the movie form
/// and delete action need.
pub trait CatalogExt: store::CatalogStore {
    fn get_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.all()
    }

    fn save_genre(&self, genre: &Genre) -> Result<(), CatalogError> {
        self.save(genre)
    }

    fn get_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        self.all()
    }

    fn get_movie(&self, id: &str) -> Result<Option<Movie>, CatalogError> {
        self.get(id)
    }

    fn save_movie(&self, movie: &Movie) -> Result<(), CatalogError> {
        self.save(movie)
    }

    fn delete_movie(&self, id: &str) -> Result<bool, CatalogError> {
        self.delete::<Movie>(id)
    }

    fn get_customers(&self) -> Result<Vec<Customer>, CatalogError> {
        self.all()
    }

    fn get_rentals(&self) -> Result<Vec<Rental>, CatalogError> {
        self.all()
    }
}

impl<S: store::CatalogStore + ?Sized> CatalogExt for S {}

pub use in_memory::InMemoryCatalog;
pub use store::CatalogStore;

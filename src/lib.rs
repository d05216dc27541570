mod catalog;
mod customer;
mod form;
mod movie;
mod paginate;
mod projector;
mod record;
mod rental;
mod view;

pub use catalog::{CatalogError, CatalogExt, CatalogStore, InMemoryCatalog};
pub use customer::Customer;
pub use form::{FormError, LoginForm, MovieForm};
pub use movie::{Genre, Movie};
pub use paginate::paginate;
pub use projector::{
    project, PageData, SortColumn, SortField, SortOrder, ViewParams, DEFAULT_PAGE_SIZE,
};
pub use record::Record;
pub use rental::{Rental, RentalMovie};
pub use view::{CustomersView, MoviesView, RentalsView, ViewEvent, DELETED_EVENT, LIKED_EVENT};

// Re-export the derive macro so `use vidly::Record` pulls in both the trait
// and the derive, serde-style.
pub use vidly_macros::Record;

// Re-export the EventEmitter from the event_emitter_rs crate
pub use event_emitter_rs::EventEmitter;

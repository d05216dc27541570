//! Session-local view state driven by UI events.
//!
//! Each view loads its data once at mount time and holds it as session
//! state; every UI event is a synchronous reducer producing the next state,
//! and the movie list re-derives its visible page through the projector
//! after each one.

mod event;
mod lists;
mod movies;

pub use event::ViewEvent;
pub use lists::{CustomersView, RentalsView};
pub use movies::{MoviesView, DELETED_EVENT, LIKED_EVENT};

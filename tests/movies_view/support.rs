//! Shared fixtures for the movies-view scenarios.

use vidly::{CatalogExt, Genre, InMemoryCatalog, Movie};

pub fn action() -> Genre {
    Genre::new("action", "Action")
}

pub fn thriller() -> Genre {
    Genre::new("thriller", "Thriller")
}

/// A catalog holding exactly the given titles, all in the action genre.
pub fn catalog_with_titles(titles: &[&str]) -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog.save_genre(&action()).unwrap();

    for (i, title) in titles.iter().enumerate() {
        catalog
            .save_movie(&Movie::new(format!("movie-{}", i + 1), *title, action(), 5, 2.5))
            .unwrap();
    }

    catalog
}

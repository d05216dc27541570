//! Integration tests for the catalog store through the public API.

use serde::{Deserialize, Serialize};
use vidly::{CatalogExt, CatalogStore, Customer, Genre, InMemoryCatalog, Movie, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "watchlist")]
struct WatchlistEntry {
    #[record(id)]
    id: String,
    movie_id: String,
    note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
struct StaffPick {
    id: String,
    movie_id: String,
}

#[test]
fn derive_defaults_pluralize_the_collection_name() {
    assert_eq!(StaffPick::COLLECTION, "staff_picks");
    assert_eq!(WatchlistEntry::COLLECTION, "watchlist");
}

#[test]
fn derived_records_with_default_collection_round_trip() {
    let catalog = InMemoryCatalog::new();

    let pick = StaffPick {
        id: "pick-1".to_string(),
        movie_id: "movie-7".to_string(),
    };
    catalog.save(&pick).unwrap();

    let loaded = catalog.get::<StaffPick>("pick-1").unwrap().unwrap();
    assert_eq!(loaded, pick);
}

#[test]
fn movie_crud_round_trip() {
    let catalog = InMemoryCatalog::new();
    let action = Genre::new("action", "Action");
    catalog.save_genre(&action).unwrap();

    let movie = Movie::new("movie-1", "Terminator", action, 6, 2.5);
    catalog.save_movie(&movie).unwrap();

    let loaded = catalog.get_movie("movie-1").unwrap().unwrap();
    assert_eq!(loaded, movie);

    assert!(catalog.delete_movie("movie-1").unwrap());
    assert!(catalog.get_movie("movie-1").unwrap().is_none());
    assert!(!catalog.delete_movie("movie-1").unwrap());
}

#[test]
fn fixtures_expose_the_data_source_contract() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();

    // get_genres / get_movies are the contract the views consume.
    let genres = catalog.get_genres().unwrap();
    let movies = catalog.get_movies().unwrap();

    assert_eq!(genres.len(), 3);
    assert_eq!(movies.len(), 9);
    assert!(movies
        .iter()
        .all(|m| genres.iter().any(|g| g.id == m.genre.id)));
}

#[test]
fn collections_keep_insertion_order_across_updates() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let before: Vec<String> = catalog
        .get_movies()
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();

    // Update a record in the middle of the list.
    let mut movie = catalog.get_movie("movie-5").unwrap().unwrap();
    movie.number_in_stock = 1;
    catalog.save_movie(&movie).unwrap();

    let after: Vec<String> = catalog
        .get_movies()
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn derived_record_types_store_like_builtins() {
    let catalog = InMemoryCatalog::new();

    let entry = WatchlistEntry {
        id: "entry-1".to_string(),
        movie_id: "movie-7".to_string(),
        note: "for the weekend".to_string(),
    };
    catalog.save(&entry).unwrap();

    let loaded = catalog.get::<WatchlistEntry>("entry-1").unwrap().unwrap();
    assert_eq!(loaded, entry);

    let all = catalog.all::<WatchlistEntry>().unwrap();
    assert_eq!(all.len(), 1);
    assert!(catalog.delete::<WatchlistEntry>("entry-1").unwrap());
}

#[test]
fn find_filters_without_disturbing_order() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();

    let gold: Vec<Customer> = catalog
        .find::<Customer>(&|c| c.is_gold)
        .unwrap();
    assert_eq!(gold.len(), 2);
    assert_eq!(gold[0].name, "John Smith");
    assert_eq!(gold[1].name, "Yao Chang");
}

#[test]
fn shared_handles_see_the_same_data() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let handle = catalog.clone();

    handle.delete_movie("movie-9").unwrap();

    assert_eq!(catalog.get_movies().unwrap().len(), 8);
}

//! End-to-end session scenarios for the movie list screen.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use support::{catalog_with_titles, thriller};
use vidly::{
    CatalogExt, Genre, InMemoryCatalog, Movie, MoviesView, SortColumn, SortField, ViewEvent,
    DELETED_EVENT,
};

#[test]
fn five_movies_page_size_four() {
    let catalog = catalog_with_titles(&["A", "B", "C", "D", "E"]);
    let mut view = MoviesView::mount(&catalog).unwrap();

    let first = view.page_data();
    assert_eq!(first.page_records.len(), 4);
    assert_eq!(first.total_count, 5);

    view.go_to_page(2);
    let second = view.page_data();
    assert_eq!(second.page_records.len(), 1);
    assert_eq!(second.total_count, 5);
}

#[test]
fn search_ter_matches_terminator_and_terminal() {
    let catalog = catalog_with_titles(&["Terminator", "Inception", "Terminal"]);
    let mut view = MoviesView::mount(&catalog).unwrap();

    view.search("ter");

    let page = view.page_data();
    assert_eq!(page.total_count, 2);
    let titles: Vec<&str> = page.page_records.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Terminal", "Terminator"]);
}

#[test]
fn selecting_a_genre_clears_the_search() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let mut view = MoviesView::mount(&catalog).unwrap();

    view.search("ter");
    view.go_to_page(2);

    // Click "Thriller" in the genre list.
    let genre = view
        .genres()
        .iter()
        .find(|g| g.name == "Thriller")
        .unwrap()
        .clone();
    view.select_genre(genre);

    assert!(view.params().search_query.is_empty());
    assert_eq!(view.params().current_page, 1);

    let page = view.page_data();
    assert_eq!(page.total_count, 3);
    assert!(page.page_records.iter().all(|m| m.genre.id == "thriller"));
}

#[test]
fn all_genres_entry_shows_the_whole_catalog() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let mut view = MoviesView::mount(&catalog).unwrap();

    view.select_genre(thriller());
    assert_eq!(view.page_data().total_count, 3);

    let all_genres = view.genres()[0].clone();
    assert!(all_genres.is_all_genres());
    view.select_genre(all_genres);
    assert_eq!(view.page_data().total_count, 9);
}

#[test]
fn column_header_toggle_reverses_the_page() {
    let catalog = catalog_with_titles(&["B", "D", "A", "C"]);
    let mut view = MoviesView::mount(&catalog).unwrap();

    view.sort_by(SortColumn::ascending(SortField::Title));
    let ascending: Vec<String> = view
        .page_data()
        .page_records
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(ascending, vec!["A", "B", "C", "D"]);

    let toggled = view.params().sort_column.toggled(SortField::Title);
    view.sort_by(toggled);
    let descending: Vec<String> = view
        .page_data()
        .page_records
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(descending, vec!["D", "C", "B", "A"]);
}

#[test]
fn liking_then_deleting_through_events() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let mut view = MoviesView::mount(&catalog).unwrap();

    let deleted = Arc::new(AtomicUsize::new(0));
    let count = deleted.clone();
    view.on(DELETED_EVENT, move |_id| {
        count.fetch_add(1, Ordering::SeqCst);
    });

    view.apply(ViewEvent::LikeToggled("movie-1".to_string()));
    assert!(view.movies().iter().find(|m| m.id == "movie-1").unwrap().liked);

    view.apply(ViewEvent::MovieDeleted("movie-1".to_string()));
    assert_eq!(view.movies().len(), 8);
    assert_eq!(deleted.load(Ordering::SeqCst), 1);

    // Deletion is session-local; the catalog still has all nine.
    assert_eq!(catalog.get_movies().unwrap().len(), 9);
}

#[test]
fn like_survives_filtering_and_paging() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let mut view = MoviesView::mount(&catalog).unwrap();

    view.toggle_like("movie-3");
    view.search("get");

    let page = view.page_data();
    assert_eq!(page.total_count, 1);
    assert!(page.page_records[0].liked);
}

#[test]
fn page_count_tracks_the_filtered_set() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();
    let mut view = MoviesView::mount(&catalog).unwrap();

    // 9 movies at page size 4: pages of 4, 4, 1.
    assert_eq!(view.page_data().page_records.len(), 4);
    view.go_to_page(3);
    assert_eq!(view.page_data().page_records.len(), 1);

    // Filtering shrinks total_count, not just the page.
    view.select_genre(Genre::new("comedy", "Comedy"));
    let page = view.page_data();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.page_records.len(), 3);
}

#[test]
fn mounting_an_empty_catalog_yields_the_empty_state() {
    let catalog = InMemoryCatalog::new();
    let view = MoviesView::mount(&catalog).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.page_data().total_count, 0);
    assert!(view.page_data().page_records.is_empty());
}

#[test]
fn remount_picks_up_catalog_changes() {
    let catalog = InMemoryCatalog::with_fixtures().unwrap();

    let mut first_session = MoviesView::mount(&catalog).unwrap();
    first_session.delete("movie-1");
    assert_eq!(first_session.movies().len(), 8);

    // A new session reloads from the catalog, where nothing was deleted.
    let second_session = MoviesView::mount(&catalog).unwrap();
    assert_eq!(second_session.movies().len(), 9);

    // But catalog-level changes do flow into new sessions.
    catalog
        .save_movie(&Movie::new(
            "movie-10",
            "Alien",
            thriller(),
            3,
            4.5,
        ))
        .unwrap();
    let third_session = MoviesView::mount(&catalog).unwrap();
    assert_eq!(third_session.movies().len(), 10);
}

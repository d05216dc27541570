//! MoviesView - session state and reducers for the movie list screen.
//!
//! ## Example
//!
//! ```
//! use vidly::{InMemoryCatalog, MoviesView};
//!
//! let catalog = InMemoryCatalog::with_fixtures().unwrap();
//! let mut view = MoviesView::mount(&catalog).unwrap();
//!
//! view.search("ter");
//! let page = view.page_data();
//! assert_eq!(page.total_count, 1);
//! ```

use std::fmt;

use event_emitter_rs::EventEmitter;

use crate::catalog::{CatalogError, CatalogExt, CatalogStore};
use crate::movie::{Genre, Movie};
use crate::projector::{project, PageData, SortColumn, ViewParams};

/// Emitted with the movie id when a like is toggled.
pub const LIKED_EVENT: &str = "movie:liked";
/// Emitted with the movie id when a movie is removed from the session.
pub const DELETED_EVENT: &str = "movie:deleted";

/// Session state for the movie list: the collection loaded at mount time,
/// the genre list, and the view parameters the reducers mutate.
///
/// Deleting removes from this session state only; nothing is written back
/// to the catalog.
pub struct MoviesView {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    params: ViewParams,
    emitter: EventEmitter,
}

impl fmt::Debug for MoviesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoviesView")
            .field("movies", &self.movies)
            .field("genres", &self.genres)
            .field("params", &self.params)
            .finish()
    }
}

impl MoviesView {
    /// Load-on-mount: read the movie and genre collections once and hold
    /// them as session state. The "All Genres" sentinel is prepended to the
    /// genre list.
    pub fn mount(catalog: &impl CatalogStore) -> Result<Self, CatalogError> {
        let mut genres = vec![Genre::all_genres()];
        genres.extend(catalog.get_genres()?);

        Ok(Self {
            movies: catalog.get_movies()?,
            genres,
            params: ViewParams::default(),
            emitter: EventEmitter::new(),
        })
    }

    /// Page size is fixed per session; set it before handing the view to
    /// the UI.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.params.page_size = page_size;
        self
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// True when the session holds no movies at all; the UI shows the
    /// empty-state message instead of the table.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Search text changed. Clears any genre selection and resets to the
    /// first page; at most one filter is ever active.
    pub fn search(&mut self, query: impl Into<String>) {
        self.params.search_query = query.into();
        self.params.selected_genre = None;
        self.params.current_page = 1;
    }

    /// Genre clicked in the list group. Clears the search query and resets
    /// to the first page.
    pub fn select_genre(&mut self, genre: Genre) {
        self.params.selected_genre = Some(genre);
        self.params.search_query.clear();
        self.params.current_page = 1;
    }

    /// Column header clicked.
    pub fn sort_by(&mut self, sort_column: SortColumn) {
        self.params.sort_column = sort_column;
    }

    /// Page number clicked. The projector tolerates out-of-range pages, so
    /// no clamping happens here.
    pub fn go_to_page(&mut self, page: usize) {
        self.params.current_page = page;
    }

    /// Like toggled. The matching record is replaced with a flipped copy;
    /// every other record is left untouched.
    pub fn toggle_like(&mut self, movie_id: &str) {
        if let Some(index) = self.movies.iter().position(|m| m.id == movie_id) {
            let mut updated = self.movies[index].clone();
            updated.liked = !updated.liked;
            self.movies[index] = updated;
            // `emit` runs each listener on a spawned thread; join so the
            // notification completes before the reducer returns (spec §4:
            // reducers are synchronous).
            for handle in self.emitter.emit(LIKED_EVENT, movie_id.to_string()) {
                let _ = handle.join();
            }
        }
    }

    /// Delete clicked. Removes the record from session state only.
    pub fn delete(&mut self, movie_id: &str) {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != movie_id);
        if self.movies.len() != before {
            for handle in self.emitter.emit(DELETED_EVENT, movie_id.to_string()) {
                let _ = handle.join();
            }
        }
    }

    /// Run the projector against the session state. An empty collection
    /// short-circuits to the empty page without invoking the projector.
    pub fn page_data(&self) -> PageData {
        if self.movies.is_empty() {
            return PageData::empty();
        }

        debug_assert!(
            self.params.search_query.is_empty()
                || self
                    .params
                    .selected_genre
                    .as_ref()
                    .map_or(true, |g| g.is_all_genres()),
            "search query and genre filter active at the same time"
        );

        project(&self.movies, &self.params)
    }

    /// Register a listener for `LIKED_EVENT` / `DELETED_EVENT`
    /// notifications. Listeners receive the movie id.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }
}

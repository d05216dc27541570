//! UI events dispatched to the movies view.

use crate::movie::Genre;
use crate::projector::SortColumn;

use super::movies::MoviesView;

/// The discrete user-input events the movie list reacts to. Dispatching one
/// through [`MoviesView::apply`] runs the corresponding reducer; a UI shell
/// can route all its callbacks through this single surface.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    SearchChanged(String),
    GenreSelected(Genre),
    SortChanged(SortColumn),
    PageChanged(usize),
    LikeToggled(String),
    MovieDeleted(String),
}

impl MoviesView {
    /// Apply one UI event as a state transition.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SearchChanged(query) => self.search(query),
            ViewEvent::GenreSelected(genre) => self.select_genre(genre),
            ViewEvent::SortChanged(sort_column) => self.sort_by(sort_column),
            ViewEvent::PageChanged(page) => self.go_to_page(page),
            ViewEvent::LikeToggled(movie_id) => self.toggle_like(&movie_id),
            ViewEvent::MovieDeleted(movie_id) => self.delete(&movie_id),
        }
    }
}

//! ListView projector - derives the visible page from the full collection.
//!
//! `project` is a pure function of the movie collection and the view
//! parameters: filter (search query or genre, never both), stable sort,
//! then paginate. The UI re-runs it after every state change.
//!
//! ## Example
//!
//! ```
//! use vidly::{project, ViewParams};
//! # use vidly::{Genre, Movie};
//! # let action = Genre::new("action", "Action");
//! # let movies = vec![
//! #     Movie::new("1", "Terminator", action.clone(), 6, 2.5),
//! #     Movie::new("2", "Terminal", action.clone(), 3, 3.5),
//! #     Movie::new("3", "Inception", action, 5, 3.5),
//! # ];
//!
//! let mut params = ViewParams::default();
//! params.search_query = "ter".to_string();
//!
//! let page = project(&movies, &params);
//! assert_eq!(page.total_count, 2);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::movie::{Genre, Movie};
use crate::paginate::paginate;

/// Page size used when none is configured; matches a four-row table.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// The movie-table columns a user can sort on. A closed enum, so an unknown
/// sort field is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Title,
    GenreName,
    NumberInStock,
    DailyRentalRate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A sort field paired with a direction, as emitted by a column-header click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortColumn {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortColumn {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Descending,
        }
    }

    /// Flip direction if already sorting on `field`, otherwise switch to
    /// `field` ascending. This is the column-header toggle behavior.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            let order = match self.order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
            Self { field, order }
        } else {
            Self::ascending(field)
        }
    }
}

impl Default for SortColumn {
    fn default() -> Self {
        Self::ascending(SortField::Title)
    }
}

/// The UI-session-scoped parameters controlling which subset and order of
/// movies is shown. At most one of `search_query` (non-empty) and
/// `selected_genre` (non-empty id) is active; the view reducers enforce that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    pub search_query: String,
    pub selected_genre: Option<Genre>,
    pub sort_column: SortColumn,
    /// 1-based.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_genre: None,
            sort_column: SortColumn::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The projector's output: one page of records plus the filtered total the
/// pagination control needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData {
    /// Size of the filtered set, before pagination.
    pub total_count: usize,
    pub page_records: Vec<Movie>,
}

impl PageData {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            page_records: Vec::new(),
        }
    }
}

/// Derive the visible page: filter, stable sort, paginate.
///
/// Search takes precedence over genre selection when both are somehow set;
/// the view reducers keep that from happening, but the projector stays total
/// either way. Out-of-range pages produce an empty page, never an error.
pub fn project(all_records: &[Movie], params: &ViewParams) -> PageData {
    let mut filtered: Vec<&Movie> = if !params.search_query.is_empty() {
        let query = params.search_query.to_lowercase();
        all_records
            .iter()
            .filter(|movie| movie.title.to_lowercase().starts_with(&query))
            .collect()
    } else if let Some(genre) = params
        .selected_genre
        .as_ref()
        .filter(|genre| !genre.is_all_genres())
    {
        all_records
            .iter()
            .filter(|movie| movie.genre.id == genre.id)
            .collect()
    } else {
        all_records.iter().collect()
    };

    let total_count = filtered.len();

    // Vec::sort_by is stable, so equal keys keep input order in both
    // directions.
    filtered.sort_by(|a, b| {
        let ordering = compare_by(a, b, params.sort_column.field);
        match params.sort_column.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    let page_records = paginate(&filtered, params.current_page, params.page_size)
        .into_iter()
        .cloned()
        .collect();

    PageData {
        total_count,
        page_records,
    }
}

fn compare_by(a: &Movie, b: &Movie, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::GenreName => a.genre.name.cmp(&b.genre.name),
        SortField::NumberInStock => a.number_in_stock.cmp(&b.number_in_stock),
        SortField::DailyRentalRate => a.daily_rental_rate.total_cmp(&b.daily_rental_rate),
    }
}

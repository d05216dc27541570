//! Movie and login forms - presence validation and submit.
//!
//! Form fields are kept as the raw text the inputs hold; validation checks
//! presence only, and `submit` converts to the typed record on the way into
//! the catalog.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::catalog::{CatalogError, CatalogExt, CatalogStore};
use crate::movie::{Genre, Movie};

/// Error type for form operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// The named field was left empty.
    Required(&'static str),
    /// The named field holds text that does not parse as a number.
    InvalidNumber(&'static str),
    /// The submitted genre id matches no genre in the catalog.
    UnknownGenre(String),
    /// Tried to edit a movie that is not in the catalog.
    MovieNotFound(String),
    /// Catalog failure while loading or saving.
    Catalog(CatalogError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required(field) => write!(f, "{} is required", field),
            FormError::InvalidNumber(field) => write!(f, "{} must be a number", field),
            FormError::UnknownGenre(id) => write!(f, "unknown genre: {}", id),
            FormError::MovieNotFound(id) => write!(f, "movie not found: {}", id),
            FormError::Catalog(err) => write!(f, "catalog error: {}", err),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for FormError {
    fn from(err: CatalogError) -> Self {
        FormError::Catalog(err)
    }
}

/// The movie edit/create form. Fields hold the raw input text.
#[derive(Clone, Debug, Default)]
pub struct MovieForm {
    /// Some when editing an existing movie, None when creating.
    movie_id: Option<String>,
    /// Preserved across edits; the form has no control for it.
    liked: bool,
    pub title: String,
    pub genre_id: String,
    pub number_in_stock: String,
    pub daily_rental_rate: String,
}

impl MovieForm {
    /// A blank form for the "New Movie" route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from an existing movie for the edit route.
    pub fn edit(catalog: &impl CatalogStore, movie_id: &str) -> Result<Self, FormError> {
        let movie = catalog
            .get_movie(movie_id)?
            .ok_or_else(|| FormError::MovieNotFound(movie_id.to_string()))?;

        Ok(Self {
            movie_id: Some(movie.id),
            liked: movie.liked,
            title: movie.title,
            genre_id: movie.genre.id,
            number_in_stock: movie.number_in_stock.to_string(),
            daily_rental_rate: movie.daily_rental_rate.to_string(),
        })
    }

    pub fn is_editing(&self) -> bool {
        self.movie_id.is_some()
    }

    /// Presence check on every field; one error per missing field.
    pub fn validate(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FormError::Required("title"));
        }
        if self.genre_id.trim().is_empty() {
            errors.push(FormError::Required("genre"));
        }
        if self.number_in_stock.trim().is_empty() {
            errors.push(FormError::Required("number in stock"));
        }
        if self.daily_rental_rate.trim().is_empty() {
            errors.push(FormError::Required("daily rental rate"));
        }
        errors
    }

    /// Validate, convert to a typed `Movie`, and save it to the catalog.
    /// Editing keeps the movie's id and liked flag; creating generates a
    /// fresh id.
    pub fn submit(&self, catalog: &impl CatalogStore) -> Result<Movie, FormError> {
        if let Some(error) = self.validate().into_iter().next() {
            return Err(error);
        }

        let number_in_stock: u32 = self
            .number_in_stock
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber("number in stock"))?;
        let daily_rental_rate: f64 = self
            .daily_rental_rate
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber("daily rental rate"))?;

        let genre: Genre = catalog
            .get(self.genre_id.trim())?
            .ok_or_else(|| FormError::UnknownGenre(self.genre_id.trim().to_string()))?;

        let movie = Movie {
            id: self
                .movie_id
                .clone()
                .unwrap_or_else(generate_movie_id),
            title: self.title.trim().to_string(),
            genre,
            number_in_stock,
            daily_rental_rate,
            liked: self.liked,
        };

        catalog.save_movie(&movie)?;
        Ok(movie)
    }
}

fn generate_movie_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("movie-{}", nanos)
}

/// The login form. Presence validation only; no authentication happens in
/// this crate.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(FormError::Required("username"));
        }
        if self.password.trim().is_empty() {
            errors.push(FormError::Required("password"));
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

//! Movie and Genre records.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A movie genre. The empty id is reserved for the "all genres" sentinel
/// shown at the top of the genre list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The sentinel entry that disables genre filtering.
    pub fn all_genres() -> Self {
        Self {
            id: String::new(),
            name: "All Genres".to_string(),
        }
    }

    pub fn is_all_genres(&self) -> bool {
        self.id.is_empty()
    }
}

impl Record for Genre {
    const COLLECTION: &'static str = "genres";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A movie in the rental catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
    /// Toggled by user action; never seeded.
    #[serde(default)]
    pub liked: bool,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: Genre,
        number_in_stock: u32,
        daily_rental_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre,
            number_in_stock,
            daily_rental_rate,
            liked: false,
        }
    }
}

impl Record for Movie {
    const COLLECTION: &'static str = "movies";

    fn id(&self) -> &str {
        &self.id
    }
}

//! Rental records.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::record::Record;

/// The slice of a movie embedded in a rental. Rentals snapshot the title and
/// rate at checkout time rather than referencing the live catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalMovie {
    pub id: String,
    pub title: String,
    pub daily_rental_rate: f64,
    pub number_in_stock: u32,
}

impl From<&crate::movie::Movie> for RentalMovie {
    fn from(movie: &crate::movie::Movie) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            daily_rental_rate: movie.daily_rental_rate,
            number_in_stock: movie.number_in_stock,
        }
    }
}

/// An open or returned rental.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: String,
    pub customer: Customer,
    pub movie: RentalMovie,
    /// ISO-8601 date the movie went out.
    pub date_out: String,
    /// ISO-8601 return date; None while the rental is open.
    #[serde(default)]
    pub date_returned: Option<String>,
    #[serde(default)]
    pub rental_fee: Option<f64>,
}

impl Rental {
    pub fn is_open(&self) -> bool {
        self.date_returned.is_none()
    }
}

impl Record for Rental {
    const COLLECTION: &'static str = "rentals";

    fn id(&self) -> &str {
        &self.id
    }
}

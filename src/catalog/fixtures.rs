//! Seed data standing in for a backend API.

use super::store::CatalogStore;
use super::{CatalogError, InMemoryCatalog};
use crate::customer::Customer;
use crate::movie::{Genre, Movie};
use crate::rental::{Rental, RentalMovie};

impl InMemoryCatalog {
    /// A catalog pre-loaded with the sample movie-rental dataset: three
    /// genres, nine movies, four customers, and a couple of rentals.
    pub fn with_fixtures() -> Result<Self, CatalogError> {
        let catalog = Self::new();

        let action = Genre::new("action", "Action");
        let comedy = Genre::new("comedy", "Comedy");
        let thriller = Genre::new("thriller", "Thriller");

        catalog.save(&action)?;
        catalog.save(&comedy)?;
        catalog.save(&thriller)?;

        let movies = [
            Movie::new("movie-1", "Terminator", action.clone(), 6, 2.5),
            Movie::new("movie-2", "Die Hard", action.clone(), 5, 2.5),
            Movie::new("movie-3", "Get Out", thriller.clone(), 8, 3.5),
            Movie::new("movie-4", "Trip to Italy", comedy.clone(), 7, 3.5),
            Movie::new("movie-5", "Airplane", comedy.clone(), 7, 3.5),
            Movie::new("movie-6", "Wedding Party", comedy.clone(), 8, 3.5),
            Movie::new("movie-7", "Gone Girl", thriller.clone(), 7, 4.5),
            Movie::new("movie-8", "The Sixth Sense", thriller.clone(), 4, 3.5),
            Movie::new("movie-9", "The Avengers", action.clone(), 7, 3.5),
        ];
        for movie in &movies {
            catalog.save(movie)?;
        }

        let customers = [
            Customer::new("customer-1", "John Smith", "555-0134").gold(),
            Customer::new("customer-2", "Joe Jones", "555-0188"),
            Customer::new("customer-3", "Yao Chang", "555-0123").gold(),
            Customer::new("customer-4", "Tim Thomas", "555-0177"),
        ];
        for customer in &customers {
            catalog.save(customer)?;
        }

        catalog.save(&Rental {
            id: "rental-1".to_string(),
            customer: customers[0].clone(),
            movie: RentalMovie::from(&movies[0]),
            date_out: "2024-01-12".to_string(),
            date_returned: Some("2024-01-16".to_string()),
            rental_fee: Some(10.0),
        })?;
        catalog.save(&Rental {
            id: "rental-2".to_string(),
            customer: customers[1].clone(),
            movie: RentalMovie::from(&movies[6]),
            date_out: "2024-02-03".to_string(),
            date_returned: None,
            rental_fee: None,
        })?;

        Ok(catalog)
    }
}

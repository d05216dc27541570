//! Thin list views for the customers and rentals screens.
//!
//! These screens are plain paged lists, no search or sort, so they share
//! nothing with the movie projector beyond the paginate helper.

use crate::catalog::{CatalogError, CatalogExt, CatalogStore};
use crate::customer::Customer;
use crate::paginate::paginate;
use crate::projector::DEFAULT_PAGE_SIZE;
use crate::rental::Rental;

/// Session state for the customers screen.
#[derive(Clone, Debug)]
pub struct CustomersView {
    customers: Vec<Customer>,
    current_page: usize,
    page_size: usize,
}

impl CustomersView {
    pub fn mount(catalog: &impl CatalogStore) -> Result<Self, CatalogError> {
        Ok(Self {
            customers: catalog.get_customers()?,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn total_count(&self) -> usize {
        self.customers.len()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn page(&self) -> Vec<Customer> {
        paginate(&self.customers, self.current_page, self.page_size)
    }
}

/// Session state for the rentals screen.
#[derive(Clone, Debug)]
pub struct RentalsView {
    rentals: Vec<Rental>,
    current_page: usize,
    page_size: usize,
}

impl RentalsView {
    pub fn mount(catalog: &impl CatalogStore) -> Result<Self, CatalogError> {
        Ok(Self {
            rentals: catalog.get_rentals()?,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn open_rentals(&self) -> Vec<&Rental> {
        self.rentals.iter().filter(|r| r.is_open()).collect()
    }

    pub fn total_count(&self) -> usize {
        self.rentals.len()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn page(&self) -> Vec<Rental> {
        paginate(&self.rentals, self.current_page, self.page_size)
    }
}

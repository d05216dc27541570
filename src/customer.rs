//! Customer records.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A rental customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Gold customers qualify for discounts in the full product; here it is
    /// display-only.
    #[serde(default)]
    pub is_gold: bool,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            is_gold: false,
        }
    }

    pub fn gold(mut self) -> Self {
        self.is_gold = true;
        self
    }
}

impl Record for Customer {
    const COLLECTION: &'static str = "customers";

    fn id(&self) -> &str {
        &self.id
    }
}

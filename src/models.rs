// Core data structures shared across the catalog, query engine and routes.

use serde::{Deserialize, Serialize};

/// Whether a vehicle is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Buy,
    Rent,
}

impl Default for ListingType {
    fn default() -> Self {
        ListingType::Buy
    }
}

impl ListingType {
    /// Lenient parse from a query-string value. Anything that is not
    /// "rent" falls back to `Buy`, the default listing type.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(s) if s.eq_ignore_ascii_case("rent") => ListingType::Rent,
            _ => ListingType::Buy,
        }
    }
}

/// A single catalog entry. Records are immutable once seeded; both `price`
/// and `rental_rate` are always present, but only the one matching
/// `listing_type` is semantically active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u32,
    pub price: u32,
    pub rental_rate: u32,
    pub mileage: u32,
    pub image: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub transmission: String,
    pub fuel_type: String,
    pub body_type: String,
    pub location: String,
    pub featured: bool,
}

impl Vehicle {
    /// The price field that applies under the given query listing type.
    pub fn effective_price(&self, listing_type: ListingType) -> u32 {
        match listing_type {
            ListingType::Buy => self.price,
            ListingType::Rent => self.rental_rate,
        }
    }
}

/// Search parameters exactly as the URL/navigation layer produces them.
/// Every field is an optional string; numeric parsing is deferred to
/// `FilterCriteria::from_raw` so that malformed values degrade to "absent"
/// instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchParams {
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub sort: Option<String>,
}

// Catalog query engine: conjunctive filtering plus a stable sort.

use crate::catalog::Catalog;
use crate::models::{ListingType, RawSearchParams, Vehicle};

/// Parsed, validated filter criteria for one query. Absent fields impose
/// no constraint; substring matches are case-insensitive; numeric bounds
/// are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub listing_type: ListingType,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_min: Option<u32>,
    pub year_max: Option<u32>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw query-string values. Empty strings count
    /// as absent, and numeric fields that fail to parse are dropped
    /// rather than turned into an error.
    pub fn from_raw(raw: &RawSearchParams) -> Self {
        FilterCriteria {
            listing_type: ListingType::parse(raw.listing_type.as_deref()),
            make: non_empty(&raw.make),
            model: non_empty(&raw.model),
            year_min: parse_bound(&raw.min_year),
            year_max: parse_bound(&raw.max_year),
            price_min: parse_bound(&raw.min_price),
            price_max: parse_bound(&raw.max_price),
            transmission: non_empty(&raw.transmission),
            body_type: non_empty(&raw.body_type),
            fuel_type: non_empty(&raw.fuel_type),
        }
    }

    pub fn for_type(listing_type: ListingType) -> Self {
        FilterCriteria {
            listing_type,
            ..FilterCriteria::default()
        }
    }

    /// Conjunctive match: every present criterion must hold.
    fn matches(&self, vehicle: &Vehicle) -> bool {
        if vehicle.listing_type != self.listing_type {
            return false;
        }
        if let Some(ref make) = self.make {
            if !contains_ci(&vehicle.make, make) {
                return false;
            }
        }
        if let Some(ref model) = self.model {
            if !contains_ci(&vehicle.model, model) {
                return false;
            }
        }
        if let Some(min) = self.year_min {
            if vehicle.year < min {
                return false;
            }
        }
        if let Some(max) = self.year_max {
            if vehicle.year > max {
                return false;
            }
        }
        let price = vehicle.effective_price(self.listing_type);
        if let Some(min) = self.price_min {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if price > max {
                return false;
            }
        }
        if let Some(ref transmission) = self.transmission {
            if vehicle.transmission != *transmission {
                return false;
            }
        }
        if let Some(ref body_type) = self.body_type {
            if vehicle.body_type != *body_type {
                return false;
            }
        }
        if let Some(ref fuel_type) = self.fuel_type {
            if vehicle.fuel_type != *fuel_type {
                return false;
            }
        }
        true
    }
}

/// Ordering applied to a filtered result set. "Price" resolves to the
/// sale price or the daily rental rate depending on the query's listing
/// type, not on each vehicle's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    YearDesc,
    YearAsc,
}

impl SortKey {
    /// Parses the wire form (`price-asc`, `price-desc`, `year-desc`,
    /// `year-asc`); anything unrecognised falls back to `PriceAsc`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-desc") => SortKey::PriceDesc,
            Some("year-desc") => SortKey::YearDesc,
            Some("year-asc") => SortKey::YearAsc,
            _ => SortKey::PriceAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::YearDesc => "year-desc",
            SortKey::YearAsc => "year-asc",
        }
    }
}

/// Runs one query: filter, then stable sort. Never fails; an empty result
/// (including the min-bound > max-bound case) is a valid outcome. The
/// catalog itself is never mutated.
pub fn search(catalog: &Catalog, criteria: &FilterCriteria, sort: SortKey) -> Vec<Vehicle> {
    let mut results: Vec<Vehicle> = catalog
        .all()
        .iter()
        .filter(|v| criteria.matches(v))
        .cloned()
        .collect();

    let listing_type = criteria.listing_type;
    match sort {
        // Vec::sort_by_key / sort_by are stable, so ties keep catalog order.
        SortKey::PriceAsc => results.sort_by_key(|v| v.effective_price(listing_type)),
        SortKey::PriceDesc => {
            results.sort_by(|a, b| {
                b.effective_price(listing_type)
                    .cmp(&a.effective_price(listing_type))
            });
        }
        SortKey::YearDesc => results.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::YearAsc => results.sort_by_key(|v| v.year),
    }
    results
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_bound(value: &Option<String>) -> Option<u32> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingType::{Buy, Rent};

    fn raw(pairs: &[(&str, &str)]) -> RawSearchParams {
        let mut r = RawSearchParams::default();
        for (key, value) in pairs {
            let v = Some(value.to_string());
            match *key {
                "type" => r.listing_type = v,
                "make" => r.make = v,
                "model" => r.model = v,
                "minYear" => r.min_year = v,
                "maxYear" => r.max_year = v,
                "minPrice" => r.min_price = v,
                "maxPrice" => r.max_price = v,
                "transmission" => r.transmission = v,
                "bodyType" => r.body_type = v,
                "fuelType" => r.fuel_type = v,
                "sort" => r.sort = v,
                other => panic!("unknown key {other}"),
            }
        }
        r
    }

    fn ids(results: &[Vehicle]) -> Vec<&str> {
        results.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn results_are_a_subset_of_the_requested_listing_type() {
        let catalog = Catalog::seed();
        for listing_type in [Buy, Rent] {
            let criteria = FilterCriteria::for_type(listing_type);
            let results = search(&catalog, &criteria, SortKey::PriceAsc);
            assert!(!results.is_empty());
            assert!(results.iter().all(|v| v.listing_type == listing_type));
            assert!(results
                .iter()
                .all(|v| catalog.find_by_id(&v.id).is_some()));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = Catalog::seed();
        let criteria =
            FilterCriteria::from_raw(&raw(&[("type", "buy"), ("fuelType", "Gasoline")]));
        let first = search(&catalog, &criteria, SortKey::YearDesc);
        let second = search(&catalog, &criteria, SortKey::YearDesc);
        assert_eq!(first, second);
    }

    #[test]
    fn make_substring_match_is_case_insensitive() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::from_raw(&raw(&[
            ("type", "buy"),
            ("make", "porsche"),
            ("minPrice", "100000"),
        ]));
        let results = search(&catalog, &criteria, SortKey::PriceAsc);
        // The Taycan is also a Porsche but is listed for rent.
        assert_eq!(ids(&results), ["4"]);
        assert_eq!(results[0].model, "911 Turbo S");
        assert_eq!(results[0].price, 215_000);
    }

    #[test]
    fn rent_queries_compare_against_the_rental_rate() {
        let catalog = Catalog::seed();
        let criteria =
            FilterCriteria::from_raw(&raw(&[("type", "rent"), ("maxPrice", "250")]));
        let results = search(&catalog, &criteria, SortKey::PriceAsc);
        // Only the Lexus LS 500h rents at or under 250/day; the Range
        // Rover (275) and everything pricier is excluded.
        assert_eq!(ids(&results), ["10"]);
        assert_eq!(results[0].rental_rate, 199);
    }

    #[test]
    fn price_sorts_reverse_each_other_for_unique_prices() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::for_type(Buy);
        let asc = search(&catalog, &criteria, SortKey::PriceAsc);
        let mut desc = search(&catalog, &criteria, SortKey::PriceDesc);
        desc.reverse();
        assert_eq!(asc, desc);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn year_sort_keeps_catalog_order_for_ties() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::for_type(Buy);
        let results = search(&catalog, &criteria, SortKey::YearAsc);
        // 2022: Audi RS7, Lamborghini Urus; 2023: the rest in seed order.
        assert_eq!(ids(&results), ["3", "5", "1", "2", "4", "6"]);
    }

    #[test]
    fn inverted_bounds_yield_an_empty_result_not_an_error() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::from_raw(&raw(&[
            ("type", "buy"),
            ("minYear", "2024"),
            ("maxYear", "2020"),
        ]));
        assert!(search(&catalog, &criteria, SortKey::PriceAsc).is_empty());
    }

    #[test]
    fn malformed_numbers_are_treated_as_absent() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::from_raw(&raw(&[
            ("type", "buy"),
            ("minPrice", "not-a-number"),
            ("maxYear", ""),
        ]));
        assert_eq!(criteria.price_min, None);
        assert_eq!(criteria.year_max, None);
        let results = search(&catalog, &criteria, SortKey::PriceAsc);
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn exact_filters_are_conjunctive() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::from_raw(&raw(&[
            ("type", "rent"),
            ("bodyType", "Coupe"),
            ("fuelType", "Gasoline"),
        ]));
        let results = search(&catalog, &criteria, SortKey::PriceAsc);
        assert_eq!(ids(&results), ["12", "9", "8"]);
    }

    #[test]
    fn unknown_sort_strings_fall_back_to_price_asc() {
        assert_eq!(SortKey::parse(Some("shiny-first")), SortKey::PriceAsc);
        assert_eq!(SortKey::parse(None), SortKey::PriceAsc);
        assert_eq!(SortKey::parse(Some("year-desc")), SortKey::YearDesc);
    }
}

// Handlers for server-rendered HTML pages

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    models::{ListingType, RawSearchParams, Vehicle},
    query::{self, FilterCriteria, SortKey},
    AppState,
};

// --- View models ---

/// Flattened card fields so the templates stay free of pricing logic.
pub struct VehicleCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub tag: String,
    pub price_label: String,
    pub mileage_label: String,
    pub transmission: String,
    pub fuel_type: String,
}

impl VehicleCard {
    fn from_vehicle(vehicle: &Vehicle) -> Self {
        let price_label = match vehicle.listing_type {
            ListingType::Buy => format!("${}", thousands(vehicle.price)),
            ListingType::Rent => format!("${}/day", thousands(vehicle.rental_rate)),
        };
        VehicleCard {
            id: vehicle.id.clone(),
            title: format!("{} {} {}", vehicle.year, vehicle.make, vehicle.model),
            image: vehicle.image.clone(),
            tag: tag_label(vehicle.listing_type).to_string(),
            price_label,
            mileage_label: thousands(vehicle.mileage),
            transmission: vehicle.transmission.clone(),
            fuel_type: vehicle.fuel_type.clone(),
        }
    }
}

pub struct Dot {
    pub active: bool,
}

fn tag_label(listing_type: ListingType) -> &'static str {
    match listing_type {
        ListingType::Buy => "For Sale",
        ListingType::Rent => "For Rent",
    }
}

fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// --- Templates ---

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    window: Vec<VehicleCard>,
    dots: Vec<Dot>,
}

#[derive(Template)]
#[template(path = "vehicles.html")]
struct VehiclesTemplate {
    heading: String,
    count: usize,
    sort_label: String,
    reset_href: String,
    cards: Vec<VehicleCard>,
}

#[derive(Template)]
#[template(path = "vehicle_detail.html")]
struct DetailTemplate {
    title: String,
    image: String,
    tag: String,
    price_label: String,
    year: u32,
    mileage_label: String,
    transmission: String,
    body_type: String,
    fuel_type: String,
    location: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

// --- Page Handlers ---

/// Home page: hero plus the visible window of the featured carousel.
pub async fn home(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let featured = app_state.catalog.featured();
    let state = app_state.carousel.state().await;
    let (start, end) = state.window();
    let window = featured[start..end]
        .iter()
        .copied()
        .map(VehicleCard::from_vehicle)
        .collect();
    let dots = (0..=state.max_index())
        .map(|i| Dot {
            active: i == state.index(),
        })
        .collect();
    Ok(HomeTemplate { window, dots }.into_response())
}

/// Listing page: query parameters -> filter criteria -> ordered cards.
/// Zero results render a dedicated empty state, not an error.
pub async fn vehicles(
    State(app_state): State<AppState>,
    Query(raw): Query<RawSearchParams>,
) -> Result<Response, AppError> {
    let criteria = FilterCriteria::from_raw(&raw);
    let sort = SortKey::parse(raw.sort.as_deref());
    let results = query::search(&app_state.catalog, &criteria, sort);
    tracing::info!(
        listing_type = ?criteria.listing_type,
        count = results.len(),
        "listing page"
    );

    let (heading, type_param, price_word) = match criteria.listing_type {
        ListingType::Buy => ("Cars for Sale", "buy", "Price"),
        ListingType::Rent => ("Cars for Rent", "rent", "Rate"),
    };
    let sort_label = match sort {
        SortKey::PriceAsc => format!("{price_word}: Low to High"),
        SortKey::PriceDesc => format!("{price_word}: High to Low"),
        SortKey::YearDesc => "Year: Newest First".to_string(),
        SortKey::YearAsc => "Year: Oldest First".to_string(),
    };

    let template = VehiclesTemplate {
        heading: heading.to_string(),
        count: results.len(),
        sort_label,
        reset_href: format!("/vehicles?type={type_param}"),
        cards: results.iter().map(VehicleCard::from_vehicle).collect(),
    };
    Ok(template.into_response())
}

/// Detail page. An unknown id renders the not-found page with a 404
/// status and a way back to the listing.
pub async fn vehicle_detail(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match app_state.catalog.find_by_id(&id) {
        Some(vehicle) => {
            let card = VehicleCard::from_vehicle(vehicle);
            let template = DetailTemplate {
                title: card.title,
                image: card.image,
                tag: card.tag,
                price_label: card.price_label,
                year: vehicle.year,
                mileage_label: card.mileage_label,
                transmission: vehicle.transmission.clone(),
                body_type: vehicle.body_type.clone(),
                fuel_type: vehicle.fuel_type.clone(),
                location: vehicle.location.clone(),
            };
            Ok(template.into_response())
        }
        None => {
            tracing::info!(%id, "vehicle not found");
            let mut response = NotFoundTemplate.into_response();
            *response.status_mut() = StatusCode::NOT_FOUND;
            Ok(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_250), "1,250");
        assert_eq!(thousands(229_495), "229,495");
        assert_eq!(thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn card_price_label_follows_the_listing_type() {
        let catalog = crate::catalog::Catalog::seed();
        let bmw = catalog.find_by_id("1").unwrap();
        assert_eq!(VehicleCard::from_vehicle(bmw).price_label, "$110,995");
        let lexus = catalog.find_by_id("10").unwrap();
        assert_eq!(VehicleCard::from_vehicle(lexus).price_label, "$199/day");
    }
}

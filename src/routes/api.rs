// Handlers for backend API endpoints

use axum::{
    extract::{Json as JsonExtract, Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::{
    carousel::CarouselSnapshot,
    chat::{ChatMessage, ChatPanel},
    contact::{ContactDraft, ContactPanel},
    error::{AppError, AppResult},
    models::{RawSearchParams, Vehicle},
    query::{self, FilterCriteria, SortKey},
};

use crate::AppState;

// --- Response Wrappers ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    count: usize,
    vehicles: Vec<Vehicle>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStateResponse {
    panel: ChatPanel,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendResponse {
    accepted: bool,
    message: Option<ChatMessage>,
}

#[derive(Serialize)]
struct GenericResponse {
    success: bool,
    message: Option<String>,
}

// --- Request Structs ---

#[derive(Deserialize)]
pub struct GotoRequest {
    index: usize,
}

#[derive(Deserialize)]
pub struct ChatSendRequest {
    text: String,
}

// --- API Handlers ---

/// Catalog search. Always 200; an empty `vehicles` array is a valid
/// result, never a failure.
pub async fn search_vehicles(
    State(app_state): State<AppState>,
    Query(raw): Query<RawSearchParams>,
) -> Json<SearchResponse> {
    let criteria = FilterCriteria::from_raw(&raw);
    let sort = SortKey::parse(raw.sort.as_deref());
    let vehicles = query::search(&app_state.catalog, &criteria, sort);
    tracing::info!(
        listing_type = ?criteria.listing_type,
        sort = sort.as_str(),
        count = vehicles.len(),
        "vehicle search"
    );
    Json(SearchResponse {
        count: vehicles.len(),
        vehicles,
    })
}

pub async fn get_vehicle(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vehicle>> {
    match app_state.catalog.find_by_id(&id) {
        Some(vehicle) => Ok(Json(vehicle.clone())),
        None => Err(AppError::NotFound(format!("vehicle {id}"))),
    }
}

pub async fn get_featured(State(app_state): State<AppState>) -> Json<Vec<Vehicle>> {
    let featured: Vec<Vehicle> = app_state
        .catalog
        .featured()
        .into_iter()
        .cloned()
        .collect();
    Json(featured)
}

// --- Carousel ---

pub async fn carousel_state(State(app_state): State<AppState>) -> Json<CarouselSnapshot> {
    Json(app_state.carousel.snapshot().await)
}

pub async fn carousel_next(State(app_state): State<AppState>) -> Json<CarouselSnapshot> {
    let snapshot = app_state.carousel.next().await;
    tracing::debug!(index = snapshot.index, "carousel next");
    Json(snapshot)
}

pub async fn carousel_prev(State(app_state): State<AppState>) -> Json<CarouselSnapshot> {
    let snapshot = app_state.carousel.prev().await;
    tracing::debug!(index = snapshot.index, "carousel prev");
    Json(snapshot)
}

pub async fn carousel_goto(
    State(app_state): State<AppState>,
    JsonExtract(req): JsonExtract<GotoRequest>,
) -> Json<CarouselSnapshot> {
    let snapshot = app_state.carousel.go_to(req.index).await;
    tracing::debug!(index = snapshot.index, "carousel goto");
    Json(snapshot)
}

// --- Chat ---

pub async fn chat_state(State(app_state): State<AppState>) -> Json<ChatStateResponse> {
    Json(ChatStateResponse {
        panel: app_state.chat.panel().await,
        messages: app_state.chat.messages().await,
    })
}

pub async fn chat_toggle(State(app_state): State<AppState>) -> Json<ChatStateResponse> {
    let panel = app_state.chat.toggle_open().await;
    tracing::debug!(?panel, "chat toggled");
    Json(ChatStateResponse {
        panel,
        messages: app_state.chat.messages().await,
    })
}

pub async fn chat_minimize(State(app_state): State<AppState>) -> Json<ChatStateResponse> {
    let panel = app_state.chat.toggle_minimize().await;
    Json(ChatStateResponse {
        panel,
        messages: app_state.chat.messages().await,
    })
}

/// Appends the user message and schedules the bot reply; the reply lands
/// in the log after the configured delay and can be observed via
/// `chat_state`. Blank input is reported as not accepted.
pub async fn chat_send(
    State(app_state): State<AppState>,
    JsonExtract(req): JsonExtract<ChatSendRequest>,
) -> Json<ChatSendResponse> {
    let message = app_state.chat.send(&req.text).await;
    Json(ChatSendResponse {
        accepted: message.is_some(),
        message,
    })
}

// --- Contact ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStateResponse {
    panel: ContactPanel,
}

pub async fn contact_state(State(app_state): State<AppState>) -> Json<ContactStateResponse> {
    Json(ContactStateResponse {
        panel: app_state.contact.panel().await,
    })
}

pub async fn contact_expand(State(app_state): State<AppState>) -> Json<ContactStateResponse> {
    app_state.contact.expand().await;
    Json(ContactStateResponse {
        panel: app_state.contact.panel().await,
    })
}

pub async fn contact_collapse(State(app_state): State<AppState>) -> Json<ContactStateResponse> {
    app_state.contact.collapse().await;
    Json(ContactStateResponse {
        panel: app_state.contact.panel().await,
    })
}

pub async fn submit_contact(
    State(app_state): State<AppState>,
    JsonExtract(draft): JsonExtract<ContactDraft>,
) -> Result<impl IntoResponse, AppError> {
    match app_state.contact.submit(draft).await {
        Ok(()) => {
            tracing::info!("contact form submitted");
            Ok(Json(GenericResponse {
                success: true,
                message: Some(
                    "Your message has been sent. We will contact you shortly.".to_string(),
                ),
            }))
        }
        Err(missing) => Err(AppError::Validation(
            missing.into_iter().map(String::from).collect(),
        )),
    }
}

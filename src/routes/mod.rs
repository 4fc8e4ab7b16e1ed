// Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

mod api;
mod pages;

pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/vehicles", get(api::search_vehicles))
        .route("/vehicles/:id", get(api::get_vehicle))
        .route("/featured", get(api::get_featured))
        .route("/carousel", get(api::carousel_state))
        .route("/carousel/next", post(api::carousel_next))
        .route("/carousel/prev", post(api::carousel_prev))
        .route("/carousel/goto", post(api::carousel_goto))
        .route("/chat", get(api::chat_state))
        .route("/chat/toggle", post(api::chat_toggle))
        .route("/chat/minimize", post(api::chat_minimize))
        .route("/chat/messages", post(api::chat_send))
        .route("/contact", get(api::contact_state))
        .route("/contact", post(api::submit_contact))
        .route("/contact/expand", post(api::contact_expand))
        .route("/contact/collapse", post(api::contact_collapse))
        .with_state(app_state.clone());

    Router::new()
        .route("/", get(pages::home))
        .route("/vehicles", get(pages::vehicles))
        .route("/vehicles/:id", get(pages::vehicle_detail))
        .nest("/api", api_router)
        .with_state(app_state)
}

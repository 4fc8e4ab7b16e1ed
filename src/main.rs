use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{extract::FromRef, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::carousel::{Carousel, VISIBLE_SLIDES};
use crate::catalog::Catalog;
use crate::chat::Chat;
use crate::config::Settings;
use crate::contact::Contact;

mod carousel;
mod catalog;
mod chat;
mod config;
mod contact;
mod error;
mod models;
mod query;
mod routes;

// Shared application state: the read-only catalog plus the widget state
// machines, all injected here rather than living in globals.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<Catalog>,
    pub carousel: Carousel,
    pub chat: Chat,
    pub contact: Contact,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first; ignore errors (e.g., file not found).
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "premiumauto=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing PremiumAuto server...");

    let settings = Settings::new().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully.");

    let catalog = Arc::new(Catalog::seed());
    tracing::info!(vehicles = catalog.len(), "Catalog seeded.");

    let carousel = Carousel::new(
        catalog.featured().len(),
        VISIBLE_SLIDES,
        settings.carousel_interval(),
        settings.carousel_cooldown(),
    );
    carousel.start().await;

    let chat = Chat::new(settings.chat_reply_delay());

    let app_state = AppState {
        settings: Arc::new(settings),
        catalog,
        carousel: carousel.clone(),
        chat: chat.clone(),
        contact: Contact::new(),
    };

    let static_dir = app_state.settings.static_dir.clone();
    let router: Router = routes::create_router(app_state.clone());
    let app = router
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = app_state
        .settings
        .server_address
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address format: {}",
                app_state.settings.server_address
            )
        })?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    // Not reached in normal operation; kept so a future graceful-shutdown
    // path tears the timers down.
    carousel.shutdown().await;
    chat.shutdown().await;
    Ok(())
}

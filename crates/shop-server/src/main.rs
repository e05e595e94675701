//! bookshop HTTP Server
//!
//! Axum-based server exposing the checkout JSON API and serving the WASM
//! frontend. All payment state lives at Stripe; the process holds nothing
//! but the read-only catalog.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_core::Catalog;
use shop_payments::{IntentService, PaymentsConfig};

use crate::handlers::{checkout_view, create_payment_intent, health_check, success_view};
use crate::state::AppState;

/// Build the application router.
pub(crate) fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static frontend with an index.html fallback so the client-routed
    // /checkout and /success pages resolve on direct navigation
    let frontend = ServeDir::new("static").fallback(ServeFile::new("static/index.html"));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Page data
        .route("/api/checkout", get(checkout_view))
        .route("/api/success", get(success_view))
        // Payments
        .route("/create-payment-intent", post(create_payment_intent))
        // Static files (WASM frontend)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Stripe keys are required; the demo is inert without them
    let config = PaymentsConfig::from_env()?;

    let catalog = Arc::new(Catalog::builtin());
    let intents = Arc::new(IntentService::new(&config, catalog.clone()));

    tracing::info!("✓ Stripe configured");

    let state = AppState {
        catalog,
        intents,
        publishable_key: config.publishable_key,
    };

    let app = app(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 bookshop server running on http://{}", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  GET  /api/checkout          - Checkout page data");
    tracing::info!("  GET  /api/success           - Payment result data");
    tracing::info!("  POST /create-payment-intent - Create a payment intent");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

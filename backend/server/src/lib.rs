//! # Presidents
//!
//! Browser lookup over the U.S. presidents list.
//!
//! ## Pages
//! - `/`: index of every presidency, linking to detail pages
//! - `/president/{num}`: every field of one president plus the ordinal ("the 16th President")
//! - `/search`: radio-button category plus free text, name search when no category is sent
//! - `/browse`: select menu that jumps straight to a detail page
//!
//! ## Search results
//! - One match redirects to the detail page
//! - Several matches render the index layout titled "Search Results"
//! - None re-renders the form with "Sorry, no match was found."
//!
//! ## JSON
//! - `/api/presidents`, `/api/presidents/{num}`, `/api/search?category=&text=`
//!
//! ## Data
//! The CSV is read once in [`AppState::new`] before the listener binds. Nothing writes to it
//! afterwards, so handlers share it through an `Arc` without locking.
//!
//! ## Setup
//!
//! Run with the shipped data.
//! ```sh
//! RUST_LOG=info cargo run -p presidents
//! ```
//!
//! Override the port or data file.
//! ```sh
//! cargo run -p presidents -- --port 8080 --data data/presidents.csv
//! ```
use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    api_detail_handler, api_list_handler, api_search_handler, browse_handler,
    browse_submit_handler, detail_handler, index_handler, search_form_handler, search_handler,
};
pub use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(index_handler))
        .route("/president/{num}", get(detail_handler))
        .route("/search", get(search_form_handler).post(search_handler))
        .route("/browse", get(browse_handler).post(browse_submit_handler))
        .route("/api/presidents", get(api_list_handler))
        .route("/api/presidents/{num}", get(api_detail_handler))
        .route("/api/search", get(api_search_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(port: Option<u16>, data_path: Option<PathBuf>) -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?.with_overrides(port, data_path);

    info!("Loading presidents from {}...", config.data_path.display());
    let state = AppState::new(config).context("Failed to load presidents data")?;
    info!("Loaded {} presidents", state.catalog.len());

    info!("Starting server...");
    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

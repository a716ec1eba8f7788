mod config;

use std::sync::Arc;

use app::{component, shell, types::AppState};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::Settings;
use dotenvy::dotenv;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use remote_store::RemoteStore;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::trace::TraceLayer;

async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        tracing::warn!("There is no corresponding .env file");
    }

    let conf = match get_configuration(Some("Cargo.toml")) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!("Failed to get configuration: {err}");
            return;
        }
    };
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("Invalid settings: {err}");
            return;
        }
    };
    let store = match RemoteStore::new(settings.store_config()) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("Failed to build store client: {err}");
            return;
        }
    };
    tracing::info!(
        api = store.base_url(),
        timeout_secs = settings.api_timeout.as_secs(),
        "Using remote portfolio store"
    );

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let app_state = AppState {
        store: Arc::new(store),
        leptos_options: leptos_options.clone(),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .layer(tower::ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("video/mp4").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind tcp listener to {addr}: {err}");
            return;
        }
    };
    tracing::info!("Listening on http://{addr}");

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => tracing::info!("Server shutdown gracefully"),
        Err(err) => tracing::error!("Failed to serve app: {err:?}"),
    }
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the room endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. A room path serves three things:
//! `GET /{room}` renders the page, `POST /{room}` publishes a message, and
//! `GET /{room}/notify` upgrades to the one-way notification socket.

pub mod messages;
pub mod notify;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;


/// Message and notification routes, without page rendering.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/{room}", post(messages::post_message))
        .route("/{room}/notify", get(notify::handle_notify))
        .with_state(state)
}

/// Full application: room endpoints + Leptos SSR pages + compiled assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    Ok(site(state, conf.leptos_options))
}

/// Assemble the full router from already loaded Leptos options.
pub fn site(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let client_config = state.settings.client;

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(client_config),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone(), client_config)
            },
        )
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos pages, the compiled
//! WASM/CSS bundle under `/pkg`, and a liveness probe. Every request passes
//! through `TraceLayer`, so access logs follow the `RUST_LOG` filter.

pub mod health;

use std::path::Path;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full site: Leptos SSR routes plus static assets and health.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = options.site_root.to_string();

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options);

    base_routes(Path::new(&site_root))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on rendering: health and the static bundle.
pub fn base_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

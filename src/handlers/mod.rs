//! HTTP handlers and router assembly

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::admin_gate;
use crate::state::AppState;

pub mod admin;
pub mod assets;
pub mod site;

/// Build the application router
///
/// One task per inbound request, no ordering guarantee between requests.
/// All `/admin*` paths, including unmatched ones, sit behind the admin gate.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/", get(admin::dashboard).post(admin::dispatch))
        .route("/edit/{id}", get(admin::edit_page))
        .route("/add", post(admin::create))
        .route("/save", post(admin::update))
        .route("/delete", post(admin::delete))
        .route("/logout", get(admin::logout))
        .fallback(assets::serve_static)
        .layer(from_fn_with_state(state.clone(), admin_gate));

    Router::new()
        .route("/", get(site::index))
        .route("/index.html", get(site::index))
        .route("/api/tours", get(site::tours_fragment))
        .route("/tour/{id}", get(site::tour_detail))
        .nest("/admin", admin_routes)
        .fallback(assets::serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

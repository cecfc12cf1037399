//! Static asset fallback and 404 pages
//!
//! A path containing a `.` that does not end in `.html` is looked up under
//! the static root; every other unmatched path gets the site 404 page.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::path::Path;

use crate::state::AppState;

const FILE_NOT_FOUND_PAGE: &str = "<h1>404 — Файл не найден</h1>";
const PAGE_NOT_FOUND_FALLBACK: &str = "<h1>404 — Страница не найдена</h1>";

/// Router fallback handler
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path.contains('.') && !path.ends_with(".html") {
        return serve_file(&state, path).await;
    }
    not_found_page(&state).await
}

async fn serve_file(state: &AppState, path: &str) -> Response {
    let relative = path.trim_start_matches('/');

    // The static root is the boundary; parent components never escape it.
    if Path::new(relative)
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return not_found(FILE_NOT_FOUND_PAGE);
    }

    let full = state.config().static_dir.join(relative);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            let mut response = bytes.into_response();
            if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
            response
        }
        Err(_) => not_found(FILE_NOT_FOUND_PAGE),
    }
}

/// The site 404 page from the static root, with an inline fallback
pub async fn not_found_page(state: &AppState) -> Response {
    let path = state.config().static_dir.join("errors").join("404.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => not_found(PAGE_NOT_FOUND_FALLBACK),
    }
}

/// Minimal 404 response with the given HTML body
pub fn not_found(body: &'static str) -> Response {
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

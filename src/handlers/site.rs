//! Public site handlers: main page, card filter API, tour detail

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use std::collections::HashMap;

use crate::db::filter::TourFilter;
use crate::error::AppError;
use crate::render::{cards::render_cards, detail::render_detail};
use crate::state::AppState;
use crate::template::missing_template_fragment;

use super::assets;

/// Main page template path relative to the static root
pub const INDEX_TEMPLATE: &str = "index.html";

/// Inline 404 body for an unknown tour id
const TOUR_NOT_FOUND_PAGE: &str = "<h1>Тур не найден</h1><a href='/'>← На главную</a>";

/// Payload of `GET /api/tours`
#[derive(Debug, Serialize)]
pub struct CardsResponse {
    /// Rendered card fragments, concatenated in result order
    pub cards: String,
    /// Number of matching tours
    pub total: usize,
}

/// `GET /` and `GET /index.html`: full unfiltered listing with total count
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let (cards, total) = render_cards(&state, &TourFilter::default()).await?;

    let template = match state.templates().load(INDEX_TEMPLATE).await {
        Ok(template) => template,
        Err(error) => {
            tracing::error!(%error, "index template unavailable");
            return Ok(Html(missing_template_fragment(&error)).into_response());
        }
    };

    let html = template.render(&[("CARDS", &cards), ("TOTAL_TOURS", &total.to_string())]);
    Ok(Html(html).into_response())
}

/// `GET /api/tours`: filtered/sorted card fragments as JSON
pub async fn tours_fragment(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CardsResponse>, AppError> {
    let filter = TourFilter::from_params(&params);
    let (cards, total) = render_cards(&state, &filter).await?;
    Ok(Json(CardsResponse { cards, total }))
}

/// `GET /tour/{id}`: detail page, or 404 for an unknown or non-numeric id
///
/// A non-numeric id never names a tour and gets the site 404 page; a numeric
/// id with no row gets the inline not-found page.
pub async fn tour_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(tour_id) = id.parse::<i64>() else {
        return Ok(assets::not_found_page(&state).await);
    };

    match render_detail(&state, tour_id).await? {
        Some(html) => Ok(Html(html).into_response()),
        None => Ok(assets::not_found(TOUR_NOT_FOUND_PAGE)),
    }
}

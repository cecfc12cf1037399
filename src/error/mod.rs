//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::template::TemplateError;

/// Application error type
///
/// Every variant surfaces to the client as a generic 500 page; the detail is
/// logged server-side only.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database connectivity or query error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Required template asset could not be read
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>500 — Ошибка сервера</h1>"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_maps_to_500() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

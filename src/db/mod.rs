//! Database access: pool construction, row models, and tour queries

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseSettings;

pub mod filter;
pub mod models;
pub mod tours;

/// Build the connection pool
///
/// The pool connects lazily on first use and bounds concurrent store
/// connections at `max_connections`.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_lazy(&settings.url)
}

//! tour-catalog: server-rendered tour-booking catalog
//!
//! Lists tours as rendered HTML cards with AJAX filtering and sorting, serves
//! per-tour detail pages with organizer info and day-by-day itineraries, and
//! exposes a session-gated admin dashboard for tour CRUD. Backed by
//! PostgreSQL; pages are produced by literal placeholder substitution into
//! HTML templates under the static root.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tour_catalog::{config::AppConfig, db, handlers, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     tour_catalog::observability::init()?;
//!
//!     let config = AppConfig::load()?;
//!     let pool = db::connect(&config.database)?;
//!     let state = AppState::new(config, pool);
//!
//!     let listener = tokio::net::TcpListener::bind(state.config().bind_addr()).await?;
//!     axum::serve(listener, handlers::router(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod render;
pub mod state;
pub mod template;

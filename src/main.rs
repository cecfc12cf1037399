use tour_catalog::{config::AppConfig, db, handlers, observability, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = AppConfig::load()?;
    let pool = db::connect(&config.database)?;
    let state = AppState::new(config, pool);

    let addr = state.config().bind_addr();
    tracing::info!(%addr, "server listening");
    tracing::info!("admin dashboard at http://{addr}/admin");
    tracing::info!(
        static_root = %state.config().static_dir.display(),
        "serving static assets"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, handlers::router(state)).await?;

    Ok(())
}

//! Application state shared across request handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{auth::SessionStore, config::AppConfig, template::TemplateStore};

/// Shared application state
///
/// Cloned per handler; all contents are cheap handles. The session store is
/// owned here and shared with the admin gate middleware, never a global.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    pool: PgPool,
    sessions: SessionStore,
    templates: TemplateStore,
}

impl AppState {
    /// Create application state from loaded configuration and a pool
    #[must_use]
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let templates = TemplateStore::new(config.static_dir.clone());
        Self {
            config: Arc::new(config),
            pool,
            sessions: SessionStore::new(),
            templates,
        }
    }

    /// Application configuration
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Database connection pool
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Admin session store
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Page template store rooted at the static directory
    #[must_use]
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }
}

//! Admin session gate
//!
//! Sessions are opaque tokens mapped to expiry timestamps in a process-wide
//! in-memory store: created on login, checked on every admin request, removed
//! on logout. Expired entries are treated as unauthenticated but never swept;
//! they accumulate until restart, and all sessions are lost on restart. Both
//! are accepted limitations of this catalog.

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Session cookie name
pub const SESSION_COOKIE: &str = "session";

const SESSION_TTL_HOURS: i64 = 3;

// Placeholder credentials, not production auth: exactly one accepted pair.
const ADMIN_LOGIN: &str = "admin";
const ADMIN_PASSWORD: &str = "12345";

/// Login form body
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Check the submitted credentials against the fixed pair
#[must_use]
pub fn verify_credentials(form: &LoginForm) -> bool {
    form.login.as_deref() == Some(ADMIN_LOGIN) && form.password.as_deref() == Some(ADMIN_PASSWORD)
}

/// Concurrency-safe map of session token to expiry
///
/// Cheap to clone; all clones share one map. Owned by `AppState` and handed
/// to the gate middleware by reference, never a global.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its fresh, unguessable token
    ///
    /// The entry expires a fixed TTL from now.
    #[must_use]
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .lock()
            .insert(token.clone(), Utc::now() + Duration::hours(SESSION_TTL_HOURS));
        token
    }

    /// Token is present and not yet expired
    ///
    /// Failed lookups do not evict; expiry is lazy.
    #[must_use]
    pub fn is_valid(&self, token: &str) -> bool {
        self.inner
            .lock()
            .get(token)
            .is_some_and(|expiry| *expiry > Utc::now())
    }

    /// Remove a session; idempotent
    pub fn remove(&self, token: &str) {
        self.inner.lock().remove(token);
    }

    #[cfg(test)]
    fn insert_with_expiry(&self, token: &str, expiry: DateTime<Utc>) {
        self.inner.lock().insert(token.to_string(), expiry);
    }
}

/// Extract the session token from the request's Cookie header
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == SESSION_COOKIE).then(|| value.trim().to_string())
    })
}

/// Set-Cookie value establishing a session, HTTP-only, site-wide
#[must_use]
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/")
}

/// Set-Cookie value clearing the session cookie
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn created_session_is_valid_until_ttl() {
        let store = SessionStore::new();
        let token = store.create();
        assert!(store.is_valid(&token));
        assert!(!store.is_valid("unknown-token"));
    }

    #[test]
    fn expired_session_is_invalid_but_not_evicted() {
        let store = SessionStore::new();
        store.insert_with_expiry("stale", Utc::now() - Duration::seconds(1));
        assert!(!store.is_valid("stale"));
        // Lazy expiry: the entry is still in the map.
        assert!(store.inner.lock().contains_key("stale"));
    }

    #[test]
    fn logout_is_immediate_and_idempotent() {
        let store = SessionStore::new();
        let token = store.create();
        store.remove(&token);
        assert!(!store.is_valid(&token));
        store.remove(&token);
        assert!(!store.is_valid(&token));
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionStore::new();
        assert_ne!(store.create(), store.create());
    }

    #[test]
    fn credentials_accept_exactly_one_pair() {
        let good = LoginForm {
            login: Some("admin".to_string()),
            password: Some("12345".to_string()),
        };
        assert!(verify_credentials(&good));

        let bad = LoginForm {
            login: Some("admin".to_string()),
            password: Some("guess".to_string()),
        };
        assert!(!verify_credentials(&bad));
        assert!(!verify_credentials(&LoginForm::default()));
    }

    #[test]
    fn token_parsed_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "theme=dark; session=abc-123; lang=ru".parse().unwrap());
        assert_eq!(token_from_headers(&headers), Some("abc-123".to_string()));

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(token_from_headers(&headers), None);
        assert_eq!(token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn cookie_values() {
        assert_eq!(session_cookie("t0k"), "session=t0k; HttpOnly; Path=/");
        assert!(clear_session_cookie().starts_with("session=;"));
        assert!(clear_session_cookie().contains("Expires="));
    }
}

//! Admin gate behavior at the router level
//!
//! These tests exercise the login/logout lifecycle without touching the
//! database: the pool connects lazily and the gate never queries it.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, StatusCode,
    },
    Router,
};
use tower::ServiceExt;

use tour_catalog::{config::AppConfig, db, handlers, state::AppState};

fn test_app() -> Router {
    let config = AppConfig::default();
    let pool = db::connect(&config.database).expect("lazy pool");
    handlers::router(AppState::new(config, pool))
}

fn login_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/admin")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn unauthenticated_get_renders_login_form() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name='login'"));
    assert!(body.contains("name='password'"));
}

#[tokio::test]
async fn login_with_correct_credentials_sets_cookie_and_redirects() {
    let app = test_app();

    let response = app
        .oneshot(login_request("login=admin&password=12345"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/admin");

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn login_with_wrong_credentials_fails_inline_without_session() {
    let app = test_app();

    let response = app
        .oneshot(login_request("login=admin&password=guess"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let body = body_string(response).await;
    assert!(body.contains("alert"));
    assert!(body.contains("history.back()"));
}

#[tokio::test]
async fn unauthenticated_post_to_any_admin_path_is_a_login_attempt() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/delete")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("id=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Treated as a failed login, not a CRUD operation.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("alert"));
}

#[tokio::test]
async fn logout_clears_session_and_is_idempotent() {
    let app = test_app();

    let login = app
        .clone()
        .oneshot(login_request("login=admin&password=12345"))
        .await
        .unwrap();
    let session_cookie = login
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    // Authenticated logout clears the cookie and redirects back.
    let response = app
        .clone()
        .oneshot(
            Request::get("/admin/logout")
                .header(COOKIE, session_cookie.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/admin");
    let cleared = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cleared.starts_with("session=;"));
    assert!(cleared.contains("Expires="));

    // The same token is now unauthenticated: the gate serves the login form.
    let response = app
        .oneshot(
            Request::get("/admin/logout")
                .header(COOKIE, session_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("name='login'"));
}

#[tokio::test]
async fn unknown_path_gets_404_page() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn non_numeric_tour_id_gets_site_404_page() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/tour/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn missing_static_asset_gets_404() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/static/missing.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn parent_components_in_asset_paths_are_rejected() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/static/../Cargo.toml")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

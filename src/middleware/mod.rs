//! Admin gate middleware
//!
//! Wraps every `/admin*` route. Requests with a valid session pass through;
//! for everything else, a GET renders the login form and a POST is treated as
//! a login attempt regardless of its target path. The login submission is the
//! only `/admin*` operation that does not require authentication.

use axum::{
    extract::{Form, FromRequest, Request, State},
    http::{header::SET_COOKIE, Method},
    middleware::Next,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};

use crate::auth::{self, LoginForm};
use crate::state::AppState;

/// Inline login form served to unauthenticated GETs
pub const LOGIN_PAGE: &str = r#"
<!DOCTYPE html><html lang='ru'><head><meta charset='UTF-8'><title>Вход</title>
<style>
    body{background:linear-gradient(135deg,#667eea,#764ba2);display:flex;justify-content:center;align-items:center;height:100vh;margin:0;font-family:Arial}
    .box{background:#fff;padding:50px;border-radius:16px;box-shadow:0 15px 35px rgba(0,0,0,0.2);width:380px;text-align:center}
    input{padding:14px;margin:10px 0;width:100%;border-radius:8px;border:1px solid #ddd;font-size:16px}
    button{padding:14px;background:#5e35b1;color:#fff;border:none;border-radius:8px;cursor:pointer;width:100%;font-size:16px}
</style></head>
<body><div class='box'><h2>Админ-панель</h2>
<form method='post'>
    <input name='login' placeholder='Логин' required><br>
    <input type='password' name='password' placeholder='Пароль' required><br>
    <button type='submit'>Войти</button>
</form></div></body></html>"#;

/// Inline failure signal for bad credentials; no redirect, no session
pub const LOGIN_FAILED_PAGE: &str =
    "<script>alert('Неверный логин или пароль'); history.back();</script>";

/// Gate handler for the admin router
///
/// Authenticated requests continue to the wrapped route. Unauthenticated
/// POSTs consume the body as a login attempt: on success a session is created
/// and set as an HTTP-only, site-wide cookie before redirecting to the
/// dashboard; on failure an inline failure page is returned.
pub async fn admin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = auth::token_from_headers(request.headers())
        .is_some_and(|token| state.sessions().is_valid(&token));

    if authenticated {
        return next.run(request).await;
    }

    if request.method() == Method::POST {
        let form = match Form::<LoginForm>::from_request(request, &()).await {
            Ok(Form(form)) => form,
            Err(_) => LoginForm::default(),
        };

        if auth::verify_credentials(&form) {
            let token = state.sessions().create();
            tracing::info!("admin login succeeded");
            return (
                AppendHeaders([(SET_COOKIE, auth::session_cookie(&token))]),
                Redirect::to("/admin"),
            )
                .into_response();
        }

        tracing::warn!("admin login failed");
        return Html(LOGIN_FAILED_PAGE).into_response();
    }

    Html(LOGIN_PAGE).into_response()
}

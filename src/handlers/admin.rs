//! Admin dashboard, edit form, and tour CRUD handlers
//!
//! All handlers here run behind the admin gate. Mutations redirect back to
//! the dashboard regardless of whether any row was affected; the store does
//! not surface affected-row counts to the admin.

use axum::{
    extract::{Form, Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use std::fmt::Write as _;

use crate::auth;
use crate::db::{self, models::TourForm};
use crate::error::AppError;
use crate::render::group_thousands;
use crate::state::AppState;
use crate::template::escape_html;

const DASHBOARD_HEAD: &str = r#"<!DOCTYPE html>
<html lang='ru'>
<head>
    <meta charset='UTF-8'>
    <title>Админка — Туры</title>
    <style>
        body {font-family: Arial, sans-serif; margin:40px; background:#f9f9f9;}
        table {width:100%; border-collapse:collapse; margin:20px 0;}
        th, td {border:1px solid #ddd; padding:12px; text-align:left;}
        th {background:#f0f0f0;}
        button, a.btn {padding:8px 16px; margin:0 5px; text-decoration:none; border:none; border-radius:4px; cursor:pointer;}
        .btn-edit {background:#007bff; color:white;}
        .btn-delete {background:#dc3545; color:white;}
        .btn-add {background:#28a745; color:white; padding:12px 24px; font-size:16px;}
        a {color:#007bff;}
    </style>
</head>
<body>
<h1>Управление турами</h1>
<a href='/admin/logout' style='float:right; color:red;'>Выйти</a>
<hr>

<h2>Добавить тур</h2>
<form method='post' action='/admin/add'>
    <p><input name='title' placeholder='Название тура' required style='width:500px'></p>
    <p><input name='country' placeholder='Страна' required></p>
    <p><textarea name='description' placeholder='Описание' rows='3' style='width:600px'></textarea></p>
    <p><input name='price' type='number' placeholder='Цена ₽' required></p>
    <p><input name='discount' type='number' step='0.01' placeholder='Скидка %'></p>
    <p><input name='days' type='number' placeholder='Дней' required> <input name='nights' type='number' placeholder='Ночей' required></p>
    <p><input name='image_path' placeholder='images/tour.jpg' value='images/default.jpg' style='width:500px'></p>
    <p>Комфорт (1-5): <input name='comfort_level' type='number' min='1' max='5' value='3' style='width:80px'>
       Активность (1-5): <input name='activity_level' type='number' min='1' max='5' value='3' style='width:80px'></p>
    <button type='submit' class='btn-add'>Добавить тур</button>
</form>

<hr>
<h2>Все туры</h2>
<table>
<tr><th>ID</th><th>Название</th><th>Страна</th><th>Цена</th><th>Скидка</th><th>Дни/Ночи</th><th>Фото</th><th>Действия</th></tr>"#;

const DASHBOARD_TAIL: &str = "</table></body></html>";

/// `GET /admin`: dashboard list plus add-tour form
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let rows = db::tours::list_admin(state.pool()).await?;

    let mut html = String::from(DASHBOARD_HEAD);
    for row in rows {
        let title = escape_html(&row.title);
        let discount = row
            .discount
            .map_or_else(|| "—".to_string(), |d| format!("{d:.1}%"));
        let photo = if row.image_path.is_empty() { "нет" } else { "есть" };
        let _ = write!(
            html,
            "\n<tr>\n    <td>{id}</td>\n    <td>{title}</td>\n    <td>{country}</td>\n    \
             <td>{price} ₽</td>\n    <td>{discount}</td>\n    <td>{days}/{nights}</td>\n    \
             <td>{photo}</td>\n    <td>\n        \
             <a href='/admin/edit/{id}' class='btn btn-edit'>Изменить</a>\n        \
             <form method='post' action='/admin/delete' style='display:inline' \
             onsubmit='return confirm(\"Удалить тур {title}?\");'>\n            \
             <input type='hidden' name='id' value='{id}'>\n            \
             <button type='submit' class='btn-delete'>Удалить</button>\n        \
             </form>\n    </td>\n</tr>",
            id = row.id,
            country = escape_html(&row.country),
            price = group_thousands(row.price),
            days = row.days,
            nights = row.nights,
        );
    }
    html.push_str(DASHBOARD_TAIL);

    Ok(Html(html))
}

/// `GET /admin/edit/{id}`: prefilled edit form for one tour
pub async fn edit_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let row = match id.trim().parse::<i64>() {
        Ok(tour_id) => db::tours::fetch_for_edit(state.pool(), tour_id).await?,
        Err(_) => None,
    };

    let Some(row) = row else {
        return Ok(Html(
            "<h1>Тур не найден</h1><a href='/admin'>← Назад</a>".to_string(),
        ));
    };

    let tour_id = id.trim();
    let discount = row.discount.map(|d| d.to_string()).unwrap_or_default();
    let html = format!(
        r#"<!DOCTYPE html>
<html lang='ru'>
<head>
    <meta charset='UTF-8'>
    <title>Редактировать тур #{tour_id}</title>
    <style>
        body {{font-family: Arial; margin:40px; background:#f9f9f9;}}
        input, textarea {{width:100%; max-width:600px; padding:10px; margin:10px 0; font-size:16px;}}
        button {{padding:12px 24px; font-size:16px; margin-right:10px;}}
        .btn-save {{background:#007bff; color:white;}}
        .btn-back {{background:#6c757d; color:white; text-decoration:none; padding:12px 24px;}}
    </style>
</head>
<body>
<h1>Редактирование тура #{tour_id}</h1>
<a href='/admin' class='btn-back'>← Назад к списку</a>
<hr>
<form method='post' action='/admin/save'>
    <input type='hidden' name='id' value='{tour_id}'>
    <p><input name='title' value='{title}' required placeholder='Название'></p>
    <p><input name='country' value='{country}' required placeholder='Страна'></p>
    <p><textarea name='description' rows='5'>{description}</textarea></p>
    <p><input name='price' type='number' value='{price}' required></p>
    <p><input name='discount' type='number' step='0.01' value='{discount}' placeholder='Скидка %'></p>
    <p><input name='days' type='number' value='{days}' required style='width:100px'> дней
       <input name='nights' type='number' value='{nights}' required style='width:100px'> ночей</p>
    <p><input name='image_path' value='{image}' style='width:100%'></p>
    <p>Комфорт (1-5): <input name='comfort_level' type='number' min='1' max='5' value='{comfort}' style='width:100px'>
       Активность (1-5): <input name='activity_level' type='number' min='1' max='5' value='{activity}' style='width:100px'></p>
    <button type='submit' class='btn-save'>Сохранить изменения</button>
</form>
</body></html>"#,
        title = escape_html(&row.title),
        country = escape_html(&row.country),
        description = escape_html(&row.description),
        price = row.price,
        days = row.days,
        nights = row.nights,
        image = escape_html(&row.image_path),
        comfort = row.comfort_level,
        activity = row.activity_level,
    );

    Ok(Html(html))
}

/// `POST /admin`: no mutation targeted; return to the dashboard
pub async fn dispatch() -> Redirect {
    Redirect::to("/admin")
}

/// `POST /admin/add`: insert a new tour with defaults applied
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TourForm>,
) -> Result<Redirect, AppError> {
    let record = form.into_record();
    db::tours::insert(state.pool(), &record).await?;
    tracing::info!(title = %record.title, "tour created");
    Ok(Redirect::to("/admin"))
}

/// `POST /admin/save`: full overwrite; silent no-op for an unknown id
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<TourForm>,
) -> Result<Redirect, AppError> {
    if let Some(tour_id) = form.id() {
        let record = form.into_record();
        db::tours::update(state.pool(), tour_id, &record).await?;
        tracing::info!(tour_id, "tour updated");
    }
    Ok(Redirect::to("/admin"))
}

/// `POST /admin/delete`: remove by id; silent no-op when absent
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<TourForm>,
) -> Result<Redirect, AppError> {
    if let Some(tour_id) = form.id() {
        db::tours::delete(state.pool(), tour_id).await?;
        tracing::info!(tour_id, "tour deleted");
    }
    Ok(Redirect::to("/admin"))
}

/// `GET /admin/logout`: drop the session and clear the cookie
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = auth::token_from_headers(&headers) {
        state.sessions().remove(&token);
    }
    (
        AppendHeaders([(SET_COOKIE, auth::clear_session_cookie())]),
        Redirect::to("/admin"),
    )
        .into_response()
}

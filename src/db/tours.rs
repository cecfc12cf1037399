//! Tour store queries
//!
//! Each function runs a single read or write against the pool; no caching,
//! no transactions span requests. Store failures propagate as `sqlx::Error`
//! and surface as a 500 for the requesting task only.

use sqlx::{PgPool, Postgres, QueryBuilder};

use super::filter::TourFilter;
use super::models::{
    AdminTourRow, DayDescriptionsRow, EditTourRow, OrganizerRow, TourCardRow, TourRecord,
    TourDetailRow,
};

const CARD_COLUMNS: &str = "id, title, country, description, price, discount, days, nights, \
     image_path, comfort_level, activity_level, rating, reviews_count";

/// Ordered set of tours matching the conjunction of active filters
pub async fn list_cards(pool: &PgPool, filter: &TourFilter) -> sqlx::Result<Vec<TourCardRow>> {
    let mut query: QueryBuilder<'_, Postgres> =
        QueryBuilder::new(format!("SELECT {CARD_COLUMNS} FROM tours WHERE 1=1"));
    filter.push_predicates(&mut query);
    query.push(filter.sort.as_sql());
    query.build_query_as().fetch_all(pool).await
}

/// One tour for the detail page, or `None` when the id has no row
pub async fn fetch_detail(pool: &PgPool, tour_id: i64) -> sqlx::Result<Option<TourDetailRow>> {
    sqlx::query_as(
        "SELECT title, description, price, discount, days, rating, reviews_count, organizer_id \
         FROM tours WHERE id = $1",
    )
    .bind(tour_id)
    .fetch_optional(pool)
    .await
}

/// Organizer row, or `None` when the weak reference points nowhere
pub async fn fetch_organizer(pool: &PgPool, organizer_id: i64) -> sqlx::Result<Option<OrganizerRow>> {
    sqlx::query_as(
        "SELECT name, rating, reviews_count, joined_at, self_description \
         FROM organizers WHERE id = $1",
    )
    .bind(organizer_id)
    .fetch_optional(pool)
    .await
}

/// Number of tours run by an organizer
pub async fn count_organizer_tours(pool: &PgPool, organizer_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tours WHERE organizer_id = $1")
        .bind(organizer_id)
        .fetch_one(pool)
        .await
}

/// Up to five image paths for a tour, in display order
pub async fn fetch_images(pool: &PgPool, tour_id: i64) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(
        "SELECT image_path FROM tour_images WHERE tour_id = $1 ORDER BY sort_order LIMIT 5",
    )
    .bind(tour_id)
    .fetch_all(pool)
    .await
}

/// Day-by-day itinerary fields for a tour
///
/// Degrades to all-empty fields when the row or the whole table is absent;
/// a broken itinerary source never fails the detail page.
pub async fn fetch_day_descriptions(pool: &PgPool, tour_id: i64) -> DayDescriptionsRow {
    let result: sqlx::Result<Option<DayDescriptionsRow>> = sqlx::query_as(
        "SELECT day1_description, day2_description, day3_description, day4_description, \
         day5_description, day6_description, day7_description \
         FROM day_descriptions WHERE tour_id = $1",
    )
    .bind(tour_id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => row,
        Ok(None) => DayDescriptionsRow::default(),
        Err(error) => {
            tracing::warn!(tour_id, %error, "itinerary lookup failed, rendering empty days");
            DayDescriptionsRow::default()
        }
    }
}

/// All tours for the admin dashboard, newest first
pub async fn list_admin(pool: &PgPool) -> sqlx::Result<Vec<AdminTourRow>> {
    sqlx::query_as(
        "SELECT id, title, country, price, discount, days, nights, image_path \
         FROM tours ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
}

/// Editable column set for the edit form
pub async fn fetch_for_edit(pool: &PgPool, tour_id: i64) -> sqlx::Result<Option<EditTourRow>> {
    sqlx::query_as(
        "SELECT title, country, description, price, discount, days, nights, image_path, \
         comfort_level, activity_level FROM tours WHERE id = $1",
    )
    .bind(tour_id)
    .fetch_optional(pool)
    .await
}

/// Insert a new tour with fixed initial rating and review count
pub async fn insert(pool: &PgPool, record: &TourRecord) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO tours (title, country, description, price, discount, days, nights, \
         image_path, comfort_level, activity_level, rating, reviews_count) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 5.0, 0)",
    )
    .bind(&record.title)
    .bind(&record.country)
    .bind(&record.description)
    .bind(record.price)
    .bind(record.discount)
    .bind(record.days)
    .bind(record.nights)
    .bind(&record.image_path)
    .bind(record.comfort_level)
    .bind(record.activity_level)
    .execute(pool)
    .await?;
    Ok(())
}

/// Overwrite the named columns of one tour; silent no-op when id is unknown
pub async fn update(pool: &PgPool, tour_id: i64, record: &TourRecord) -> sqlx::Result<()> {
    sqlx::query(
        "UPDATE tours SET title = $1, country = $2, description = $3, price = $4, \
         discount = $5, days = $6, nights = $7, image_path = $8, comfort_level = $9, \
         activity_level = $10 WHERE id = $11",
    )
    .bind(&record.title)
    .bind(&record.country)
    .bind(&record.description)
    .bind(record.price)
    .bind(record.discount)
    .bind(record.days)
    .bind(record.nights)
    .bind(&record.image_path)
    .bind(record.comfort_level)
    .bind(record.activity_level)
    .bind(tour_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove one tour; silent no-op when id is unknown
pub async fn delete(pool: &PgPool, tour_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM tours WHERE id = $1")
        .bind(tour_id)
        .execute(pool)
        .await?;
    Ok(())
}

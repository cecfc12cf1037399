//! Row types and admin form payloads

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;

/// One tour as selected for the card listing
#[derive(Debug, Clone, FromRow)]
pub struct TourCardRow {
    pub id: i64,
    pub title: String,
    pub country: String,
    pub description: String,
    pub price: Decimal,
    pub discount: Option<f64>,
    pub days: i32,
    pub nights: i32,
    pub image_path: String,
    pub comfort_level: i32,
    pub activity_level: i32,
    pub rating: f64,
    pub reviews_count: i32,
}

/// One tour as selected for the detail page
#[derive(Debug, Clone, FromRow)]
pub struct TourDetailRow {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount: Option<f64>,
    pub days: i32,
    pub rating: f64,
    pub reviews_count: i32,
    pub organizer_id: Option<i64>,
}

/// Organizer reputation fields, display only
#[derive(Debug, Clone, FromRow)]
pub struct OrganizerRow {
    pub name: String,
    pub rating: f64,
    pub reviews_count: i32,
    pub joined_at: NaiveDate,
    pub self_description: Option<String>,
}

/// Fixed-width sparse itinerary: seven independently optional day fields
#[derive(Debug, Clone, Default, FromRow)]
pub struct DayDescriptionsRow {
    pub day1_description: Option<String>,
    pub day2_description: Option<String>,
    pub day3_description: Option<String>,
    pub day4_description: Option<String>,
    pub day5_description: Option<String>,
    pub day6_description: Option<String>,
    pub day7_description: Option<String>,
}

impl DayDescriptionsRow {
    /// The seven day fields in order, missing entries as `None`
    #[must_use]
    pub fn days(&self) -> [Option<&str>; 7] {
        [
            self.day1_description.as_deref(),
            self.day2_description.as_deref(),
            self.day3_description.as_deref(),
            self.day4_description.as_deref(),
            self.day5_description.as_deref(),
            self.day6_description.as_deref(),
            self.day7_description.as_deref(),
        ]
    }
}

/// One tour row of the admin dashboard table
#[derive(Debug, Clone, FromRow)]
pub struct AdminTourRow {
    pub id: i64,
    pub title: String,
    pub country: String,
    pub price: Decimal,
    pub discount: Option<f64>,
    pub days: i32,
    pub nights: i32,
    pub image_path: String,
}

/// Full editable column set, prefilled into the edit form
#[derive(Debug, Clone, FromRow)]
pub struct EditTourRow {
    pub title: String,
    pub country: String,
    pub description: String,
    pub price: Decimal,
    pub discount: Option<f64>,
    pub days: i32,
    pub nights: i32,
    pub image_path: String,
    pub comfort_level: i32,
    pub activity_level: i32,
}

/// Raw admin form body for create and update
///
/// Every field is optional at the wire level; [`TourForm::into_record`]
/// applies the documented defaults instead of rejecting malformed input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TourForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub discount: Option<String>,
    pub days: Option<String>,
    pub nights: Option<String>,
    pub image_path: Option<String>,
    pub comfort_level: Option<String>,
    pub activity_level: Option<String>,
}

/// Default image path for newly created tours
pub const DEFAULT_IMAGE_PATH: &str = "images/default.jpg";

impl TourForm {
    /// Target row id, if present and numeric
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|s| s.trim().parse().ok())
    }

    /// Normalize into a typed record, substituting safe defaults
    ///
    /// Missing or unparsable numeric fields become 0 (price, days, nights) or
    /// 3 (comfort, activity); an empty discount becomes absent; a missing
    /// image path falls back to [`DEFAULT_IMAGE_PATH`].
    #[must_use]
    pub fn into_record(self) -> TourRecord {
        TourRecord {
            title: self.title.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self
                .price
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or_default(),
            discount: self
                .discount
                .filter(|s| !s.trim().is_empty())
                .and_then(|s| s.trim().parse().ok()),
            days: self
                .days
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or_default(),
            nights: self
                .nights
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or_default(),
            image_path: self
                .image_path
                .unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string()),
            comfort_level: self
                .comfort_level
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(3),
            activity_level: self
                .activity_level
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(3),
        }
    }
}

/// Typed column values for an insert or full-overwrite update
#[derive(Debug, Clone)]
pub struct TourRecord {
    pub title: String,
    pub country: String,
    pub description: String,
    pub price: Decimal,
    pub discount: Option<f64>,
    pub days: i32,
    pub nights: i32,
    pub image_path: String,
    pub comfort_level: i32,
    pub activity_level: i32,
}

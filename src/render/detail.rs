//! Tour detail page renderer
//!
//! Assembles one tour with its organizer, image gallery, and day-by-day
//! itinerary. An unknown id yields `None` (the router answers 404); every
//! auxiliary lookup tolerates absence and falls back to display defaults.

use crate::db::models::OrganizerRow;
use crate::db::{self};
use crate::error::AppError;
use crate::state::AppState;
use crate::template::{escape_html, escape_multiline, missing_template_fragment};

use super::{final_price, group_thousands, price_per_day};

/// Detail template path relative to the static root
pub const DETAIL_TEMPLATE: &str = "templates/tour_detail.html";

/// Placeholder shown in gallery slots with no stored image
pub const DEFAULT_IMAGE: &str = "/static/images/default.jpg";

const GALLERY_SLOTS: usize = 5;

/// Render the detail page for one tour
///
/// Returns `None` when the id has no row. A missing detail template degrades
/// to an inline diagnostic page.
pub async fn render_detail(state: &AppState, tour_id: i64) -> Result<Option<String>, AppError> {
    let pool = state.pool();

    let Some(tour) = db::tours::fetch_detail(pool, tour_id).await? else {
        return Ok(None);
    };

    let template = match state.templates().load(DETAIL_TEMPLATE).await {
        Ok(template) => template,
        Err(error) => {
            tracing::error!(%error, "detail template unavailable");
            return Ok(Some(missing_template_fragment(&error)));
        }
    };

    let organizer = match tour.organizer_id {
        Some(organizer_id) => {
            let row = db::tours::fetch_organizer(pool, organizer_id).await?;
            let tours_count = db::tours::count_organizer_tours(pool, organizer_id).await?;
            OrganizerView::from_row(row, tours_count)
        }
        None => OrganizerView::default(),
    };

    let images = db::tours::fetch_images(pool, tour_id).await?;
    let (main_image, small_images) = gallery_slots(&images);

    let itinerary = db::tours::fetch_day_descriptions(pool, tour_id).await;
    let days: Vec<String> = itinerary
        .days()
        .iter()
        .map(|day| day.map(escape_multiline).unwrap_or_default())
        .collect();

    let final_price = final_price(tour.price, tour.discount);
    let per_day = price_per_day(final_price, tour.days);

    let mut values: Vec<(&str, String)> = vec![
        ("TITLE", escape_html(&tour.title)),
        ("RATING", format!("{:.1}", tour.rating)),
        ("REVIEWS", group_thousands(tour.reviews_count.into())),
        ("DAYS", tour.days.to_string()),
        ("FINAL_PRICE", group_thousands(final_price)),
        ("PRICE_PER_DAY", group_thousands(per_day)),
        (
            "DESCRIPTION",
            escape_multiline(tour.description.as_deref().unwrap_or_default()),
        ),
        ("MAIN_IMAGE", main_image),
        ("SMALL_IMAGES", small_images),
        ("ORGANIZER_NAME", escape_html(&organizer.name)),
        ("ORGANIZER_RATING", organizer.rating),
        ("ORGANIZER_REVIEWS_COUNT", organizer.reviews_count),
        ("ORGANIZER_TOURS_COUNT", organizer.tours_count),
        ("ORGANIZER_JOINED", organizer.joined),
        ("ORGANIZER_DESCRIPTION", escape_multiline(&organizer.description)),
    ];
    let day_names = ["DAY1", "DAY2", "DAY3", "DAY4", "DAY5", "DAY6", "DAY7"];
    for (name, text) in day_names.iter().zip(days) {
        values.push((name, text));
    }

    let pairs: Vec<(&str, &str)> = values
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    Ok(Some(template.render(&pairs)))
}

/// Organizer block of the detail page, already stringified for display
struct OrganizerView {
    name: String,
    rating: String,
    reviews_count: String,
    tours_count: String,
    joined: String,
    description: String,
}

impl Default for OrganizerView {
    fn default() -> Self {
        Self {
            name: "Организатор".to_string(),
            rating: "4.9".to_string(),
            reviews_count: "156".to_string(),
            tours_count: "0".to_string(),
            joined: "01.01.2024".to_string(),
            description: "Описание отсутствует.".to_string(),
        }
    }
}

impl OrganizerView {
    /// A set organizer_id whose row is gone falls back to the same defaults
    /// as no organizer at all; the reference is weak, not a hard error.
    fn from_row(row: Option<OrganizerRow>, tours_count: i64) -> Self {
        match row {
            Some(row) => Self {
                name: row.name,
                rating: format!("{:.1}", row.rating),
                reviews_count: row.reviews_count.to_string(),
                tours_count: tours_count.to_string(),
                joined: row.joined_at.format("%d.%m.%Y").to_string(),
                description: row.self_description.unwrap_or_default(),
            },
            None => Self {
                tours_count: tours_count.to_string(),
                ..Self::default()
            },
        }
    }
}

/// Split stored image paths into the main slot and the small-image strip
///
/// The first stored path becomes the main image; the rest render small.
/// Fewer than five stored images pad the strip with the default placeholder
/// so the gallery always shows exactly five slots.
fn gallery_slots(paths: &[String]) -> (String, String) {
    let mut main_image = DEFAULT_IMAGE.to_string();
    let mut small_images = String::new();

    for (i, stored) in paths.iter().take(GALLERY_SLOTS).enumerate() {
        let path = format!("/{}", stored.replace('\\', "/"));
        if i == 0 {
            main_image = path;
        } else {
            small_images.push_str(&format!("<img src=\"{path}\" alt=\"Фото тура\">"));
        }
    }
    for i in paths.len()..GALLERY_SLOTS {
        if i > 0 {
            small_images.push_str(&format!("<img src=\"{DEFAULT_IMAGE}\" alt=\"\">"));
        }
    }

    (main_image, small_images)
}

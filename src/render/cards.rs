//! Tour card listing renderer

use crate::db::models::TourCardRow;
use crate::db::{self, filter::TourFilter};
use crate::error::AppError;
use crate::state::AppState;
use crate::template::{escape_html, missing_template_fragment, Template};

use super::{final_price, group_thousands, level_glyphs};

/// Card template path relative to the static root
pub const CARD_TEMPLATE: &str = "templates/card_template.html";

/// Fragment emitted instead of an empty string when nothing matches
pub const NO_RESULTS_FRAGMENT: &str =
    "<div style='text-align:center;padding:100px;color:#888;font-size:18px;'>Туров не найдено</div>";

/// Render all matching tours as concatenated card fragments
///
/// Returns the HTML and the match count. A missing card template degrades to
/// an inline diagnostic in place of the cards.
pub async fn render_cards(
    state: &AppState,
    filter: &TourFilter,
) -> Result<(String, usize), AppError> {
    let rows = db::tours::list_cards(state.pool(), filter).await?;

    let template = match state.templates().load(CARD_TEMPLATE).await {
        Ok(template) => template,
        Err(error) => {
            tracing::error!(%error, "card template unavailable");
            return Ok((missing_template_fragment(&error), rows.len()));
        }
    };

    let mut html = String::new();
    for row in &rows {
        html.push_str(&render_card(&template, row));
    }
    if rows.is_empty() {
        html.push_str(NO_RESULTS_FRAGMENT);
    }

    Ok((html, rows.len()))
}

fn render_card(template: &Template, row: &TourCardRow) -> String {
    let final_price = final_price(row.price, row.discount);

    // Old-price strike-through only when the tour is discounted.
    let old_price = row
        .discount
        .map(|_| format!("<div class='old'>₽ {}</div>", group_thousands(row.price)))
        .unwrap_or_default();

    template.render(&[
        ("ID", &row.id.to_string()),
        ("TITLE", &escape_html(&row.title)),
        ("COUNTRY", &escape_html(&row.country)),
        ("DESCRIPTION", &escape_html(&row.description)),
        ("IMAGE", &row.image_path),
        ("RATING", &format!("{:.1}", row.rating)),
        ("REVIEWS", &row.reviews_count.to_string()),
        ("ACTIVITY", &level_glyphs(row.activity_level)),
        ("COMFORT", &level_glyphs(row.comfort_level)),
        ("DAYS", &row.days.to_string()),
        ("NIGHTS", &row.nights.to_string()),
        ("FINAL_PRICE", &group_thousands(final_price)),
        ("OLD_PRICE", &old_price),
    ])
}

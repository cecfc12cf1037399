//! HTML rendering of tour cards and detail pages
//!
//! Shared display arithmetic lives here: discount application, per-day price,
//! comfort/activity glyph strings, and thousands grouping.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

pub mod cards;
pub mod detail;

/// List price after the optional percentage discount
///
/// `price × (1 − discount/100)` when a discount is present, else the price
/// unchanged.
#[must_use]
pub fn final_price(price: Decimal, discount: Option<f64>) -> Decimal {
    match discount.and_then(Decimal::from_f64) {
        Some(d) => price * (Decimal::ONE_HUNDRED - d) / Decimal::ONE_HUNDRED,
        None => price,
    }
}

/// Final price divided over the days of the tour, rounded to whole units
///
/// Falls back to the final price itself when `days` is zero.
#[must_use]
pub fn price_per_day(final_price: Decimal, days: i32) -> Decimal {
    if days > 0 {
        (final_price / Decimal::from(days)).round()
    } else {
        final_price
    }
}

/// Five-glyph comfort/activity encoding: filled markers then empty ones
#[must_use]
pub fn level_glyphs(level: i32) -> String {
    let filled = level.clamp(0, 5) as usize;
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

/// Whole-unit amount with spaces grouping thousands, e.g. `125 000`
#[must_use]
pub fn group_thousands(value: Decimal) -> String {
    let rounded = value.round().trunc().to_string();
    let (sign, digits) = rounded
        .strip_prefix('-')
        .map_or(("", rounded.as_str()), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_applies_to_price() {
        assert_eq!(
            final_price(Decimal::from(100_000), Some(20.0)),
            Decimal::from(80_000)
        );
        assert_eq!(final_price(Decimal::from(100_000), None), Decimal::from(100_000));
        assert_eq!(final_price(Decimal::from(55_500), Some(0.0)), Decimal::from(55_500));
    }

    #[test]
    fn per_day_price_rounds_and_tolerates_zero_days() {
        assert_eq!(price_per_day(Decimal::from(80_000), 7), Decimal::from(11_429));
        assert_eq!(price_per_day(Decimal::from(80_000), 0), Decimal::from(80_000));
    }

    #[test]
    fn glyph_strings_always_have_five_glyphs() {
        for level in -2..=8 {
            assert_eq!(level_glyphs(level).chars().count(), 5, "level {level}");
        }
        assert_eq!(level_glyphs(3), "●●●○○");
        assert_eq!(level_glyphs(0), "○○○○○");
        assert_eq!(level_glyphs(9), "●●●●●");
    }

    #[test]
    fn thousands_are_grouped_with_spaces() {
        assert_eq!(group_thousands(Decimal::from(80_000)), "80 000");
        assert_eq!(group_thousands(Decimal::from(1_234_567)), "1 234 567");
        assert_eq!(group_thousands(Decimal::from(999)), "999");
        assert_eq!(group_thousands(Decimal::new(125_0005, 1)), "125 000"); // rounds 125000.5
    }
}

//! Tour filter and sort predicate builder
//!
//! Raw query-string values normalize into a [`TourFilter`]; malformed or
//! out-of-range values are silently treated as absent, never an error. Each
//! present filter folds one `AND` predicate into the query with user values
//! always pushed as bound parameters. Only the duration bucket and the sort
//! clause are inlined, and both come from fixed enumerated sets, never from
//! user-supplied text.

use sqlx::{Postgres, QueryBuilder};
use std::collections::HashMap;

/// Enumerated duration buckets offered by the filter UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    /// 7–10 days
    Week,
    /// 11–14 days
    Fortnight,
    /// 15 days or longer
    Long,
}

impl DurationBucket {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "7-10" => Some(Self::Week),
            "11-14" => Some(Self::Fortnight),
            "15+" => Some(Self::Long),
            _ => None,
        }
    }

    const fn as_sql(self) -> &'static str {
        match self {
            Self::Week => " AND days BETWEEN 7 AND 10",
            Self::Fortnight => " AND days BETWEEN 11 AND 14",
            Self::Long => " AND days >= 15",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    DurationAsc,
    /// Rating descending, reviews count as tiebreak
    #[default]
    Popularity,
}

impl SortOrder {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("rating_desc") => Self::RatingDesc,
            Some("duration_asc") => Self::DurationAsc,
            _ => Self::Popularity,
        }
    }

    /// The inlined ORDER BY clause for this ordering
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::PriceAsc => " ORDER BY price ASC",
            Self::PriceDesc => " ORDER BY price DESC",
            Self::RatingDesc => " ORDER BY rating DESC",
            Self::DurationAsc => " ORDER BY days ASC",
            Self::Popularity => " ORDER BY rating DESC, reviews_count DESC",
        }
    }
}

/// Normalized set of optional tour filters plus ordering
#[derive(Debug, Clone, Default)]
pub struct TourFilter {
    /// Case-insensitive substring match against title or country
    pub country: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub duration: Option<DurationBucket>,
    pub comfort: Option<i32>,
    pub activity: Option<i32>,
    /// Only tours with a present, positive discount
    pub discounted_only: bool,
    pub sort: SortOrder,
}

fn positive<T>(params: &HashMap<String, String>, key: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    params
        .get(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

impl TourFilter {
    /// Normalize raw query parameters
    ///
    /// Unknown keys are ignored; malformed values deactivate their filter.
    #[must_use]
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            country: params
                .get("country")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            price_min: positive(params, "price_min"),
            price_max: positive(params, "price_max"),
            duration: params
                .get("duration")
                .and_then(|s| DurationBucket::parse(s)),
            comfort: positive(params, "comfort"),
            activity: positive(params, "activity"),
            discounted_only: params.get("discount").map(String::as_str) == Some("1"),
            sort: SortOrder::parse(params.get("sort").map(String::as_str)),
        }
    }

    /// Fold the active predicates into the query
    pub fn push_predicates(&self, query: &mut QueryBuilder<'_, Postgres>) {
        if let Some(country) = &self.country {
            let pattern = format!("%{country}%");
            query
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR country ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(min) = self.price_min {
            query.push(" AND price >= ").push_bind(min);
        }
        if let Some(max) = self.price_max {
            query.push(" AND price <= ").push_bind(max);
        }
        if let Some(bucket) = self.duration {
            query.push(bucket.as_sql());
        }
        if let Some(comfort) = self.comfort {
            query.push(" AND comfort_level = ").push_bind(comfort);
        }
        if let Some(activity) = self.activity {
            query.push(" AND activity_level = ").push_bind(activity);
        }
        if self.discounted_only {
            query.push(" AND discount IS NOT NULL AND discount > 0");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn built_sql(filter: &TourFilter) -> String {
        let mut query = QueryBuilder::new("SELECT id FROM tours WHERE 1=1");
        filter.push_predicates(&mut query);
        query.push(filter.sort.as_sql());
        query.into_sql()
    }

    #[test]
    fn empty_params_build_unfiltered_default_sort() {
        let filter = TourFilter::from_params(&HashMap::new());
        assert_eq!(
            built_sql(&filter),
            "SELECT id FROM tours WHERE 1=1 ORDER BY rating DESC, reviews_count DESC"
        );
    }

    #[test]
    fn active_filters_and_one_predicate_each() {
        let filter = TourFilter::from_params(&params(&[
            ("country", " Алтай "),
            ("price_min", "10000"),
            ("price_max", "90000"),
            ("duration", "11-14"),
            ("comfort", "4"),
            ("activity", "2"),
            ("discount", "1"),
            ("sort", "price_asc"),
        ]));
        assert_eq!(filter.country.as_deref(), Some("Алтай"));
        let sql = built_sql(&filter);
        assert!(sql.contains("(title ILIKE $1 OR country ILIKE $2)"));
        assert!(sql.contains("price >= $3"));
        assert!(sql.contains("price <= $4"));
        assert!(sql.contains("days BETWEEN 11 AND 14"));
        assert!(sql.contains("comfort_level = $5"));
        assert!(sql.contains("activity_level = $6"));
        assert!(sql.contains("discount IS NOT NULL AND discount > 0"));
        assert!(sql.ends_with(" ORDER BY price ASC"));
    }

    #[test]
    fn nonpositive_and_malformed_numerics_are_noops() {
        for bad in ["0", "-5", "abc", "", " "] {
            let filter = TourFilter::from_params(&params(&[
                ("price_min", bad),
                ("comfort", bad),
                ("activity", bad),
            ]));
            assert_eq!(filter.price_min, None, "price_min {bad:?}");
            assert_eq!(filter.comfort, None, "comfort {bad:?}");
            assert_eq!(filter.activity, None, "activity {bad:?}");
        }
    }

    #[test]
    fn unknown_duration_and_sort_fall_back() {
        let filter = TourFilter::from_params(&params(&[
            ("duration", "3-5"),
            ("sort", "newest"),
        ]));
        assert_eq!(filter.duration, None);
        assert_eq!(filter.sort, SortOrder::Popularity);
    }

    #[test]
    fn discount_filter_requires_exactly_one() {
        assert!(TourFilter::from_params(&params(&[("discount", "1")])).discounted_only);
        assert!(!TourFilter::from_params(&params(&[("discount", "0")])).discounted_only);
        assert!(!TourFilter::from_params(&params(&[("discount", "true")])).discounted_only);
    }

    #[test]
    fn blank_country_is_absent() {
        let filter = TourFilter::from_params(&params(&[("country", "   ")]));
        assert_eq!(filter.country, None);
    }

    proptest! {
        // An unparsable price_min builds the same query as omitting it.
        #[test]
        fn unparsable_price_min_is_a_noop(junk in "[a-zA-Zа-я!?., ]{1,10}") {
            let with = TourFilter::from_params(&params(&[("price_min", &junk)]));
            let without = TourFilter::from_params(&HashMap::new());
            prop_assert_eq!(built_sql(&with), built_sql(&without));
        }
    }
}

pub mod request {
    use crate::{
        modules::meal::repository::{self, SortDirection, SortKey},
        utils::validation,
    };
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use std::str::FromStr;
    use validator::{Validate, ValidationErrors};

    pub const MAX_LIMIT: i64 = 100;

    /// Raw listing query. Every key is optional; unknown keys are rejected.
    #[derive(Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub struct Filters {
        pub max_price: Option<String>,
        pub title: Option<String>,
        pub date_after: Option<String>,
        pub date_before: Option<String>,
        pub available_reservations: Option<bool>,
        pub limit: Option<i64>,
        pub offset: Option<i64>,
        pub sort_key: Option<String>,
        pub sort_dir: Option<String>,
    }

    /// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
    fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            })
    }

    impl Filters {
        pub fn to_meal_filters(&self) -> Result<repository::Filters, ValidationErrors> {
            let mut errors = ValidationErrors::new();

            let max_price = match &self.max_price {
                Some(raw) => match BigDecimal::from_str(raw.trim()) {
                    Ok(price) if price > BigDecimal::from(0) => Some(price),
                    Ok(_) => {
                        errors.add(
                            "maxPrice",
                            validation::error("INVALID_MAX_PRICE", "maxPrice must be positive"),
                        );
                        None
                    }
                    Err(_) => {
                        errors.add(
                            "maxPrice",
                            validation::error("INVALID_MAX_PRICE", "maxPrice must be a number"),
                        );
                        None
                    }
                },
                None => None,
            };

            let date_after = match &self.date_after {
                Some(raw) => {
                    let parsed = parse_timestamp(raw);
                    if parsed.is_none() {
                        errors.add(
                            "dateAfter",
                            validation::error("INVALID_DATE", "dateAfter must be a valid date"),
                        );
                    }
                    parsed
                }
                None => None,
            };

            let date_before = match &self.date_before {
                Some(raw) => {
                    let parsed = parse_timestamp(raw);
                    if parsed.is_none() {
                        errors.add(
                            "dateBefore",
                            validation::error("INVALID_DATE", "dateBefore must be a valid date"),
                        );
                    }
                    parsed
                }
                None => None,
            };

            if let Some(limit) = self.limit {
                if !(1..=MAX_LIMIT).contains(&limit) {
                    errors.add(
                        "limit",
                        validation::error("INVALID_LIMIT", "limit must be between 1 and 100"),
                    );
                }
            }

            if let Some(offset) = self.offset {
                if offset < 0 {
                    errors.add(
                        "offset",
                        validation::error("INVALID_OFFSET", "offset must not be negative"),
                    );
                }
            }

            let sort_key = match &self.sort_key {
                Some(raw) => match raw.parse::<SortKey>() {
                    Ok(key) => Some(key),
                    Err(_) => {
                        errors.add(
                            "sortKey",
                            validation::error("INVALID_SORT_KEY", "Invalid sortKey"),
                        );
                        None
                    }
                },
                None => None,
            };

            let sort_direction = match &self.sort_dir {
                Some(raw) => raw.parse::<SortDirection>().unwrap_or_else(|_| {
                    errors.add(
                        "sortDir",
                        validation::error("INVALID_SORT_DIR", "Invalid sortDir"),
                    );
                    SortDirection::default()
                }),
                None => SortDirection::default(),
            };

            if !errors.errors().is_empty() {
                return Err(errors);
            }

            Ok(repository::Filters {
                max_price,
                title: self.title.clone().filter(|title| !title.is_empty()),
                date_after,
                date_before,
                available_reservations: self.available_reservations,
                limit: self.limit,
                offset: self.offset,
                sort_key,
                sort_direction,
                ..Default::default()
            })
        }
    }

    impl Validate for Filters {
        fn validate(&self) -> Result<(), ValidationErrors> {
            self.to_meal_filters().map(|_| ())
        }
    }

    pub struct Payload {
        pub filters: Filters,
    }

}

pub mod response {
    use crate::{modules::meal::repository::MealWithStats, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Meals(Vec<MealWithStats>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meals(meals) => (StatusCode::OK, Json(json!(meals))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFilters(ValidationErrors),
        FailedToFetchMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFilters(errors) => validation::into_response(errors),
                Self::FailedToFetchMeals => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch meals" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::modules::{auth::middleware::Auth, meal::rules};
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    pub struct Body {
        #[validate(
            length(min = 1, message = "Title is required"),
            custom(function = "rules::validate_title")
        )]
        pub title: String,
        #[validate(length(min = 1, message = "Description is required"))]
        pub description: String,
        #[validate(
            length(min = 1, message = "Location is required"),
            custom(function = "rules::validate_location")
        )]
        pub location: String,
        pub r#when: DateTime<Utc>,
        #[validate(range(
            min = 1,
            max = 20,
            message = "Max reservations must be between 1 and 20"
        ))]
        pub max_reservations: i32,
        #[validate(custom(function = "rules::validate_price"))]
        pub price: BigDecimal,
        pub created_date: Option<NaiveDate>,
        pub image: Option<String>,
        #[validate(range(min = 1, message = "Creator ID must be a positive integer"))]
        pub created_by: Option<i64>,
    }

    pub struct Payload {
        pub auth: Option<Auth>,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::meal::repository::Meal;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => (StatusCode::CREATED, Json(json!(meal))).into_response(),
            }
        }
    }

    pub enum Error {
        CreatorNotFound,
        InvalidMealData,
        FailedToCreateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CreatorNotFound => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Creator not found" })),
                )
                    .into_response(),
                Self::InvalidMealData => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid meal data" })),
                )
                    .into_response(),
                Self::FailedToCreateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::{modules::meal::rules, utils::validation};
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::{Validate, ValidationError};

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    #[validate(schema(function = "validate_not_empty"))]
    pub struct Body {
        #[validate(
            length(min = 1, message = "Title is required"),
            custom(function = "rules::validate_title")
        )]
        pub title: Option<String>,
        #[validate(length(min = 1, message = "Description is required"))]
        pub description: Option<String>,
        #[validate(
            length(min = 1, message = "Location is required"),
            custom(function = "rules::validate_location")
        )]
        pub location: Option<String>,
        pub r#when: Option<DateTime<Utc>>,
        #[validate(range(
            min = 1,
            max = 20,
            message = "Max reservations must be between 1 and 20"
        ))]
        pub max_reservations: Option<i32>,
        #[validate(custom(function = "rules::validate_price"))]
        pub price: Option<BigDecimal>,
        pub created_date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "validation::nullable")]
        pub image: Option<Option<String>>,
        #[validate(range(min = 1, message = "Creator ID must be a positive integer"))]
        pub created_by: Option<i64>,
    }

    fn validate_not_empty(body: &Body) -> Result<(), ValidationError> {
        let untouched = body.title.is_none()
            && body.description.is_none()
            && body.location.is_none()
            && body.r#when.is_none()
            && body.max_reservations.is_none()
            && body.price.is_none()
            && body.created_date.is_none()
            && body.image.is_none()
            && body.created_by.is_none();

        if untouched {
            return Err(validation::error(
                "EMPTY_UPDATE",
                "At least one field must be provided for update",
            ));
        }

        Ok(())
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }

}

pub mod response {
    use crate::modules::meal::repository::Meal;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MealUpdated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealUpdated(meal) => (StatusCode::OK, Json(json!(meal))).into_response(),
            }
        }
    }

    pub enum Error {
        MealNotFound,
        CreatorNotFound,
        InvalidMealData,
        FailedToUpdateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meal not found" })),
                )
                    .into_response(),
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
                Self::FailedToUpdateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

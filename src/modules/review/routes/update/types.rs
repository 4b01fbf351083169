pub mod request {
    use crate::{modules::review::rules, utils::validation};
    use chrono::NaiveDate;
    use serde::Deserialize;
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
        #[validate(range(min = 1, message = "Meal ID must be a positive integer"))]
        pub meal_id: Option<i64>,
        #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
        pub stars: Option<i32>,
        pub created_date: Option<NaiveDate>,
        #[validate(range(min = 1, message = "User ID must be a positive integer"))]
        pub user_id: Option<i64>,
    }

    fn validate_not_empty(body: &Body) -> Result<(), ValidationError> {
        let untouched = body.title.is_none()
            && body.description.is_none()
            && body.meal_id.is_none()
            && body.stars.is_none()
            && body.created_date.is_none()
            && body.user_id.is_none();

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
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReviewUpdated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewUpdated(review) => {
                    (StatusCode::OK, Json(json!(review))).into_response()
                }
            }
        }
    }

    pub enum Error {
        ReviewNotFound,
        MealOrUserNotFound,
        InvalidReviewData,
        FailedToUpdateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Review not found" })),
                )
                    .into_response(),
                Self::MealOrUserNotFound => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Referenced meal or user does not exist" })),
                )
                    .into_response(),
                Self::InvalidReviewData => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid review data" })),
                )
                    .into_response(),
                Self::FailedToUpdateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

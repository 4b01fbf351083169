pub mod request {
    use crate::modules::review::rules;
    use chrono::NaiveDate;
    use serde::Deserialize;
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
        #[validate(range(min = 1, message = "Meal ID must be a positive integer"))]
        pub meal_id: i64,
        #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
        pub stars: i32,
        pub created_date: Option<NaiveDate>,
        #[validate(range(min = 1, message = "User ID must be a positive integer"))]
        pub user_id: Option<i64>,
    }

    pub struct Payload {
        pub body: Body,
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn body(stars: i32) -> Body {
            serde_json::from_value(serde_json::json!({
                "title": "Lovely",
                "description": "Would eat again",
                "meal_id": 1,
                "stars": stars
            }))
            .unwrap()
        }

        #[test]
        fn stars_must_be_between_one_and_five() {
            assert!(body(1).validate().is_ok());
            assert!(body(5).validate().is_ok());
            assert!(body(0).validate().is_err());
            assert!(body(6).validate().is_err());
        }

        #[test]
        fn title_fits_its_column() {
            let mut review = body(4);
            review.title = "t".repeat(256);

            let errors = review.validate().unwrap_err();
            assert_eq!(
                errors.field_errors()["title"][0].message.as_deref(),
                Some("Title cannot exceed 255 characters")
            );
        }

        #[test]
        fn fractional_stars_fail_to_parse() {
            let parsed = serde_json::from_value::<Body>(serde_json::json!({
                "title": "Lovely",
                "description": "Would eat again",
                "meal_id": 1,
                "stars": 4.5
            }));

            assert!(parsed.is_err());
        }
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReviewCreated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewCreated(review) => {
                    (StatusCode::CREATED, Json(json!(review))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MealOrUserNotFound,
        InvalidReviewData,
        FailedToCreateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
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
                Self::FailedToCreateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

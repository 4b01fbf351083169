pub mod request {
    use crate::modules::reservation::rules;
    use chrono::NaiveDate;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    pub struct Body {
        #[validate(range(min = 1, message = "Number of guests must be a positive integer"))]
        pub number_of_guests: i32,
        #[validate(range(min = 1, message = "Meal ID must be a positive integer"))]
        pub meal_id: i64,
        pub created_date: Option<NaiveDate>,
        #[validate(length(
            min = 10,
            max = 15,
            message = "Phone number must be between 10 and 15 characters long"
        ))]
        pub contact_phonenumber: String,
        #[validate(
            length(min = 1, message = "Contact name is required"),
            custom(function = "rules::validate_contact_name")
        )]
        pub contact_name: String,
        #[validate(
            email(message = "Invalid email format"),
            length(max = 255, message = "Contact email cannot exceed 255 characters")
        )]
        pub contact_email: Option<String>,
        #[validate(range(min = 1, message = "User ID must be a positive integer"))]
        pub user_id: Option<i64>,
    }

    pub struct Payload {
        pub body: Body,
    }

}

pub mod response {
    use crate::modules::reservation::repository::Reservation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReservationCreated(Reservation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationCreated(reservation) => {
                    (StatusCode::CREATED, Json(json!(reservation))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MealOrUserNotFound,
        InvalidReservationData,
        FailedToCreateReservation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealOrUserNotFound => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Referenced meal or user does not exist" })),
                )
                    .into_response(),
                Self::InvalidReservationData => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid reservation data" })),
                )
                    .into_response(),
                Self::FailedToCreateReservation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create reservation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

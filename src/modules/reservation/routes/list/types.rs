pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    pub struct Filters {
        #[validate(range(min = 1, message = "Meal ID must be a positive integer"))]
        pub meal_id: Option<i64>,
        #[validate(range(min = 1, message = "User ID must be a positive integer"))]
        pub user_id: Option<i64>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::reservation::repository::Reservation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reservations(Vec<Reservation>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reservations(reservations) => {
                    (StatusCode::OK, Json(json!(reservations))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchReservations,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchReservations => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch reservations" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

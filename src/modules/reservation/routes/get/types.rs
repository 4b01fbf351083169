pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use crate::modules::reservation::repository::Reservation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reservation(Reservation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reservation(reservation) => {
                    (StatusCode::OK, Json(json!(reservation))).into_response()
                }
            }
        }
    }

    pub enum Error {
        ReservationNotFound,
        FailedToFetchReservation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Reservation not found" })),
                )
                    .into_response(),
                Self::FailedToFetchReservation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch reservation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

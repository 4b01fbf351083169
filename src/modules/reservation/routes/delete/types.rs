pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReservationDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Reservation deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ReservationNotFound,
        FailedToDeleteReservation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Reservation not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteReservation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete reservation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

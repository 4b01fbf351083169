pub mod request {
    pub enum Slice {
        Future,
        Past,
        First,
        Last,
    }

    pub struct Payload {
        pub slice: Slice,
    }
}

pub mod response {
    use crate::modules::meal::repository::MealWithStats;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Meals(Vec<MealWithStats>),
        Meal(MealWithStats),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meals(meals) => (StatusCode::OK, Json(json!(meals))).into_response(),
                Self::Meal(meal) => (StatusCode::OK, Json(json!(meal))).into_response(),
            }
        }
    }

    pub enum Error {
        NoMeals,
        FailedToFetchMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoMeals => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meals not found" })),
                )
                    .into_response(),
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

pub mod request {
    use axum_extra::extract::CookieJar;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(message = "Please provide a valid email address"))]
        pub email: String,
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
    }

    pub struct Payload {
        pub jar: CookieJar,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::auth::profile::Profile;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::CookieJar;
    use serde_json::json;

    pub enum Success {
        LoggedIn {
            jar: CookieJar,
            token: String,
            profile: Profile,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn {
                    jar,
                    token,
                    profile,
                } => (
                    StatusCode::OK,
                    jar,
                    Json(json!({
                        "message": "Login successful",
                        "token": token,
                        "user": profile,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidCredentials,
        AccountDeactivated,
        FailedToLogin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid email or password" })),
                )
                    .into_response(),
                Self::AccountDeactivated => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Account is deactivated. Please contact support." })),
                )
                    .into_response(),
                Self::FailedToLogin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::modules::user::rules;
    use serde::Deserialize;
    use validator::Validate;

    /// Plaintext password in, bcrypt hash stored.
    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    pub struct Body {
        #[validate(
            email(message = "Invalid email format"),
            length(max = 255, message = "Email must be at most 255 characters")
        )]
        pub email: String,
        #[validate(
            length(min = 8, message = "Password must be at least 8 characters long"),
            custom(function = "rules::validate_password_length")
        )]
        pub password: String,
        #[validate(
            length(min = 1, message = "First name is required"),
            custom(function = "rules::validate_first_name")
        )]
        pub first_name: String,
        #[validate(
            length(min = 1, message = "Last name is required"),
            custom(function = "rules::validate_last_name")
        )]
        pub last_name: String,
        #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
        pub phone_number: Option<String>,
        #[validate(length(max = 500, message = "Profile image must be at most 500 characters"))]
        pub profile_image: Option<String>,
        pub email_verified: Option<bool>,
        pub is_active: Option<bool>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::user::repository::User;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        UserCreated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserCreated(user) => (StatusCode::CREATED, Json(json!(user))).into_response(),
            }
        }
    }

    pub enum Error {
        EmailAlreadyInUse,
        FailedToCreateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User with this email already exists" })),
                )
                    .into_response(),
                Self::FailedToCreateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::{modules::user::rules, utils::validation};
    use serde::Deserialize;
    use validator::{Validate, ValidationError};

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    #[validate(schema(function = "validate_not_empty"))]
    pub struct Body {
        #[validate(
            email(message = "Invalid email format"),
            length(max = 255, message = "Email must be at most 255 characters")
        )]
        pub email: Option<String>,
        #[validate(
            length(min = 1, message = "First name is required"),
            custom(function = "rules::validate_first_name")
        )]
        pub first_name: Option<String>,
        #[validate(
            length(min = 1, message = "Last name is required"),
            custom(function = "rules::validate_last_name")
        )]
        pub last_name: Option<String>,
        #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
        #[serde(default, deserialize_with = "validation::nullable")]
        pub phone_number: Option<Option<String>>,
        #[validate(length(max = 500, message = "Profile image must be at most 500 characters"))]
        #[serde(default, deserialize_with = "validation::nullable")]
        pub profile_image: Option<Option<String>>,
        pub email_verified: Option<bool>,
        pub is_active: Option<bool>,
    }

    fn validate_not_empty(body: &Body) -> Result<(), ValidationError> {
        let untouched = body.email.is_none()
            && body.first_name.is_none()
            && body.last_name.is_none()
            && body.phone_number.is_none()
            && body.profile_image.is_none()
            && body.email_verified.is_none()
            && body.is_active.is_none();

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

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::validation::field_errors;

        #[test]
        fn empty_update_reports_a_schema_level_error() {
            let body: Body = serde_json::from_str("{}").unwrap();

            let errors = field_errors(&body.validate().unwrap_err());
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, "");
            assert_eq!(
                errors[0].message,
                "At least one field must be provided for update"
            );
        }

        #[test]
        fn password_hash_cannot_be_smuggled_in() {
            assert!(serde_json::from_str::<Body>(r#"{"password_hash": "x"}"#).is_err());
        }

        #[test]
        fn null_clears_optional_profile_fields() {
            let body: Body =
                serde_json::from_str(r#"{"phone_number": null, "profile_image": null}"#).unwrap();

            assert_eq!(body.phone_number, Some(None));
            assert_eq!(body.profile_image, Some(None));
            assert!(body.validate().is_ok());
        }

        #[test]
        fn overlong_phone_number_is_still_rejected() {
            let body: Body =
                serde_json::from_str(&format!(r#"{{"phone_number": "{}"}}"#, "1".repeat(21)))
                    .unwrap();

            assert_eq!(field_errors(&body.validate().unwrap_err())[0].path, "phone_number");
        }

        #[test]
        fn malformed_email_is_rejected() {
            let body: Body = serde_json::from_str(r#"{"email": "not-an-email"}"#).unwrap();

            assert_eq!(field_errors(&body.validate().unwrap_err())[0].path, "email");
        }
    }
}

pub mod response {
    use crate::modules::user::repository::User;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        UserUpdated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserUpdated(user) => (StatusCode::OK, Json(json!(user))).into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        EmailAlreadyInUse,
        FailedToUpdateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User with this email already exists" })),
                )
                    .into_response(),
                Self::FailedToUpdateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

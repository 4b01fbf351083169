pub mod request {
    use crate::{modules::user::rules, utils::validation};
    use axum_extra::extract::CookieJar;
    use regex::Regex;
    use serde::Deserialize;
    use validator::{Validate, ValidationError};

    fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        let rules = [
            (r"[a-z]", "Password must contain at least one lowercase letter"),
            (r"[A-Z]", "Password must contain at least one uppercase letter"),
            (r"\d", "Password must contain at least one number"),
            (
                r"[@$!%*?&]",
                "Password must contain at least one special character (@$!%*?&)",
            ),
        ];

        for (pattern, message) in rules {
            let regex = Regex::new(pattern).expect("Invalid password rule regex");
            if !regex.is_match(password) {
                return Err(validation::error("WEAK_PASSWORD", message));
            }
        }

        Ok(())
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        #[validate(
            email(message = "Please provide a valid email address"),
            length(max = 255, message = "Email must be at most 255 characters")
        )]
        pub email: String,
        #[validate(
            length(min = 8, message = "Password must be at least 8 characters long"),
            custom(function = "rules::validate_password_length"),
            custom(function = "validate_password_strength")
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
    }

    pub struct Payload {
        pub jar: CookieJar,
        pub body: Body,
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn strong_password_passes() {
            assert!(validate_password_strength("Secr3t!pass").is_ok());
        }

        #[test]
        fn each_character_class_is_required() {
            let cases = [
                ("SECR3T!PASS", "lowercase"),
                ("secr3t!pass", "uppercase"),
                ("Secret!pass", "number"),
                ("Secr3tpass1", "special character"),
            ];

            for (password, missing) in cases {
                let err = validate_password_strength(password).unwrap_err();
                let message = err.message.unwrap().to_string();
                assert!(message.contains(missing), "{password}: {message}");
            }
        }

        fn messages_for(body: serde_json::Value, field: &str) -> Vec<String> {
            let body: Body = serde_json::from_value(body).unwrap();
            validation::field_errors(&body.validate().unwrap_err())
                .into_iter()
                .filter(|error| error.path == field)
                .map(|error| error.message)
                .collect()
        }

        #[test]
        fn overlong_fields_report_their_upper_bound() {
            let passwords = messages_for(
                serde_json::json!({
                    "email": "ada@example.com",
                    "password": format!("Secr3t!pass{}", "a".repeat(70)),
                    "firstName": "Ada",
                    "lastName": "Lovelace"
                }),
                "password",
            );
            assert_eq!(passwords, vec!["Password cannot exceed 72 characters"]);

            let names = messages_for(
                serde_json::json!({
                    "email": "ada@example.com",
                    "password": "Secr3t!pass",
                    "firstName": "A".repeat(101),
                    "lastName": "Lovelace"
                }),
                "first_name",
            );
            assert_eq!(names, vec!["First name cannot exceed 100 characters"]);
        }

        #[test]
        fn short_password_keeps_its_minimum_message() {
            let messages = messages_for(
                serde_json::json!({
                    "email": "ada@example.com",
                    "password": "S3c!a",
                    "firstName": "Ada",
                    "lastName": "Lovelace"
                }),
                "password",
            );
            assert!(messages.contains(&"Password must be at least 8 characters long".to_string()));
        }

        #[test]
        fn body_uses_camel_case_names() {
            let body: Body = serde_json::from_value(serde_json::json!({
                "email": "ada@example.com",
                "password": "Secr3t!pass",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phoneNumber": "4512345678"
            }))
            .unwrap();

            assert!(body.validate().is_ok());
            assert_eq!(body.first_name, "Ada");
        }
    }
}

pub mod response {
    use crate::modules::auth::profile::Profile;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::CookieJar;
    use serde_json::json;

    pub enum Success {
        Registered {
            jar: CookieJar,
            token: String,
            profile: Profile,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered {
                    jar,
                    token,
                    profile,
                } => (
                    StatusCode::CREATED,
                    jar,
                    Json(json!({
                        "message": "User registered successfully",
                        "token": token,
                        "user": profile,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        EmailAlreadyInUse,
        FailedToRegister,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User with this email already exists" })),
                )
                    .into_response(),
                Self::FailedToRegister => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::{modules::reservation::rules, utils::validation};
    use chrono::NaiveDate;
    use serde::Deserialize;
    use validator::{Validate, ValidationError};

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    #[validate(schema(function = "validate_not_empty"))]
    pub struct Body {
        #[validate(range(min = 1, message = "Number of guests must be a positive integer"))]
        pub number_of_guests: Option<i32>,
        #[validate(range(min = 1, message = "Meal ID must be a positive integer"))]
        pub meal_id: Option<i64>,
        pub created_date: Option<NaiveDate>,
        #[validate(length(
            min = 10,
            max = 15,
            message = "Phone number must be between 10 and 15 characters long"
        ))]
        pub contact_phonenumber: Option<String>,
        #[validate(
            length(min = 1, message = "Contact name is required"),
            custom(function = "rules::validate_contact_name")
        )]
        pub contact_name: Option<String>,
        #[validate(
            email(message = "Invalid email format"),
            length(max = 255, message = "Contact email cannot exceed 255 characters")
        )]
        #[serde(default, deserialize_with = "validation::nullable")]
        pub contact_email: Option<Option<String>>,
        #[validate(range(min = 1, message = "User ID must be a positive integer"))]
        pub user_id: Option<i64>,
    }

    fn validate_not_empty(body: &Body) -> Result<(), ValidationError> {
        let untouched = body.number_of_guests.is_none()
            && body.meal_id.is_none()
            && body.created_date.is_none()
            && body.contact_phonenumber.is_none()
            && body.contact_name.is_none()
            && body.contact_email.is_none()
            && body.user_id.is_none();

        if untouched {
            return Err(validation::error(
                "EMPTY_UPDATE",
                "At least one field must be provided for update",
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn parse(raw: &str) -> Body {
            serde_json::from_str(raw).unwrap()
        }

        #[test]
        fn null_contact_email_clears_it() {
            let body = parse(r#"{"contact_email": null}"#);

            assert_eq!(body.contact_email, Some(None));
            assert!(body.validate().is_ok());
        }

        #[test]
        fn missing_contact_email_keeps_it() {
            assert_eq!(parse(r#"{"number_of_guests": 2}"#).contact_email, None);
        }

        #[test]
        fn contact_fields_fit_their_columns() {
            let name = parse(&format!(r#"{{"contact_name": "{}"}}"#, "n".repeat(256)));
            assert!(name.validate().is_err());

            let domain = format!("{}com", format!("{}.", "a".repeat(60)).repeat(4));
            let email = parse(&format!(r#"{{"contact_email": "contact123@{}"}}"#, domain));
            let errors = email.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("contact_email"));
        }
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::reservation::repository::Reservation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReservationUpdated(Reservation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationUpdated(reservation) => {
                    (StatusCode::OK, Json(json!(reservation))).into_response()
                }
            }
        }
    }

    pub enum Error {
        ReservationNotFound,
        MealOrUserNotFound,
        InvalidReservationData,
        FailedToUpdateReservation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReservationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Reservation not found" })),
                )
                    .into_response(),
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
                Self::FailedToUpdateReservation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update reservation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::json;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

const SCHEMA_LEVEL_KEY: &str = "__all__";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

fn join_path(prefix: &str, segment: &str) -> String {
    match (prefix.is_empty(), segment == SCHEMA_LEVEL_KEY) {
        (_, true) => prefix.to_string(),
        (true, false) => segment.to_string(),
        (false, false) => format!("{prefix}.{segment}"),
    }
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, field);
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| FieldError {
                    path: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                }))
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}.{index}"), nested, out);
                }
            }
        }
    }
}

/// Flattens validator output into `{path, message}` pairs ordered by path.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = vec![];
    collect("", errors, &mut out);
    out.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.message.cmp(&b.message)));
    out
}

pub fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

/// Upper bound on character count, reported apart from the field's
/// `required` rule.
pub fn max_chars(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(error("TOO_LONG", message));
    }

    Ok(())
}

fn bad_request(errors: Vec<FieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Failed to validate request", "errors": errors })),
    )
        .into_response()
}

pub fn into_response(errors: ValidationErrors) -> Response {
    bad_request(field_errors(&errors))
}

fn malformed_segment(segment: &str, message: String) -> Response {
    tracing::warn!("Rejected malformed request {}: {}", segment, message);
    bad_request(vec![FieldError {
        path: segment.to_string(),
        message,
    }])
}

fn validated<T: Validate>(segment: &str, value: T) -> Result<T, Response> {
    value.validate().map_err(|errors| {
        tracing::warn!("Failed to validate request {}: {}", segment, errors);
        into_response(errors)
    })?;
    Ok(value)
}

/// For partial updates of nullable columns: a missing key stays `None`
/// (keep the stored value) while an explicit `null` becomes `Some(None)`
/// (clear it). Pair with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `/:id` path parameter shared by the resource routes.
#[derive(Deserialize, Validate, Debug, Clone, Copy)]
pub struct IdParams {
    #[validate(range(min = 1, message = "ID must be a positive integer"))]
    pub id: i64,
}

/// Path parameters, deserialized then run through their `Validate` rules.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| malformed_segment("params", rejection.body_text()))?;

        validated("params", value).map(Self)
    }
}

/// Query string, deserialized then run through its `Validate` rules.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| malformed_segment("query", rejection.body_text()))?;

        validated("query", value).map(Self)
    }
}

/// JSON body, deserialized then run through its `Validate` rules.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| malformed_segment("body", rejection.body_text()))?;

        validated("body", value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Validate)]
    struct Guest {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
        stars: i32,
    }

    #[test]
    fn flattens_field_errors_in_path_order() {
        let guest = Guest {
            name: String::new(),
            stars: 9,
        };

        let errors = guest.validate().unwrap_err();

        assert_eq!(
            field_errors(&errors),
            vec![
                FieldError {
                    path: "name".to_string(),
                    message: "Name is required".to_string()
                },
                FieldError {
                    path: "stars".to_string(),
                    message: "Stars must be between 1 and 5".to_string()
                },
            ]
        );
    }

    #[test]
    fn falls_back_to_the_error_code_without_a_message() {
        let mut errors = ValidationErrors::new();
        errors.add("limit", ValidationError::new("INVALID_LIMIT"));

        assert_eq!(
            field_errors(&errors),
            vec![FieldError {
                path: "limit".to_string(),
                message: "INVALID_LIMIT".to_string()
            }]
        );
    }

    #[test]
    fn schema_level_errors_have_an_empty_path() {
        let mut errors = ValidationErrors::new();
        errors.add(
            SCHEMA_LEVEL_KEY,
            error("EMPTY_UPDATE", "At least one field must be provided for update"),
        );

        assert_eq!(field_errors(&errors)[0].path, "");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        image: Option<Option<String>>,
    }

    #[test]
    fn nullable_tells_missing_from_null() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        let cleared: Patch = serde_json::from_str(r#"{"image": null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"image": "http://img"}"#).unwrap();

        assert_eq!(missing.image, None);
        assert_eq!(cleared.image, Some(None));
        assert_eq!(set.image, Some(Some("http://img".to_string())));
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        assert!(max_chars(&"é".repeat(255), 255, "Too long").is_ok());
        let err = max_chars(&"a".repeat(256), 255, "Too long").unwrap_err();
        assert_eq!(err.code, "TOO_LONG");
        assert_eq!(err.message.unwrap(), "Too long");
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(IdParams { id: 1 }.validate().is_ok());
        assert!(IdParams { id: 0 }.validate().is_err());
        assert!(IdParams { id: -3 }.validate().is_err());
    }
}

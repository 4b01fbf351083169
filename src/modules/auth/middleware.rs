use crate::modules::user::{self, repository::User};
use crate::types::Context;
use crate::utils::auth;
use axum::extract::FromRequestParts;
use axum::http::{self, request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub const AUTH_COOKIE: &str = "auth-token";

enum Error {
    MissingToken,
    InvalidToken,
    AccountDeactivated,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => "No authentication token provided",
            Self::InvalidToken => "Invalid or expired token",
            Self::AccountDeactivated => "Account is deactivated",
        };

        (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
    }
}

fn get_token_from_request(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(auth::extract_bearer_token)
        .map(|token| token.to_string());

    from_header.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(AUTH_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    })
}

async fn get_user_from_token(ctx: Arc<Context>, token: String) -> Result<Auth, Error> {
    let claims = auth::verify_token(&ctx.auth, &token).map_err(|err| {
        tracing::debug!("Rejected access token: {}", err);
        Error::InvalidToken
    })?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, claims.user_id)
        .await
        .map_err(|_| Error::InvalidToken)?
        .ok_or(Error::InvalidToken)?;

    if !user.is_active {
        return Err(Error::AccountDeactivated);
    }

    Ok(Auth { user })
}

/// The user behind the request's access token.
#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Auth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        let token = get_token_from_request(parts).ok_or(Error::MissingToken.into_response())?;

        get_user_from_token(ctx.clone(), token)
            .await
            .map_err(|err| err.into_response())
    }
}

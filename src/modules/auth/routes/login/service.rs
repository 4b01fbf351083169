use super::types::{request, response};
use crate::{
    modules::{auth::profile, user},
    types::Context,
    utils::auth,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = user::repository::find_by_email(&ctx.db_conn.pool, payload.body.email)
        .await
        .map_err(|_| response::Error::FailedToLogin)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !user.is_active {
        return Err(response::Error::AccountDeactivated);
    }

    let password_matches = auth::verify_password(payload.body.password, user.password_hash.clone())
        .await
        .map_err(|err| {
            tracing::error!("Failed to verify password for user {}: {}", user.id, err);
            response::Error::FailedToLogin
        })?;

    if !password_matches {
        return Err(response::Error::InvalidCredentials);
    }

    user::repository::touch_last_login(&ctx.db_conn.pool, user.id)
        .await
        .map_err(|_| response::Error::FailedToLogin)?;

    let token = auth::issue_token(&ctx.auth, user.id, &user.email).map_err(|err| {
        tracing::error!("Failed to issue token for user {}: {}", user.id, err);
        response::Error::FailedToLogin
    })?;

    tracing::info!("User {} logged in", user.id);

    Ok(response::Success::LoggedIn {
        jar: profile::with_token_cookie(payload.jar, token.clone()),
        token,
        profile: user.into(),
    })
}

use super::types::{request, response};
use crate::{
    modules::{auth::profile, user},
    types::Context,
    utils::auth,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let existing = user::repository::find_by_email(&ctx.db_conn.pool, payload.body.email.clone())
        .await
        .map_err(|_| response::Error::FailedToRegister)?;

    if existing.is_some() {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash = auth::hash_password(payload.body.password)
        .await
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            response::Error::FailedToRegister
        })?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email: payload.body.email,
            password_hash,
            first_name: payload.body.first_name,
            last_name: payload.body.last_name,
            phone_number: payload.body.phone_number,
            profile_image: None,
            email_verified: false,
            is_active: true,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::FailedToRegister,
    })?;

    let token = auth::issue_token(&ctx.auth, user.id, &user.email).map_err(|err| {
        tracing::error!("Failed to issue token for user {}: {}", user.id, err);
        response::Error::FailedToRegister
    })?;

    tracing::info!("Registered user {}", user.id);

    Ok(response::Success::Registered {
        jar: profile::with_token_cookie(payload.jar, token.clone()),
        token,
        profile: user.into(),
    })
}

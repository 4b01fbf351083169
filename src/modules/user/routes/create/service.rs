use super::types::{request, response};
use crate::{modules::user::repository, types::Context, utils::auth};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let password_hash = auth::hash_password(payload.body.password)
        .await
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            response::Error::FailedToCreateUser
        })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateUserPayload {
            email: payload.body.email,
            password_hash,
            first_name: payload.body.first_name,
            last_name: payload.body.last_name,
            phone_number: payload.body.phone_number,
            profile_image: payload.body.profile_image,
            email_verified: payload.body.email_verified.unwrap_or(false),
            is_active: payload.body.is_active.unwrap_or(true),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        repository::Error::UnexpectedError => response::Error::FailedToCreateUser,
    })
    .map(response::Success::UserCreated)
}

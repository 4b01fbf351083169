use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateUserPayload {
            email: payload.body.email,
            first_name: payload.body.first_name,
            last_name: payload.body.last_name,
            phone_number: payload.body.phone_number,
            profile_image: payload.body.profile_image,
            email_verified: payload.body.email_verified,
            is_active: payload.body.is_active,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateUser,
    })?
    .ok_or(response::Error::UserNotFound)
    .map(response::Success::UserUpdated)
}

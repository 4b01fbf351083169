use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deactivated = repository::deactivate_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeactivateUser)?;

    if !deactivated {
        return Err(response::Error::UserNotFound);
    }

    tracing::info!("Deactivated user {}", payload.id);
    Ok(response::Success::UserDeactivated)
}

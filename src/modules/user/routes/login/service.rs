use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let stamped = repository::touch_last_login(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToRecordLogin)?;

    if !stamped {
        return Err(response::Error::UserNotFound);
    }

    Ok(response::Success::LoginRecorded)
}

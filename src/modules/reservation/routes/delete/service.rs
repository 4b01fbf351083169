use super::types::{request, response};
use crate::{modules::reservation::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted = repository::delete_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReservation)?;

    if !deleted {
        return Err(response::Error::ReservationNotFound);
    }

    Ok(response::Success::ReservationDeleted)
}

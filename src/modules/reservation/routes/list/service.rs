use super::types::{request, response};
use crate::{modules::reservation::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(
        &ctx.db_conn.pool,
        &repository::Filters {
            meal_id: payload.filters.meal_id,
            user_id: payload.filters.user_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchReservations)
    .map(response::Success::Reservations)
}

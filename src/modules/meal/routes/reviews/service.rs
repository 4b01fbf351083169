use super::types::{request, response};
use crate::{
    modules::{meal, review},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let exists = meal::repository::exists_by_id(&ctx.db_conn.pool, payload.meal_id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)?;

    if !exists {
        return Err(response::Error::MealNotFound);
    }

    review::repository::find_many(
        &ctx.db_conn.pool,
        &review::repository::Filters {
            meal_id: Some(payload.meal_id),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchReviews)
    .map(response::Success::Reviews)
}

use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let filters = payload
        .filters
        .to_meal_filters()
        .map_err(response::Error::InvalidFilters)?;

    repository::find_many(&ctx.db_conn.pool, &filters)
        .await
        .map_err(|_| response::Error::FailedToFetchMeals)
        .map(response::Success::Meals)
}

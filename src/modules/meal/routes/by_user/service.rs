use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(
        &ctx.db_conn.pool,
        &repository::Filters {
            created_by: Some(payload.user_id),
            sort_key: Some(repository::SortKey::When),
            sort_direction: repository::SortDirection::Desc,
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMeals)
    .map(response::Success::Meals)
}

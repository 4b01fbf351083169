use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateReviewPayload {
            title: payload.body.title,
            description: payload.body.description,
            meal_id: payload.body.meal_id,
            user_id: payload.body.user_id,
            stars: payload.body.stars,
            created_date: payload.body.created_date,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::ReferenceNotFound => response::Error::MealOrUserNotFound,
        repository::Error::ConstraintViolated => response::Error::InvalidReviewData,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateReview,
    })?
    .ok_or(response::Error::ReviewNotFound)
    .map(response::Success::ReviewUpdated)
}

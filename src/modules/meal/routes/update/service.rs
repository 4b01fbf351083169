use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateMealPayload {
            title: payload.body.title,
            description: payload.body.description,
            location: payload.body.location,
            r#when: payload.body.r#when,
            max_reservations: payload.body.max_reservations,
            price: payload.body.price,
            created_date: payload.body.created_date,
            image: payload.body.image,
            created_by: payload.body.created_by,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::CreatorNotFound => response::Error::CreatorNotFound,
        repository::Error::ConstraintViolated => response::Error::InvalidMealData,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateMeal,
    })?
    .ok_or(response::Error::MealNotFound)
    .map(response::Success::MealUpdated)
}

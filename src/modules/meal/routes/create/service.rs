use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let created_by = payload
        .body
        .created_by
        .or(payload.auth.map(|auth| auth.user.id));

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMealPayload {
            title: payload.body.title,
            description: payload.body.description,
            location: payload.body.location,
            r#when: payload.body.r#when,
            max_reservations: payload.body.max_reservations,
            price: payload.body.price,
            created_date: payload.body.created_date,
            image: payload.body.image,
            created_by,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::CreatorNotFound => response::Error::CreatorNotFound,
        repository::Error::ConstraintViolated => response::Error::InvalidMealData,
        repository::Error::UnexpectedError => response::Error::FailedToCreateMeal,
    })
    .map(response::Success::MealCreated)
}

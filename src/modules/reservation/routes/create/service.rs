use super::types::{request, response};
use crate::{modules::reservation::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::create(
        &ctx.db_conn.pool,
        repository::CreateReservationPayload {
            number_of_guests: payload.body.number_of_guests,
            meal_id: payload.body.meal_id,
            created_date: payload.body.created_date,
            contact_phonenumber: payload.body.contact_phonenumber,
            contact_name: payload.body.contact_name,
            contact_email: payload.body.contact_email,
            user_id: payload.body.user_id,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::ReferenceNotFound => response::Error::MealOrUserNotFound,
        repository::Error::ConstraintViolated => response::Error::InvalidReservationData,
        repository::Error::UnexpectedError => response::Error::FailedToCreateReservation,
    })
    .map(response::Success::ReservationCreated)
}

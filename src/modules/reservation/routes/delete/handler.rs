use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::validation::{IdParams, ValidatedPath},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedPath(IdParams { id }): ValidatedPath<IdParams>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}

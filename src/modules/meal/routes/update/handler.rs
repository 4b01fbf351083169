use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::validation::{IdParams, ValidatedJson, ValidatedPath},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedPath(IdParams { id }): ValidatedPath<IdParams>,
    ValidatedJson(body): ValidatedJson<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}

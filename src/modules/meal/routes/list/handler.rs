use super::{service::service, types::request};
use crate::{types::Context, utils::validation::ValidatedQuery};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedQuery(filters): ValidatedQuery<request::Filters>,
) -> impl IntoResponse {
    service(ctx, request::Payload { filters }).await
}

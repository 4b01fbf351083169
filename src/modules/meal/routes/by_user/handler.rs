use super::{service::service, types::request};
use crate::{types::Context, utils::validation::ValidatedPath};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedPath(params): ValidatedPath<request::Params>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            user_id: params.user_id,
        },
    )
    .await
}

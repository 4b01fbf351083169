use super::{service::service, types::request};
use crate::{types::Context, utils::validation::ValidatedJson};
use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { jar, body }).await
}

use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context, utils::validation::ValidatedJson};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Option<Auth>,
    ValidatedJson(body): ValidatedJson<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth, body }).await
}

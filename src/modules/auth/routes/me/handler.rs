use super::{service::service, types::request};
use crate::modules::auth::middleware::Auth;
use axum::response::IntoResponse;

pub async fn handler(auth: Auth) -> impl IntoResponse {
    service(request::Payload { auth }).await
}

use super::{
    service::service,
    types::request::{Payload, Slice},
};
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn future(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx, Payload { slice: Slice::Future }).await
}

pub async fn past(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx, Payload { slice: Slice::Past }).await
}

pub async fn first(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx, Payload { slice: Slice::First }).await
}

pub async fn last(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx, Payload { slice: Slice::Last }).await
}

mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/future", get(handler::future))
        .route("/past", get(handler::past))
        .route("/first", get(handler::first))
        .route("/last", get(handler::last))
}

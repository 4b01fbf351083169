mod by_user;
mod create;
mod delete;
mod get;
mod list;
mod reviews;
mod timeline;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(timeline::get_router())
        .merge(by_user::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(reviews::get_router())
}

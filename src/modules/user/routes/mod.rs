mod by_email;
mod create;
mod delete;
mod get;
mod list;
mod login;
mod reservations;
mod reviews;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(by_email::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(login::get_router())
        .merge(reservations::get_router())
        .merge(reviews::get_router())
}

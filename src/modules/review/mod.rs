pub mod repository;
mod routes;
pub mod rules;

pub use routes::get_router;

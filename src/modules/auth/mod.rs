pub mod middleware;
mod profile;
mod routes;

pub use routes::get_router;

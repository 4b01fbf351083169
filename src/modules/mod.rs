pub mod auth;
pub mod meal;
pub mod reservation;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;

//! API layer for the blogs domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BlogsState;
pub use routes::routes;

// HTTP server setup (Axum)
pub mod app;
pub mod auth;
pub mod error;
pub mod response;
pub mod routes;

pub use app::*;

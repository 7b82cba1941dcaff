// HTTP server setup (Axum)
pub mod app;
pub mod debug;
pub mod error;
pub mod routes;

pub use app::*;

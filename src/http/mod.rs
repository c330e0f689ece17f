// HTTP server module

pub mod routes;
pub mod server;

pub use server::{router, AppState};

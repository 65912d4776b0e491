//! # Menu API
//! 
//! HTTP handlers, router, response envelope and error mapping.

pub mod handlers;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

//! API server module serving sentiment analysis over REST

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use routes::app;
pub use server::serve_api;

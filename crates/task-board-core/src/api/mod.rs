//! API Layer
//!
//! REST collaborator abstraction and the reqwest-backed implementation.

mod config;
mod http;
mod traits;

pub use config::{ApiConfig, DEFAULT_API_URL};
pub use http::HttpTaskApi;
pub use traits::TaskApi;

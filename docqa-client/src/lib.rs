pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use auth::{SessionProvider, SessionState, StaticSession};
pub use config::ApiSettings;
pub use error::ApiError;
pub use services::api_client::ApiClient;

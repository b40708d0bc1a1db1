//! Authentication middleware for the Bloglist API
//!
//! Provides JWT issue/validation and an axum extractor that works with any
//! domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::issue_token;
pub use types::AuthIdentity;

//! Blogs domain: blog posts, users, login, and list statistics

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::stats;

// Re-export repository types
pub use repository::{BlogRepository, BlogWithOwnerRow, BlogsRepositories, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::BlogsState;

// Re-export auth types from bloglist-auth for convenience
pub use bloglist_auth::{AuthBackend, AuthConfig, AuthError, AuthIdentity, AuthUser};

//! Bloglist application composition root
//!
//! Composes the blogs domain router with shared infrastructure routes.

use axum::Router;
use bloglist_auth::{AuthBackend, AuthConfig};
use bloglist_blogs::{BlogsRepositories, BlogsState};
use bloglist_common::Config;
use sqlx::PgPool;

/// Embedded schema migrations, applied at startup by the server binary
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let repos = BlogsRepositories::new(pool.clone());

    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret,
        issuer: config.jwt_issuer,
        audience: config.jwt_audience,
    };
    let auth = AuthBackend::new(pool, auth_config);

    let blogs_state = BlogsState { repos, auth };

    // Build router — compose the domain router with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Bloglist API v0.1.0" }))
        .merge(bloglist_blogs::routes().with_state(blogs_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

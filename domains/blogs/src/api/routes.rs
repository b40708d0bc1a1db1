//! Route definitions for the blogs domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{blogs, login, users};
use super::middleware::BlogsState;

/// Create blog resource routes
fn blog_routes() -> Router<BlogsState> {
    Router::new()
        .route("/api/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog).delete(blogs::delete_blog),
        )
        .route("/api/blogs/{id}/likes", put(blogs::increment_likes))
}

/// Create user resource routes
fn user_routes() -> Router<BlogsState> {
    Router::new().route("/api/users", get(users::list_users).post(users::create_user))
}

/// Create login routes
fn login_routes() -> Router<BlogsState> {
    Router::new().route("/api/login", post(login::login))
}

/// Create all blogs domain API routes
pub fn routes() -> Router<BlogsState> {
    Router::new()
        .merge(blog_routes())
        .merge(user_routes())
        .merge(login_routes())
}

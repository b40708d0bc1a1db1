//! Blog resource API handlers
//!
//! Implements the blog CRUD surface:
//! - GET /api/blogs - List blogs with owner projection
//! - POST /api/blogs - Create a blog (bearer required)
//! - GET /api/blogs/{id} - Retrieve a single blog
//! - DELETE /api/blogs/{id} - Delete a blog (owner only)
//! - PUT /api/blogs/{id}/likes - Increment likes by one

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bloglist_auth::AuthUser;
use bloglist_common::{Error, Result, ValidatedJson};

use crate::api::middleware::BlogsState;
use crate::domain::entities::{Blog, UserSummary};
use crate::repository::{BlogWithOwnerRow, NewBlog};

/// Request for creating a blog.
///
/// Presence of `title` and `url` is checked in the handler so the
/// contractual error message can cover both fields at once.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must be non-negative"))]
    pub likes: Option<i32>,
}

/// Blog listing entry: the blog plus a minimal owner projection
#[derive(Debug, Serialize)]
pub struct BlogListItem {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogWithOwnerRow> for BlogListItem {
    fn from(row: BlogWithOwnerRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            url: row.url,
            likes: row.likes,
            user: UserSummary {
                id: row.user_id,
                username: row.owner_username,
                name: row.owner_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Parse a caller-supplied blog identifier.
///
/// A syntactically invalid identifier is a 400, distinct from the 404
/// for a well-formed identifier with no matching record.
fn parse_blog_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::Validation("malformed blog id".to_string()))
}

/// Pull the required `title` and `url` out of a create request.
///
/// Absent and empty values are rejected alike, with one message
/// covering both fields.
fn required_blog_fields(request: &CreateBlogRequest) -> Result<(String, String)> {
    match (
        request.title.as_deref().filter(|t| !t.is_empty()),
        request.url.as_deref().filter(|u| !u.is_empty()),
    ) {
        (Some(title), Some(url)) => Ok((title.to_string(), url.to_string())),
        _ => Err(Error::Validation("title and url are required".to_string())),
    }
}

/// Check that `actor_id` may delete `blog`.
fn authorize_delete(blog: &Blog, actor_id: Uuid) -> Result<()> {
    if blog.is_owned_by(actor_id) {
        Ok(())
    } else {
        Err(Error::Authentication(
            "only the owner can delete a blog".to_string(),
        ))
    }
}

/// **GET /api/blogs**
///
/// Returns all blogs, each annotated with its owner (id, username, name).
pub async fn list_blogs(State(state): State<BlogsState>) -> Result<Json<Vec<BlogListItem>>> {
    let rows = state.repos.blogs.list_with_owner().await?;
    Ok(Json(rows.into_iter().map(BlogListItem::from).collect()))
}

/// **POST /api/blogs**
///
/// Creates a blog owned by the acting user. `likes` defaults to 0.
pub async fn create_blog(
    AuthUser(actor): AuthUser,
    State(state): State<BlogsState>,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>)> {
    let (title, url) = required_blog_fields(&request)?;

    let blog = state
        .repos
        .blogs
        .create(NewBlog {
            title,
            author: request.author,
            url,
            likes: request.likes.unwrap_or(0),
            user_id: actor.id,
        })
        .await?;

    tracing::info!(blog_id = %blog.id, user_id = %actor.id, "Blog created");

    Ok((StatusCode::CREATED, Json(blog)))
}

/// **GET /api/blogs/{id}**
pub async fn get_blog(
    State(state): State<BlogsState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>> {
    let id = parse_blog_id(&id)?;

    let blog = state
        .repos
        .blogs
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("blog not found".to_string()))?;

    Ok(Json(blog))
}

/// **DELETE /api/blogs/{id}**
///
/// Only the owner may delete a blog; anyone else gets 401 and the
/// record stays put.
pub async fn delete_blog(
    AuthUser(actor): AuthUser,
    State(state): State<BlogsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_blog_id(&id)?;

    let blog = state
        .repos
        .blogs
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("blog not found".to_string()))?;

    authorize_delete(&blog, actor.id)?;

    state.repos.blogs.delete(id).await?;

    tracing::info!(blog_id = %id, user_id = %actor.id, "Blog deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// **PUT /api/blogs/{id}/likes**
///
/// Anyone may like any post; no bearer required. The increment is a
/// single atomic statement in the repository.
pub async fn increment_likes(
    State(state): State<BlogsState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>> {
    let id = parse_blog_id(&id)?;

    let blog = state
        .repos
        .blogs
        .increment_likes(id)
        .await?
        .ok_or_else(|| Error::NotFound("blog not found".to_string()))?;

    Ok(Json(blog))
}

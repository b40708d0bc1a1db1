//! Blog repository
//!
//! Runtime `sqlx::query_as` throughout, consistent with the auth read
//! model: no compile-time database connection required.

use crate::domain::entities::Blog;
use bloglist_common::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Input for creating a blog; the owner comes from the resolved actor,
/// never from the request body.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user_id: Uuid,
}

/// Flat row for the blog listing join: blog columns plus the owner
/// projection (id, username, name only).
#[derive(Debug, sqlx::FromRow)]
pub struct BlogWithOwnerRow {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_name: Option<String>,
}

#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all blogs with their owner projection
    pub async fn list_with_owner(&self) -> Result<Vec<BlogWithOwnerRow>> {
        let rows: Vec<BlogWithOwnerRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   b.created_at, b.updated_at,
                   u.username AS owner_username, u.name AS owner_name
            FROM blogs b
            INNER JOIN users u ON u.id = b.user_id
            ORDER BY b.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get blog by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Blog>> {
        let blog: Option<Blog> = sqlx::query_as(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }

    /// List all blogs owned by a user
    pub async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Blog>> {
        let blogs: Vec<Blog> = sqlx::query_as(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at, updated_at
            FROM blogs
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(blogs)
    }

    /// Persist a new blog
    pub async fn create(&self, new_blog: NewBlog) -> Result<Blog> {
        let blog: Blog = sqlx::query_as(
            r#"
            INSERT INTO blogs (id, title, author, url, likes, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, title, author, url, likes, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_blog.title)
        .bind(&new_blog.author)
        .bind(&new_blog.url)
        .bind(new_blog.likes)
        .bind(new_blog.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    /// Delete a blog by ID, returning whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Increment likes by exactly 1 in a single atomic statement.
    ///
    /// Returns the updated blog, or `None` if no such blog exists.
    /// Concurrent increments cannot lose updates because the addition
    /// happens inside the UPDATE.
    pub async fn increment_likes(&self, id: Uuid) -> Result<Option<Blog>> {
        let blog: Option<Blog> = sqlx::query_as(
            r#"
            UPDATE blogs
            SET likes = likes + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, author, url, likes, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }
}

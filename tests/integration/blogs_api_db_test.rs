//! End-to-end API tests against a live PostgreSQL
//!
//! These run only when `BLOGLIST_TEST_DATABASE_URL` points at a
//! disposable database; without it every test skips. Each test
//! truncates both tables first and runs serially, so they can share
//! one database.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serial_test::serial;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use bloglist_common::Config;

const TEST_DATABASE_ENV: &str = "BLOGLIST_TEST_DATABASE_URL";

async fn db_app() -> Option<(Router, PgPool)> {
    let database_url = match std::env::var(TEST_DATABASE_ENV) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping: {TEST_DATABASE_ENV} not set");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("test database should be reachable");
    bloglist_app::MIGRATOR
        .run(&pool)
        .await
        .expect("migrations should apply");
    sqlx::query("TRUNCATE blogs, users")
        .execute(&pool)
        .await
        .expect("tables should truncate");

    let config = Config {
        database_url,
        jwt_secret: "test-db-secret".to_string(),
        jwt_issuer: None,
        jwt_audience: None,
        rust_log: "bloglist=debug".to_string(),
        port: 0,
    };

    let app = bloglist_app::create_app(config, pool.clone())
        .await
        .expect("app should compose");

    Some((app, pool))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Register a user and log them in, returning their bearer token.
async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/users",
            serde_json::json!({"username": username, "name": username, "password": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/login",
            serde_json::json!({"username": username, "password": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"].as_str().expect("login returns token").to_string()
}

/// Create a blog as the given token's user, returning the response body.
async fn create_blog(app: &Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let mut request = json_post("/api/blogs", body);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn blog_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn user_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[serial]
async fn created_blog_defaults_likes_to_zero_and_is_listed_with_owner() {
    let Some((app, pool)) = db_app().await else {
        return;
    };
    let token = register_and_login(&app, "root", "sekret").await;

    let created = create_blog(
        &app,
        &token,
        serde_json::json!({
            "title": "React patterns",
            "author": "Michael Chan",
            "url": "https://reactpatterns.com/"
        }),
    )
    .await;
    assert_eq!(created["likes"], 0);
    assert_eq!(blog_count(&pool).await, 1);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/blogs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "React patterns");
    assert_eq!(listed[0]["user"]["username"], "root");
    assert!(listed[0]["user"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn create_blog_without_title_or_url_is_400_and_not_persisted() {
    let Some((app, pool)) = db_app().await else {
        return;
    };
    let token = register_and_login(&app, "root", "sekret").await;

    for body in [
        serde_json::json!({"author": "Robert C. Martin", "url": "https://example.com/"}),
        serde_json::json!({"title": "Type wars", "author": "Robert C. Martin"}),
    ] {
        let mut request = json_post("/api/blogs", body);
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "title and url are required");
    }

    assert_eq!(blog_count(&pool).await, 0);
}

#[tokio::test]
#[serial]
async fn increment_likes_adds_exactly_one() {
    let Some((app, _pool)) = db_app().await else {
        return;
    };
    let token = register_and_login(&app, "root", "sekret").await;

    let created = create_blog(
        &app,
        &token,
        serde_json::json!({
            "title": "Canonical string reduction",
            "url": "https://example.com/",
            "likes": 12
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/blogs/{id}/likes"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["likes"], 13);
}

#[tokio::test]
#[serial]
async fn increment_likes_on_unknown_id_is_404() {
    let Some((app, _pool)) = db_app().await else {
        return;
    };

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/blogs/{}/likes", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn owner_can_delete_their_blog() {
    let Some((app, pool)) = db_app().await else {
        return;
    };
    let token = register_and_login(&app, "root", "sekret").await;

    let created = create_blog(
        &app,
        &token,
        serde_json::json!({"title": "First class tests", "url": "https://example.com/"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/blogs/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(blog_count(&pool).await, 0);
}

#[tokio::test]
#[serial]
async fn non_owner_delete_is_401_and_keeps_the_blog() {
    let Some((app, pool)) = db_app().await else {
        return;
    };
    let owner_token = register_and_login(&app, "root", "sekret").await;
    let intruder_token = register_and_login(&app, "mluukkai", "salainen").await;

    let created = create_blog(
        &app,
        &owner_token,
        serde_json::json!({"title": "TDD harms architecture", "url": "https://example.com/"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/blogs/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {intruder_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "only the owner can delete a blog");
    assert_eq!(blog_count(&pool).await, 1);
}

#[tokio::test]
#[serial]
async fn duplicate_username_is_400_naming_the_value() {
    let Some((app, pool)) = db_app().await else {
        return;
    };
    let _ = register_and_login(&app, "root", "sekret").await;

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/users",
            serde_json::json!({"username": "root", "password": "other"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "username `root` is already taken");
    assert_eq!(user_count(&pool).await, 1);
}

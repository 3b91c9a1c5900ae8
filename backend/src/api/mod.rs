//! Central module for organizing the application's main API endpoints.
//!
//! This module assembles the top-level router: the authentication routes, the
//! user profile routes and the root banner, plus router-wide middleware.

pub mod user;

use axum::{routing::get, Router};

use crate::auth;
use crate::middleware;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(root_handler))
        .merge(auth::auth_router(state.clone()))
        .merge(user::routes::user_router(state.clone()))
        .with_state(state);

    middleware::with_request_tracing(app)
}

async fn root_handler() -> &'static str {
    "Welcome to the storefront API!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adapters::{CredentialStore, MemoryStore};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::auth::errors::{INVALID_CREDENTIALS, UNAUTHORIZED};
    use crate::config::AuthConfig;

    fn app_with(store: Arc<MemoryStore>) -> Router {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            bcrypt_cost: 4,
        };
        let store: Arc<dyn CredentialStore> = store;
        router(AppState::new(store, &config).unwrap())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn check_auth(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::GET).uri("/checkauth");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    fn alice() -> Value {
        json!({"isAdmin": false, "username": "alice", "email": "a@x.com", "password": "secret123"})
    }

    async fn sign_in(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
        let (status, body) = send(
            app,
            post_json("/signin", json!({"isAdmin": false, "email": email, "password": password})),
        )
        .await;
        (status, json_of(&body))
    }

    #[tokio::test]
    async fn sign_up_sign_in_and_check_auth() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (status, _) = send(&app, post_json("/signup", alice())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = sign_in(&app, "a@x.com", "secret123").await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        let (status, body) = send(&app, check_auth(Some(token.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = send(&app, check_auth(None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json_of(&body)["message"], UNAUTHORIZED);
    }

    #[tokio::test]
    async fn duplicate_sign_up_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone());

        let (status, _) = send(&app, post_json("/signup", alice())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = send(&app, post_json("/signup", alice())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json_of(&body)["message"].is_string());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn admin_partition_is_separate() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let mut admin = alice();
        admin["isAdmin"] = json!(true);

        let (status, _) = send(&app, post_json("/signup", alice())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, post_json("/signup", admin)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn sign_up_requires_all_fields() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let (status, body) = send(
            &app,
            post_json("/signup", json!({"isAdmin": false, "username": "alice", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["message"], "email is required");
    }

    fn raw_post(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn malformed_bodies_get_json_validation_errors() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone());
        let cases = [
            (Some("application/json"), "{not json", "Malformed request body"),
            (
                Some("application/json"),
                r#"{"isAdmin":null,"username":"alice","email":"a@x.com","password":"pw"}"#,
                "Malformed request body",
            ),
            (None, r#"{"username":"alice","email":"a@x.com","password":"pw"}"#, "Expected a JSON request body"),
        ];

        for (content_type, body, message) in cases {
            for uri in ["/signup", "/signin"] {
                let (status, bytes) = send(&app, raw_post(uri, content_type, body)).await;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", uri, body);
                assert_eq!(json_of(&bytes), json!({ "message": message }), "{} {}", uri, body);
            }
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn malformed_profile_body_is_a_validation_error() {
        let app = app_with(Arc::new(MemoryStore::new()));
        send(&app, post_json("/signup", alice())).await;
        let (_, body) = sign_in(&app, "a@x.com", "secret123").await;
        let token = body["token"].as_str().unwrap().to_string();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(r#"{"userEmail": 42}"#))
            .unwrap();
        let (status, bytes) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&bytes)["message"], "Malformed request body");
    }

    #[tokio::test]
    async fn bad_password_and_unknown_email_look_the_same() {
        let app = app_with(Arc::new(MemoryStore::new()));
        send(&app, post_json("/signup", alice())).await;

        let wrong = sign_in(&app, "a@x.com", "wrong-password").await;
        let unknown = sign_in(&app, "nobody@x.com", "secret123").await;
        assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.1["message"], INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn guard_rejects_bad_tokens() {
        let app = app_with(Arc::new(MemoryStore::new()));
        for token in ["not-a-token", "a.b.c"] {
            let (status, _) = send(&app, check_auth(Some(token))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }

        let request = Request::builder()
            .uri("/checkauth")
            .header(header::AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_from_another_secret_is_rejected() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let foreign = crate::auth::TokenIssuer::new("other-secret")
            .unwrap()
            .issue(
                &crate::auth::models::Subject {
                    id: 1,
                    name: "mallory".into(),
                    email: "m@x.com".into(),
                    role: adapters::Role::Admin,
                },
                chrono::Duration::hours(1),
            )
            .unwrap();
        let (status, _) = send(&app, check_auth(Some(foreign.as_str()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn profile_lookup() {
        let app = app_with(Arc::new(MemoryStore::new()));
        send(&app, post_json("/signup", alice())).await;
        let (_, body) = sign_in(&app, "a@x.com", "secret123").await;
        let token = body["token"].as_str().unwrap().to_string();

        let profile = |email: &str, token: Option<&str>| {
            let mut builder = Request::builder()
                .method(Method::POST)
                .uri("/profile")
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            builder
                .body(Body::from(json!({"userEmail": email}).to_string()))
                .unwrap()
        };

        let (status, body) = send(&app, profile("a@x.com", Some(token.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"username": "alice"}));

        let (status, body) = send(&app, profile("nobody@x.com", Some(token.as_str()))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&body)["message"], "User not found");

        let (status, _) = send(&app, profile("a@x.com", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn root_banner() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("storefront"));
    }
}

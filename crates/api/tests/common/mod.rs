#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use rateboard_api::auth::jwt::{generate_access_token, JwtConfig};
use rateboard_api::config::ServerConfig;
use rateboard_api::routes;
use rateboard_api::state::AppState;
use rateboard_core::pricing::FreelancerProfile;
use rateboard_core::store::{MemoryPricingStore, PricingStore};
use rateboard_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack `main.rs` installs.
pub fn build_test_app(store: Arc<dyn PricingStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };

    let cors = CorsLayer::new()
        .allow_origin([HeaderValue::from_static("http://localhost:5173")])
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a bearer token for `user_id` signed with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed a freelancer profile owned by `owner` and return its id.
pub async fn seed_freelancer(store: &MemoryPricingStore, owner: DbId) -> DbId {
    let now = chrono::Utc::now();
    let freelancer_id = DbId::new_v4();
    store
        .insert_profile(FreelancerProfile {
            freelancer_id,
            user_id: owner,
            title: "Full-stack developer".to_string(),
            bio: "Ships things".to_string(),
            hourly_rate: None,
            skills: vec!["rust".to_string(), "react".to_string()],
            experience_years: 5,
            available_for_hire: true,
            location: Some("Remote".to_string()),
            created_at: now,
            updated_at: now,
        })
        .await;
    freelancer_id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// PUT an arbitrary body, optionally with a content type.
pub async fn put_raw_auth(
    app: Router,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
    token: &str,
) -> Response {
    let mut builder = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"));
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

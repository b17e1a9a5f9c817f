use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use repolens_api::auth::jwt::IdentityClaims;
use repolens_api::config::AppConfig;
use repolens_api::routes;
use repolens_api::state::AppState;
use repolens_cloud::{CloudConfig, CloudHandle, TokenClaims};
use repolens_store::MemoryStore;

/// Signing secret shared by the test config and minted identity tokens.
pub const JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Project ref embedded in the test anon key and the test URL.
pub const PROJECT_REF: &str = "abcd1234";

/// Build a test `AppConfig` with a fully configured cloud backend and the
/// plan override enabled.
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        state_dir: "./state".into(),
        dev_plan_override: true,
        runtime_locale_tag: None,
        cloud: CloudConfig {
            url: Some(format!("https://{PROJECT_REF}.repolens.dev")),
            anon_key: Some(mint_anon_key()),
            service_key: None,
            jwt_secret: Some(JWT_SECRET.to_string()),
        },
    }
}

/// Fresh in-memory store. Keep the `Arc` to inspect writes after requests.
pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router with all middleware layers, using the
/// given config and store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(config: AppConfig, store: Arc<MemoryStore>) -> Router {
    let cloud = Arc::new(CloudHandle::connect(&config.cloud));

    let state = AppState {
        config: Arc::new(config),
        store,
        store_persistent: true,
        cloud,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
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

/// Default app: test config + fresh in-memory store.
pub fn default_test_app() -> Router {
    build_test_app(test_config(), test_store())
}

/// Mint an identity token for a fabricated user, signed with [`JWT_SECRET`].
pub fn mint_identity_token() -> String {
    let claims = IdentityClaims {
        sub: uuid::Uuid::new_v4().to_string(),
        email: Some("dev@example.com".to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// Mint an anon key claiming [`PROJECT_REF`], in the provider's format.
pub fn mint_anon_key() -> String {
    let claims = TokenClaims {
        iss: Some("repolens-cloud".to_string()),
        role: Some("anon".to_string()),
        exp: Some(chrono::Utc::now().timestamp() + 10 * 365 * 24 * 3600),
        project_ref: Some(PROJECT_REF.to_string()),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"provider-signing-secret"),
    )
    .expect("token encoding should succeed")
}

/// One-shot a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// One-shot a request with an optional JSON body and bearer token.
pub async fn request(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = bearer {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use spin_wheel_core::constants::{GENERATE_PRIZES_ENDPOINT, HEALTH_CHECK_ENDPOINT};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Config;
use crate::handlers::{generate_prizes, health_check};
use crate::AppState;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE])
}

pub fn create_router(state: AppState, config: &Config) -> Router {
    // Unknown paths get index.html so the single-page app can load
    let static_service = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    let cache_control_layer = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );

    Router::new()
        .route(HEALTH_CHECK_ENDPOINT, get(health_check))
        .route(GENERATE_PRIZES_ENDPOINT, post(generate_prizes))
        .fallback_service(cache_control_layer.layer(static_service))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use futures::future::BoxFuture;
    use serde_json::{json, Value};
    use spin_wheel_core::constants::{
        GENERATE_FAILED_ERROR, GENERATOR_UPSTREAM_ERROR, INVALID_COUNT_ERROR, RATE_LIMIT_ERROR,
    };
    use tower::ServiceExt;

    use crate::config::GeminiConfig;
    use crate::generator::{GeneratorError, PrizeGenerator};

    struct StaticGenerator {
        reply: Result<Vec<String>, GeneratorError>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl StaticGenerator {
        fn new(reply: Result<Vec<&str>, GeneratorError>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(|texts| texts.into_iter().map(String::from).collect()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PrizeGenerator for StaticGenerator {
        fn generate<'a>(&'a self, theme: &'a str, count: usize) -> BoxFuture<'a, Result<Vec<String>, GeneratorError>> {
            self.calls.lock().unwrap().push((theme.to_string(), count));
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn test_config(static_dir: PathBuf) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir,
            allowed_origins: vec!["http://localhost:8080".to_string()],
            gemini: GeminiConfig {
                api_key: "test".into(),
                model: "test-model".into(),
                base_url: "http://localhost".into(),
            },
        }
    }

    fn app(generator: Arc<StaticGenerator>) -> Router {
        let state = AppState { generator };
        create_router(state, &test_config(PathBuf::from("does-not-exist")))
    }

    fn generate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(GENERATE_PRIZES_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(StaticGenerator::new(Ok(vec![])))
            .oneshot(Request::get(HEALTH_CHECK_ENDPOINT).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_generate_prizes_normalizes_reply() {
        let generator = StaticGenerator::new(Ok(vec!["1. 火锅", "烧烤", "  ", "- 寿司"]));
        let response = app(generator.clone())
            .oneshot(generate_request(json!({ "theme": "今晚吃什么", "count": 6 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "prizes": ["火锅", "烧烤", "寿司"] }));
        assert_eq!(generator.calls(), vec![("今晚吃什么".to_string(), 6)]);
    }

    #[tokio::test]
    async fn test_generate_prizes_blank_theme_uses_fallback() {
        let generator = StaticGenerator::new(Ok(vec!["A", "B"]));
        let response = app(generator.clone())
            .oneshot(generate_request(json!({ "theme": "   " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(generator.calls(), vec![("有趣的主题".to_string(), 8)]);
    }

    #[tokio::test]
    async fn test_generate_prizes_rejects_bad_count() {
        let generator = StaticGenerator::new(Ok(vec!["A", "B"]));
        let response = app(generator.clone())
            .oneshot(generate_request(json!({ "theme": "x", "count": 1 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], INVALID_COUNT_ERROR);
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_prizes_upstream_failure() {
        let generator = StaticGenerator::new(Err(GeneratorError::Upstream {
            status: 500,
            body: "boom".into(),
        }));
        let response = app(generator)
            .oneshot(generate_request(json!({ "theme": "x" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"], GENERATOR_UPSTREAM_ERROR);
    }

    #[tokio::test]
    async fn test_generate_prizes_rate_limited() {
        let response = app(StaticGenerator::new(Err(GeneratorError::RateLimited)))
            .oneshot(generate_request(json!({ "theme": "x" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json_body(response).await["error"], RATE_LIMIT_ERROR);
    }

    #[tokio::test]
    async fn test_generate_prizes_too_few() {
        let response = app(StaticGenerator::new(Ok(vec!["唯一", " "])))
            .oneshot(generate_request(json!({ "theme": "x" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"], GENERATE_FAILED_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_path_serves_index() {
        let dir = std::env::temp_dir().join(format!("spin-wheel-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>wheel</html>").unwrap();

        let state = AppState { generator: StaticGenerator::new(Ok(vec![])) };
        let response = create_router(state, &test_config(dir.clone()))
            .oneshot(Request::get("/some/client/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>wheel</html>");

        std::fs::remove_dir_all(&dir).ok();
    }
}

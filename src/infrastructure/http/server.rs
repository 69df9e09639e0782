//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 默认请求体上限（脚本和提示词都是纯文本）
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5070,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建带全部中间件的 Router
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    // CORS 配置 - 前端页面可能从任意来源打开
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone(), self.config.max_body_bytes);
        let addr = self.config.addr();

        info!(
            max_body_bytes = self.config.max_body_bytes,
            "Starting HTTP server on {} (with graceful shutdown)", addr
        );

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::domain::script::CardConfig;
    use crate::infrastructure::memory::InMemoryRemovalWordStore;

    fn app() -> Router {
        let state = AppState::new(Arc::new(InMemoryRemovalWordStore::new()), CardConfig::default());
        build_router(Arc::new(state), DEFAULT_MAX_BODY_BYTES)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(&app(), "GET", "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_script_cards() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/script/cards",
            Some(json!({ "script": "# 제목\n첫 문장. 둘째 문장.", "limit": 6 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["cards"][0]["text"], "첫 문장.");
        assert_eq!(body["data"]["cards"][1]["index"], 2);
    }

    #[tokio::test]
    async fn test_zero_limit_is_business_error() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/script/cards",
            Some(json!({ "script": "문장.", "limit": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errno"], 400);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_prompt_table_rows() {
        let prompt = "## 🎬 1장 이미지 프롬프트\n[장면 1] 프롬프트: Korean drama still photo, dawn";
        let (_, body) = send(&app(), "POST", "/api/prompt/table", Some(json!({ "prompt": prompt }))).await;
        let rows = body["data"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["kind"], "section");
        assert_eq!(rows[0]["copyable"], false);
        assert_eq!(rows[1]["label"], "장면 001");
        assert_eq!(rows[1]["prompt"], "Korean drama still photo, dawn");
    }

    #[tokio::test]
    async fn test_removal_words_flow_affects_export() {
        let app = app();
        let (_, body) = send(&app, "POST", "/api/removal-words/add", Some(json!({ "word": "dawn" }))).await;
        assert_eq!(body["data"]["words"], json!(["dawn"]));

        let (_, body) = send(
            &app,
            "POST",
            "/api/prompt/export",
            Some(json!({
                "prompt": "[장면 2] x: a street at dawn\n[장면 1] y: dawn",
                "script": "그날 밤",
                "upload_date": "2026-01-05"
            })),
        )
        .await;
        assert_eq!(body["data"]["payload"]["count"], 1);
        assert!(body["data"]["json"].as_str().unwrap().starts_with("{\n  \"version\": 1"));
        assert_eq!(body["data"]["payload"]["items"][0]["id"], "002");
        assert_eq!(body["data"]["payload"]["items"][0]["prompt"], "a street at");
        let filename = body["data"]["filename"].as_str().unwrap();
        assert!(filename.starts_with("[01-05] ／ ["));
        assert!(filename.ends_with("] 그날 밤.json"));

        let (_, body) = send(&app, "POST", "/api/removal-words/reset", None).await;
        assert_eq!(body["data"]["words"], json!([]));
        let (_, body) = send(&app, "GET", "/api/removal-words/list", None).await;
        assert_eq!(body["data"]["words"], json!([]));
    }

    #[tokio::test]
    async fn test_blank_removal_word_rejected() {
        let (_, body) = send(&app(), "POST", "/api/removal-words/add", Some(json!({ "word": "  " }))).await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/prompt/table")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}

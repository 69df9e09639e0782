//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/script/cards          POST  脚本切分为卡片
//! - /api/prompt/table          POST  组装提示词表
//! - /api/prompt/export         POST  导出提示词 JSON
//! - /api/removal-words/list    GET   列出删除词
//! - /api/removal-words/add     POST  追加删除词
//! - /api/removal-words/reset   POST  清空删除词

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/script", script_routes())
        .nest("/prompt", prompt_routes())
        .nest("/removal-words", removal_word_routes())
}

/// Script 路由
fn script_routes() -> Router<Arc<AppState>> {
    Router::new().route("/cards", post(handlers::split_cards))
}

/// Prompt 路由
fn prompt_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/table", post(handlers::build_table))
        .route("/export", post(handlers::export_prompts))
}

/// Removal word 路由
fn removal_word_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_removal_words))
        .route("/add", post(handlers::add_removal_word))
        .route("/reset", post(handlers::reset_removal_words))
}

//! Prompt HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{BuildPromptTable, ExportPrompts};
use crate::infrastructure::http::dto::{
    ApiResponse, ExportRequest, ExportResponse, PromptTableRequest, PromptTableResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 组装提示词表
pub async fn build_table(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PromptTableRequest>,
) -> Result<Json<ApiResponse<PromptTableResponse>>, ApiError> {
    let table = state
        .build_prompt_table_handler
        .handle(BuildPromptTable { prompt: req.prompt })
        .await?;

    Ok(Json(ApiResponse::success(PromptTableResponse::from(table))))
}

/// 导出提示词 JSON
pub async fn export_prompts(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ApiResponse<ExportResponse>>, ApiError> {
    let resp = state
        .export_prompts_handler
        .handle(ExportPrompts {
            prompt: req.prompt,
            script: req.script,
            upload_date: req.upload_date,
        })
        .await?;

    Ok(Json(ApiResponse::success(ExportResponse::from(resp))))
}

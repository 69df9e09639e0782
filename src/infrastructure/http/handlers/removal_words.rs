//! Removal Word HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AddRemovalWord, ListRemovalWords, RemovalWordsResponse, ResetRemovalWords};
use crate::infrastructure::http::dto::{AddRemovalWordRequest, ApiResponse, RemovalWordsDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn words_response(resp: RemovalWordsResponse) -> Json<ApiResponse<RemovalWordsDto>> {
    Json(ApiResponse::success(RemovalWordsDto { words: resp.words }))
}

/// 列出删除词
pub async fn list_removal_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<RemovalWordsDto>>, ApiError> {
    let resp = state
        .list_removal_words_handler
        .handle(ListRemovalWords)
        .await?;
    Ok(words_response(resp))
}

/// 追加删除词
pub async fn add_removal_word(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddRemovalWordRequest>,
) -> Result<Json<ApiResponse<RemovalWordsDto>>, ApiError> {
    let resp = state
        .add_removal_word_handler
        .handle(AddRemovalWord { word: req.word })
        .await?;
    Ok(words_response(resp))
}

/// 清空删除词
pub async fn reset_removal_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<RemovalWordsDto>>, ApiError> {
    let resp = state
        .reset_removal_words_handler
        .handle(ResetRemovalWords)
        .await?;
    Ok(words_response(resp))
}

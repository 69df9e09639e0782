//! Script HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::SplitScriptCards;
use crate::infrastructure::http::dto::{ApiResponse, CardsResponse, SplitCardsRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 脚本切分为卡片
pub async fn split_cards(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SplitCardsRequest>,
) -> Result<Json<ApiResponse<CardsResponse>>, ApiError> {
    let resp = state
        .split_script_cards_handler
        .handle(SplitScriptCards {
            script: req.script,
            limit: req.limit,
        })
        .await?;

    Ok(Json(ApiResponse::success(CardsResponse::from(resp))))
}

//! Data Transfer Objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{CardResponse, ExportPromptsResponse, SplitScriptCardsResponse};
use crate::domain::prompt::{ExportPayload, PromptRow, PromptTable};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Script DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SplitCardsRequest {
    pub script: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CardDto {
    pub index: usize,
    pub heading: String,
    pub text: String,
    pub char_count: usize,
    pub read_seconds: u64,
    pub read_duration: String,
}

impl From<CardResponse> for CardDto {
    fn from(card: CardResponse) -> Self {
        Self {
            index: card.index,
            heading: card.heading,
            text: card.text,
            char_count: card.char_count,
            read_seconds: card.read_seconds,
            read_duration: card.read_duration,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub limit: usize,
    pub total: usize,
    pub total_chars: usize,
    pub cards: Vec<CardDto>,
}

impl From<SplitScriptCardsResponse> for CardsResponse {
    fn from(resp: SplitScriptCardsResponse) -> Self {
        Self {
            limit: resp.limit,
            total: resp.cards.len(),
            total_chars: resp.total_chars,
            cards: resp.cards.into_iter().map(CardDto::from).collect(),
        }
    }
}

// ============================================================================
// Prompt DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PromptTableRequest {
    pub prompt: String,
}

/// 表格中的一行
#[derive(Debug, Serialize)]
pub struct PromptRowDto {
    pub kind: &'static str,
    pub label: String,
    /// 分隔行为 `None`
    pub prompt: Option<String>,
    pub copyable: bool,
}

impl From<PromptRow> for PromptRowDto {
    fn from(row: PromptRow) -> Self {
        let kind = match &row {
            PromptRow::Protagonist { .. } => "protagonist",
            PromptRow::Section { .. } => "section",
            PromptRow::Scene { .. } => "scene",
        };
        let prompt = row.prompt().map(str::to_string);
        Self {
            kind,
            label: row.label(),
            copyable: prompt.is_some(),
            prompt,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromptTableResponse {
    pub scene_count: usize,
    pub rows: Vec<PromptRowDto>,
}

impl From<PromptTable> for PromptTableResponse {
    fn from(table: PromptTable) -> Self {
        Self {
            scene_count: table.scene_count(),
            rows: table.rows.into_iter().map(PromptRowDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub prompt: String,
    #[serde(default)]
    pub script: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub upload_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub filename: String,
    pub payload: ExportPayload,
    /// 与 `payload` 相同内容的缩进 JSON 文本，前端直接存成文件
    pub json: String,
}

impl From<ExportPromptsResponse> for ExportResponse {
    fn from(resp: ExportPromptsResponse) -> Self {
        Self {
            filename: resp.filename,
            payload: resp.payload,
            json: resp.json,
        }
    }
}

// ============================================================================
// Removal word DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddRemovalWordRequest {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct RemovalWordsDto {
    pub words: Vec<String>,
}

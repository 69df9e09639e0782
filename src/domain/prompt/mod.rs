//! Prompt - 图片提示词处理
//!
//! 右侧面板：提示词文本 → 场景块 / `### 장면 N` → 合并 → 提示词表 / JSON 导出

mod blocks;
mod export;
mod markdown;
mod merge;
mod protagonist;
mod removal;
mod sections;
mod table;

use serde::Serialize;

use crate::domain::scene_label::SceneLabel;

pub use blocks::{extract_prompt, parse_scene_blocks, SceneBlock};
pub use export::{
    build_export, export_filename, filename_sentence, ExportItem, ExportPayload, EXPORT_VERSION,
};
pub use markdown::parse_markdown_scene_prompts;
pub use merge::{
    classic_scene_prompts, markdown_scene_prompts, merge_scene_prompts, resolved_rows,
    ScenePromptMap,
};
pub use protagonist::extract_protagonist_prompt;
pub use removal::{RemovalFilter, RemovalWordSet};
pub use sections::{
    count_section_prompts, find_scene_tokens, find_section_tokens, SceneToken, SectionToken,
};
pub use table::{build_prompt_table, resolve_scene_prompts, PromptRow, PromptTable, PROTAGONIST_LABEL};

/// 一个场景的提示词
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenePrompt {
    pub label: SceneLabel,
    pub prompt: String,
}

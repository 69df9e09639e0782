//! Prompt Export - 提示词 JSON 导出
//!
//! 导出结构：
//! ```json
//! {
//!   "version": 1,
//!   "exported_at": "2026-10-16",
//!   "count": 2,
//!   "items": [
//!     { "id": "001", "prompt": "...", "suggested_filenames": ["001.jpg", "001.png"] }
//!   ]
//! }
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::blocks::{extract_prompt, parse_scene_blocks};
use super::removal::RemovalFilter;
use crate::domain::script::clean_prompt_text;

/// 导出格式版本
pub const EXPORT_VERSION: u32 = 1;

/// 文件名中首句最多保留的字符数
const FILENAME_SENTENCE_CHARS: usize = 10;

/// Windows 文件名不允许的字符
const FILENAME_FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportItem {
    pub id: String,
    pub prompt: String,
    pub suggested_filenames: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub version: u32,
    pub exported_at: String,
    pub count: usize,
    pub items: Vec<ExportItem>,
}

impl ExportPayload {
    /// 两空格缩进的 JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 从提示词文本构建导出内容
///
/// 只看 `[장면 NNN]` 块：每块提取提示词、删除词过滤，空的丢弃，
/// 按场景编号稳定排序（同号的块都保留）。
pub fn build_export(prompt_raw: &str, filter: &RemovalFilter, date: NaiveDate) -> ExportPayload {
    let cleaned = clean_prompt_text(prompt_raw);
    let mut blocks: Vec<_> = parse_scene_blocks(&cleaned)
        .into_iter()
        .filter_map(|block| {
            let prompt = filter.apply(extract_prompt(&block.body).trim());
            let prompt = prompt.trim();
            (!prompt.is_empty()).then(|| (block.label, prompt.to_string()))
        })
        .collect();
    blocks.sort_by_key(|(label, _)| *label);

    let items: Vec<ExportItem> = blocks
        .into_iter()
        .map(|(label, prompt)| {
            let id = label.id();
            ExportItem {
                suggested_filenames: vec![format!("{}.jpg", id), format!("{}.png", id)],
                id,
                prompt,
            }
        })
        .collect();

    ExportPayload {
        version: EXPORT_VERSION,
        exported_at: date.format("%Y-%m-%d").to_string(),
        count: items.len(),
        items,
    }
}

/// 脚本第一句（第一行非空行）做文件名片段
///
/// 去掉文件名非法字符、合并空白，超过 10 个字符截断并加 `...`，
/// 为空时用 `untitled`。
pub fn filename_sentence(script: &str) -> String {
    let first = script
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    let cleaned: String = first.chars().filter(|c| !FILENAME_FORBIDDEN.contains(c)).collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return "untitled".to_string();
    }
    if collapsed.chars().count() > FILENAME_SENTENCE_CHARS {
        let head: String = collapsed.chars().take(FILENAME_SENTENCE_CHARS).collect();
        format!("{}...", head)
    } else {
        collapsed
    }
}

/// 导出文件名：`[MM-DD] ／ [HH:MM:SS] <首句>.json`
pub fn export_filename(upload_date: NaiveDate, now: NaiveTime, script: &str) -> String {
    format!(
        "[{}] ／ [{}] {}.json",
        upload_date.format("%m-%d"),
        now.format("%H:%M:%S"),
        filename_sentence(script)
    )
}

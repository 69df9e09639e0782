//! Script - 脚本文本处理
//!
//! 左侧面板：脚本 → 规范化 → 清理 → 卡片

mod chunker;
mod normalizer;
mod sanitizer;
mod sentence;

pub use chunker::{
    chunk_cards, format_read_duration, prepare_script, read_seconds, split_script_cards,
    start_offset, strip_double_quotes, Card, CardChunks, CardConfig, DEFAULT_CARD_LIMIT,
    DEFAULT_HOOK_ANCHOR, DEFAULT_READ_SPEED_CPM,
};
pub use normalizer::{normalize_scene_headers, HeaderRule, HEADER_RULES};
pub use sanitizer::{clip_before_image_prompt, normalize_newlines, sanitize_lines};
pub(crate) use sanitizer::is_rule_line;
pub use sentence::{cut_point, sentence_end_offsets, SentenceEnd, SentenceEnds};

/// 提示词侧的清理：先规范化标题，再清理行
pub fn clean_prompt_text(text: &str) -> String {
    sanitize_lines(&normalize_scene_headers(text))
}

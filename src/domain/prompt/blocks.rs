//! Scene Block Parser - 场景块解析
//!
//! 以规范标题 `[장면 NNN]` 为分隔把提示词文本切成场景块，
//! 再从每块正文里取出真正的图片提示词。

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::domain::scene_label::SceneLabel;

/// 标题行：`[장면 N` 后紧跟 `]` 或 `:`
static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*(?:\]|:)").expect("block header pattern")
});

/// 块首残留的 `**[장면 ...]**`
static BOLD_BLOCK_REMNANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*\[장면[^\]]*\]\*\*\s*").expect("bold remnant pattern")
});

/// 图片提示词固定开头
const PROMPT_LEAD: &str = "korean drama still photo";

/// 一个场景块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneBlock {
    pub label: SceneLabel,
    pub body: String,
}

/// 解析场景块
///
/// 输入应是规范化并清理过的文本。第一个标题之前的内容丢弃，
/// 正文为空的块丢弃；没有任何标题时返回空列表。
pub fn parse_scene_blocks(text: &str) -> Vec<SceneBlock> {
    let mut blocks: Vec<(SceneLabel, Vec<&str>)> = Vec::new();

    for line in text.split('\n') {
        let header = BLOCK_HEADER
            .captures(line)
            .and_then(|caps| Some((caps.get(0)?, SceneLabel::from_digits(&caps[1])?)));

        match header {
            Some((whole, label)) => {
                let mut body = Vec::new();
                let suffix = line[whole.end()..].trim();
                if !suffix.is_empty() {
                    body.push(suffix);
                }
                blocks.push((label, body));
            }
            None => {
                if let Some((_, body)) = blocks.last_mut() {
                    // 标题后的空行跳过，正文开始后原样保留
                    if !line.trim().is_empty() || !body.is_empty() {
                        body.push(line);
                    }
                }
            }
        }
    }

    blocks
        .into_iter()
        .map(|(label, body)| SceneBlock {
            label,
            body: body.join("\n").trim().to_string(),
        })
        .filter(|block| !block.body.is_empty())
        .collect()
}

/// ASCII 大小写不敏感查找
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// 提示词段落的结束位置（相对 `text` 的字节偏移）
///
/// 以下位置之一为止：空行、换行后接粗体标题、换行后接 `##`、文本末尾。
fn payload_end(text: &str) -> usize {
    for (nl, _) in text.match_indices('\n') {
        let after = &text[nl + 1..];
        let bold_heading = after.starts_with("**[장면")
            || after
                .strip_prefix("**")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c != '[');
        if after.starts_with('\n') || after.starts_with("##") || bold_heading {
            return nl;
        }
    }
    text.len()
}

/// 从块正文中取出图片提示词
///
/// 依次尝试：
/// 1. 从 `Korean drama still photo` 开始的段落
/// 2. 第一个冒号之后的全部内容
/// 3. 整个正文
pub fn extract_prompt(body: &str) -> String {
    let trimmed = body.trim();
    let src = BOLD_BLOCK_REMNANT.replace(trimmed, "");
    let src = src.trim();

    if let Some(start) = find_ignore_ascii_case(src, PROMPT_LEAD) {
        let payload = &src[start..];
        return payload[..payload_end(payload)].trim().to_string();
    }

    if let Some(colon) = src.find(':') {
        return src[colon + 1..].trim().to_string();
    }

    src.to_string()
}

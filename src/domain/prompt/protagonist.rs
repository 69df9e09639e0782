//! Protagonist Prompt Extractor - 主角提示词提取

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::script::{is_rule_line, normalize_newlines};

/// 主角提示词标题：`##`/`###` 标题里先出现 `주인공` 再出现 `프롬프트`
static PROTAGONIST_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*#{2,3}.*주인공.*프롬프트").expect("protagonist heading pattern")
});

/// 任意 `##`/`###` 标题（正文结束位置）
static NEXT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*#{2,3}[ \t]+").expect("next heading pattern"));

/// 与提示词同行的粗体标签：`**민지 - 주인공**`
static INLINE_BOLD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*[^\n*]*주인공[ \t]*\*\*[ \t]*[:：\-–—]?[ \t]*").expect("inline bold label pattern")
});

/// 与提示词同行的普通标签：`민지 - 주인공:`
static INLINE_DASH_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\n]{0,40}?[-–—][ \t]*주인공[ \t]*[:：]?[ \t]+").expect("inline dash label pattern")
});

/// 开头的冒号前缀：`주인공:` / `Prompt:`
static COLON_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:,.\n]{1,80}:[ \t]*").expect("colon prefix pattern"));

/// 去掉整行粗体包裹
fn unwrap_bold(line: &str) -> &str {
    line.strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(line)
}

/// 只写名字/身份、以 `주인공` 结尾的标签行
fn is_label_line(line: &str) -> bool {
    let core = line.trim_end_matches(|c: char| c == ':' || c == '：' || c == '*' || c.is_whitespace());
    core.ends_with("주인공")
}

/// 同行标签后面必须还有内容才去掉
fn strip_inline_label<'a>(text: &'a str, pattern: &Regex) -> &'a str {
    match pattern.find(text) {
        Some(m) if !text[m.end()..].trim().is_empty() => &text[m.end()..],
        _ => text,
    }
}

/// 提取主角提示词
///
/// 找到主角标题后，取到下一个 `##`/`###` 标题为止的正文：
/// 去掉粗体包裹和水平线，跳过开头的空行和标签行，再去掉同行标签与冒号前缀。
/// 找不到标题或正文为空时返回空串。
pub fn extract_protagonist_prompt(raw: &str) -> String {
    let text = normalize_newlines(raw);
    let mut lines = text.split('\n');

    if !lines.by_ref().any(|line| PROTAGONIST_HEADING.is_match(line)) {
        return String::new();
    }

    let body: Vec<&str> = lines
        .take_while(|line| !NEXT_HEADING.is_match(line))
        .filter(|line| !is_rule_line(line))
        .map(|line| unwrap_bold(line.trim()).trim())
        .skip_while(|line| line.is_empty() || is_label_line(line))
        .collect();

    let joined = body.join("\n");
    let text = joined.trim();
    let text = strip_inline_label(text, &INLINE_BOLD_LABEL);
    let text = strip_inline_label(text, &INLINE_DASH_LABEL);
    let text = strip_inline_label(text, &COLON_PREFIX);
    text.trim().to_string()
}

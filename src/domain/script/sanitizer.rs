//! Line Sanitizer - 行清理
//!
//! 删除 markdown 标题行与水平分隔线，删除处保留一个空行，
//! 避免把前后两个段落粘在一起。

use regex::Regex;
use std::sync::LazyLock;

/// `## 🎨 이미지 프롬프트` 标题：脚本卡片只取这一行之前的内容
static IMAGE_PROMPT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*##[ \t]*🎨[ \t]*이미지[ \t]*프롬프트.*$")
        .expect("image prompt heading pattern")
});

/// 统一换行符为 `\n`（`\r\n` 与单独的 `\r` 都算一次换行）
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 是否为 markdown 标题行（任意前导空白后以 `#` 开头）
#[inline]
fn is_heading_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// 是否为 3 个以上 `-` 组成的水平线
#[inline]
pub(crate) fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// 删除满足条件的行，连续删除只留一个空行
pub(crate) fn drop_lines<F>(text: &str, should_drop: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut out: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if should_drop(line) {
            if out.last().map_or(true, |last| !last.is_empty()) {
                out.push("");
            }
        } else {
            out.push(line);
        }
    }
    out.join("\n")
}

/// 把 3 个及以上连续换行压缩为 2 个（即最多一个空行）
pub(crate) fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}

/// 清理行
///
/// 1. 标题行（`#` 开头）和水平线（`---`）替换为空行，连续删除只留一个
/// 2. 连续空行最多保留一个
/// 3. 去掉首尾空行
pub fn sanitize_lines(text: &str) -> String {
    let text = normalize_newlines(text);
    let dropped = drop_lines(&text, |line| is_heading_line(line) || is_rule_line(line));
    collapse_blank_runs(&dropped)
        .trim_matches('\n')
        .to_string()
}

/// 截掉 `## 🎨 이미지 프롬프트` 标题及其之后的内容
///
/// 找不到标题时原样返回。
pub fn clip_before_image_prompt(text: &str) -> &str {
    match IMAGE_PROMPT_HEADING.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_heading_and_rule_removed() {
        let input = "# Title\n\nHello\n---\nWorld\n";
        assert_eq!(sanitize_lines(input), "Hello\n\nWorld");
    }

    #[test]
    fn test_consecutive_deletions_leave_single_blank() {
        let input = "첫 문단\n## 제목\n### 소제목\n-----\n둘째 문단";
        assert_eq!(sanitize_lines(input), "첫 문단\n\n둘째 문단");
    }

    #[test]
    fn test_indented_heading_removed() {
        let input = "앞\n   # 들여쓴 제목\n뒤";
        assert_eq!(sanitize_lines(input), "앞\n\n뒤");
    }

    #[test]
    fn test_short_dash_line_kept() {
        let input = "앞\n--\n뒤";
        assert_eq!(sanitize_lines(input), "앞\n--\n뒤");
    }

    #[test]
    fn test_crlf_normalized() {
        let input = "하나\r\n# 제목\r\n둘\r\n";
        assert_eq!(sanitize_lines(input), "하나\n\n둘");
    }

    #[test]
    fn test_lone_carriage_returns_normalized() {
        assert_eq!(normalize_newlines("a\rb\r\r\nc"), "a\nb\n\nc");
        let once = sanitize_lines("-\r\r\n가");
        assert!(!once.contains('\r'));
        assert_eq!(sanitize_lines(&once), once);
    }

    #[test]
    fn test_blank_runs_collapsed() {
        assert_eq!(sanitize_lines("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_clip_before_image_prompt() {
        let input = "대본 본문.\n\n## 🎨 이미지 프롬프트\n[장면 1] 프롬프트";
        assert_eq!(clip_before_image_prompt(input), "대본 본문.\n\n");
    }

    #[test]
    fn test_clip_without_heading_is_identity() {
        let input = "대본 본문만 있음.";
        assert_eq!(clip_before_image_prompt(input), input);
    }

    proptest! {
        #[test]
        fn prop_sanitize_idempotent(s in "[#\\- a가\n\r]{0,60}") {
            let once = sanitize_lines(&s);
            prop_assert_eq!(sanitize_lines(&once), once.clone());
            prop_assert!(!once.contains("\n\n\n"));
            prop_assert!(!once.starts_with('\n'));
            prop_assert!(!once.ends_with('\n'));
        }
    }
}

//! Markdown Scene-Prompt Extractor - `### 장면 N` 写法
//!
//! 直接作用于原始文本（不经过规范化），因为这种写法携带段落边界信息。

use regex::Regex;
use std::sync::LazyLock;

use super::ScenePrompt;
use crate::domain::scene_label::SceneLabel;
use crate::domain::script::normalize_newlines;

/// `### 장면 N`，后面可跟 `:` / `-` / `–` / `—` 及任意标题文字
static SCENE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^###[ \t]*장면[ \t]*([0-9]{1,3})(?:[^0-9\n].*)?$")
        .expect("markdown scene heading pattern")
});

/// 正文结束边界：下一个场景标题（`###장면 N` 不带空格也算）、`###` / `##` 标题或水平线
static BODY_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^(?:###[ \t]*장면[ \t]*[0-9]{1,3}|###\s|##\s|[ \t]*-{3,}[ \t]*$)")
        .expect("markdown boundary pattern")
});

/// 提取 `### 장면 N` 标题下的提示词
///
/// 正文从标题下一行开始，到下一个 `###` 标题、`##` 标题或 `---` 为止。
/// 正文为空的场景不输出。
pub fn parse_markdown_scene_prompts(raw: &str) -> Vec<ScenePrompt> {
    let text = normalize_newlines(raw);
    let mut prompts = Vec::new();

    for caps in SCENE_HEADING.captures_iter(&text) {
        let Some(label) = SceneLabel::from_digits(&caps[1]) else {
            continue;
        };
        let Some(heading) = caps.get(0) else {
            continue;
        };

        let start = text[heading.end()..]
            .find('\n')
            .map_or(text.len(), |nl| heading.end() + nl + 1);
        let rest = &text[start..];
        let end = BODY_BOUNDARY
            .find(rest)
            .map_or(text.len(), |m| start + m.start());

        let body = text[start..end].trim();
        if !body.is_empty() {
            prompts.push(ScenePrompt {
                label,
                prompt: body.to_string(),
            });
        }
    }

    prompts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_and_prompts(prompts: &[ScenePrompt]) -> Vec<(String, &str)> {
        prompts
            .iter()
            .map(|p| (p.label.to_string(), p.prompt.as_str()))
            .collect()
    }

    #[test]
    fn test_headings_with_separators() {
        let raw = "### 장면 1: 새벽\n첫 프롬프트\n\n### 장면 2 - 낮\n둘째 프롬프트\n### 장면 3 — 밤\n셋째";
        assert_eq!(
            labels_and_prompts(&parse_markdown_scene_prompts(raw)),
            vec![
                ("장면 001".to_string(), "첫 프롬프트"),
                ("장면 002".to_string(), "둘째 프롬프트"),
                ("장면 003".to_string(), "셋째"),
            ]
        );
    }

    #[test]
    fn test_body_stops_at_other_headings_and_rules() {
        let raw = "### 장면 4\n본문 A\n---\n버려짐\n### 장면 5\n본문 B\n## 2장\n버려짐\n### 장면 6\n본문 C\n### 메모\n버려짐";
        assert_eq!(
            labels_and_prompts(&parse_markdown_scene_prompts(raw)),
            vec![
                ("장면 004".to_string(), "본문 A"),
                ("장면 005".to_string(), "본문 B"),
                ("장면 006".to_string(), "본문 C"),
            ]
        );
    }

    #[test]
    fn test_body_stops_at_unspaced_scene_heading() {
        let raw = "### 장면 1\nfirst prompt\n###장면 2\nsecond prompt";
        assert_eq!(
            labels_and_prompts(&parse_markdown_scene_prompts(raw)),
            vec![
                ("장면 001".to_string(), "first prompt"),
                ("장면 002".to_string(), "second prompt"),
            ]
        );
    }

    #[test]
    fn test_empty_body_skipped() {
        let raw = "### 장면 1\n### 장면 2\n내용";
        let prompts = parse_markdown_scene_prompts(raw);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].label.number(), 2);
    }

    #[test]
    fn test_heading_at_end_of_text() {
        assert!(parse_markdown_scene_prompts("### 장면 9").is_empty());
    }

    #[test]
    fn test_four_digits_not_a_scene() {
        assert!(parse_markdown_scene_prompts("### 장면 1234\n본문").is_empty());
    }

    #[test]
    fn test_bracket_headings_ignored() {
        assert!(parse_markdown_scene_prompts("[장면 1]\n본문").is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let prompts = parse_markdown_scene_prompts("### 장면 7:\r\n비 오는 밤\r\n");
        assert_eq!(prompts[0].prompt, "비 오는 밤");
    }
}

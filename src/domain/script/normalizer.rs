//! Scene-Header Normalizer - 场景标题规范化
//!
//! 各种场景标题写法统一改写为 `[장면 0NN]`。
//! 规则按固定优先级依次作用于全文，每条规则只匹配单行内的内容。

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::sanitizer::{collapse_blank_runs, drop_lines, normalize_newlines};
use crate::domain::scene_label::SceneLabel;

/// 单条标题改写规则
pub struct HeaderRule {
    pub name: &'static str,
    pattern: Regex,
    /// 同一行还有正文时，规范标题后另起一行（粗体写法的尾随文字作为正文开头）
    break_after: bool,
}

impl HeaderRule {
    fn new(name: &'static str, pattern: &str, break_after: bool) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("scene header rule pattern"),
            break_after,
        }
    }

    /// 对全文执行本规则
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let header = SceneLabel::from_digits(&caps[1])
                    .map(|label| label.header())
                    .unwrap_or_else(|| caps[0].to_string());
                let end = caps.get(0).map_or(text.len(), |m| m.end());
                let rest_of_line = text[end..].split('\n').next().unwrap_or_default();
                if self.break_after && !rest_of_line.trim().is_empty() {
                    format!("{}\n", header)
                } else {
                    header
                }
            })
            .into_owned()
    }
}

/// 标题规则，按优先级排列
pub static HEADER_RULES: LazyLock<Vec<HeaderRule>> = LazyLock::new(|| {
    vec![
        // [장면 n: ...]
        HeaderRule::new(
            "bracket-colon-closed",
            r"\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*:[^\]\n]*\]",
            false,
        ),
        // [장면 n: ...  缺少右括号，吃到行尾
        HeaderRule::new(
            "bracket-colon-open",
            r"\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*:[^\n]*",
            false,
        ),
        // [장면 n]
        HeaderRule::new("bracket", r"\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*\]", false),
        // **장면 n** / **장면 n:**
        HeaderRule::new(
            "bold",
            r"\*\*[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*:?[ \t]*\*\*",
            true,
        ),
        // 行首 ### [장면 n] ...
        HeaderRule::new(
            "h3-bracket",
            r"(?m)^[ \t]*###[ \t]*\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*\][^\n]*",
            false,
        ),
    ]
});

/// `## 1장.` 之类的章节行
#[inline]
fn is_chapter_line(line: &str) -> bool {
    static CHAPTER_LINE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^##[ \t]*[0-9]+[ \t]*장\.").expect("chapter line pattern")
    });
    CHAPTER_LINE.is_match(line)
}

/// 规范化场景标题
///
/// 多次执行结果不变：`normalize(normalize(s)) == normalize(s)`。
pub fn normalize_scene_headers(text: &str) -> String {
    let mut text = normalize_newlines(text);
    for rule in HEADER_RULES.iter() {
        text = rule.apply(&text);
    }
    // 章节行放在最后删除：粗体规则插入的换行可能让章节行落到行首
    collapse_blank_runs(&drop_lines(&text, is_chapter_line))
}

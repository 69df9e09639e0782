//! Section/Scene Token Locator - 段落与场景标题定位
//!
//! 在原始提示词文本里找出章节段落标题和场景标题的位置，
//! 用于把场景归到段落下并统计每段的提示词数量。

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;

use crate::domain::scene_label::SceneLabel;

/// `##` / `###` 标题行
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#{2,3}[ \t]*([^#\n].*)$").expect("heading line pattern")
});

/// `이미지 프롬프트` / `장면별 이미지 프롬프트`
static IMAGE_PROMPT_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:장면별[ \t]*)?이미지[ \t]*프롬프트").expect("image prompt phrase pattern")
});

/// 章节记号 `<数字>장`
static CHAPTER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3})[ \t]*장\b").expect("chapter token pattern"));

/// 场景标题的三种写法
static BOLD_SCENE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*:?[ \t]*\*\*").expect("bold scene pattern")
});
static BRACKET_SCENE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[ \t]*장면[ \t]*([0-9]{1,3})[ \t]*(?:\]|:)").expect("bracket scene pattern")
});
static H3_SCENE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^###[ \t]*장면[ \t]*([0-9]{1,3})(?:[^0-9\n].*)?$").expect("h3 scene pattern")
});

/// 段落标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionToken {
    /// 标题在原文中的字节偏移
    pub index: usize,
    pub title: String,
    /// 本段内有提示词的场景数
    pub count: usize,
}

impl SectionToken {
    pub fn separator_label(&self) -> String {
        separator_label(&self.title, self.count)
    }
}

/// 分隔行文字：`🎬 1장 / 프롬프트 3개`
pub fn separator_label(title: &str, count: usize) -> String {
    format!("🎬 {} / 프롬프트 {}개", title, count)
}

/// 场景标题位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneToken {
    pub index: usize,
    pub label: SceneLabel,
}

fn chapter_title(text: &str) -> Option<String> {
    CHAPTER_TOKEN
        .captures(text)
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .map(|n| format!("{}장", n))
}

/// 没有章节记号时，取 `이미지 프롬프트` 之前的标题文字
fn phrase_title(heading: &str, phrase_start: usize) -> String {
    let title = heading[..phrase_start]
        .trim()
        .trim_start_matches('🎬')
        .trim();
    if title.is_empty() {
        "이미지 프롬프트".to_string()
    } else {
        title.to_string()
    }
}

/// 找出所有段落标题（按偏移升序，`count` 为 0）
///
/// 两类标题算段落：
/// - 含 `이미지 프롬프트` 的标题（主角标题除外）
/// - 含 `<数字>장` 章节记号的其他标题
///
/// `### 장면 N` 场景标题本身不算段落，否则该场景会落在自己段落之外。
pub fn find_section_tokens(raw: &str) -> Vec<SectionToken> {
    let mut sections = Vec::new();
    for caps in HEADING_LINE.captures_iter(raw) {
        let (Some(line), Some(heading)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let heading_text = heading.as_str();
        if H3_SCENE.is_match(line.as_str().trim_start()) {
            continue;
        }

        let title = match IMAGE_PROMPT_PHRASE.find(heading_text) {
            Some(_) if heading_text.contains("주인공") => continue,
            Some(phrase) => {
                chapter_title(heading_text).unwrap_or_else(|| phrase_title(heading_text, phrase.start()))
            }
            None => match chapter_title(heading_text) {
                Some(title) => title,
                None => continue,
            },
        };

        sections.push(SectionToken {
            index: line.start(),
            title,
            count: 0,
        });
    }
    sections
}

/// 找出所有场景标题位置（按偏移升序，同一偏移只保留一个）
pub fn find_scene_tokens(raw: &str) -> Vec<SceneToken> {
    let mut by_index: BTreeMap<usize, SceneLabel> = BTreeMap::new();
    for pattern in [&*BOLD_SCENE, &*BRACKET_SCENE, &*H3_SCENE] {
        for caps in pattern.captures_iter(raw) {
            let (Some(whole), Some(label)) = (caps.get(0), SceneLabel::from_digits(&caps[1])) else {
                continue;
            };
            by_index.entry(whole.start()).or_insert(label);
        }
    }
    by_index
        .into_iter()
        .map(|(index, label)| SceneToken { index, label })
        .collect()
}

/// 统计每个段落内有提示词的场景数
///
/// 场景标题偏移严格位于本段标题与下一段标题之间（最后一段到文本末尾），
/// 同一标签只计一次。
pub fn count_section_prompts(
    sections: &mut [SectionToken],
    scenes: &[SceneToken],
    resolved: &HashSet<SceneLabel>,
) {
    let bounds: Vec<usize> = sections
        .iter()
        .skip(1)
        .map(|s| s.index)
        .chain(std::iter::once(usize::MAX))
        .collect();

    for (section, next_index) in sections.iter_mut().zip(bounds) {
        let labels: BTreeSet<SceneLabel> = scenes
            .iter()
            .filter(|t| t.index > section.index && t.index < next_index)
            .filter(|t| resolved.contains(&t.label))
            .map(|t| t.label)
            .collect();
        section.count = labels.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## 👤 주인공 이미지 프롬프트
민지 설명

## 🎬 훅 장면 이미지 프롬프트:
**장면 1**
hook prompt

## 🎬 1장 장면별 이미지 프롬프트
[장면 2] first
### 장면 3: 골목
third

### 2장 위기
[장면 4: 비] fourth
";

    fn label(n: u32) -> SceneLabel {
        SceneLabel::new(n).unwrap()
    }

    #[test]
    fn test_sections_found_in_order() {
        let titles: Vec<String> = find_section_tokens(SAMPLE)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["훅 장면", "1장", "2장"]);
    }

    #[test]
    fn test_protagonist_heading_is_not_a_section() {
        let sections = find_section_tokens("## 주인공 이미지 프롬프트\n내용");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_protagonist_word_in_chapter_heading_is_a_section() {
        let titles: Vec<String> = find_section_tokens("## 3장 주인공의 선택\n[장면 1] x")
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["3장"]);
    }

    #[test]
    fn test_plain_headings_ignored() {
        assert!(find_section_tokens("## 메모\n### 장면 1: 1장 회상\n내용").is_empty());
    }

    #[test]
    fn test_scene_tokens_from_all_conventions() {
        let numbers: Vec<u16> = find_scene_tokens(SAMPLE)
            .into_iter()
            .map(|t| t.label.number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_counts_only_resolved_scenes_per_section() {
        let mut sections = find_section_tokens(SAMPLE);
        let scenes = find_scene_tokens(SAMPLE);
        let resolved: HashSet<SceneLabel> = [label(1), label(2), label(4)].into_iter().collect();
        count_section_prompts(&mut sections, &scenes, &resolved);
        let counts: Vec<usize> = sections.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);
        assert_eq!(sections[1].separator_label(), "🎬 1장 / 프롬프트 1개");
    }

    #[test]
    fn test_duplicate_labels_counted_once() {
        let raw = "## 1장 이미지 프롬프트\n[장면 1] a\n**장면 1**\nb";
        let mut sections = find_section_tokens(raw);
        let scenes = find_scene_tokens(raw);
        let resolved: HashSet<SceneLabel> = [label(1)].into_iter().collect();
        count_section_prompts(&mut sections, &scenes, &resolved);
        assert_eq!(sections[0].count, 1);
    }
}

//! Prompt Table Assembly - 提示词表组装
//!
//! 把主角提示词、段落分隔行和场景提示词按原文顺序排成一张表。

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::blocks::parse_scene_blocks;
use super::markdown::parse_markdown_scene_prompts;
use super::merge::{classic_scene_prompts, markdown_scene_prompts, merge_scene_prompts, resolved_rows};
use super::protagonist::extract_protagonist_prompt;
use super::removal::RemovalFilter;
use super::sections::{
    count_section_prompts, find_scene_tokens, find_section_tokens, separator_label, SceneToken,
    SectionToken,
};
use super::ScenePrompt;
use crate::domain::scene_label::SceneLabel;
use crate::domain::script::clean_prompt_text;

/// 主角行的标签
pub const PROTAGONIST_LABEL: &str = "주인공";

/// 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromptRow {
    Protagonist { prompt: String },
    Section { title: String, count: usize },
    Scene { label: SceneLabel, prompt: String },
}

impl PromptRow {
    /// 行标签（分隔行为整行文字）
    pub fn label(&self) -> String {
        match self {
            PromptRow::Protagonist { .. } => PROTAGONIST_LABEL.to_string(),
            PromptRow::Section { title, count } => separator_label(title, *count),
            PromptRow::Scene { label, .. } => label.to_string(),
        }
    }

    /// 可复制的提示词，分隔行没有
    pub fn prompt(&self) -> Option<&str> {
        match self {
            PromptRow::Protagonist { prompt } | PromptRow::Scene { prompt, .. } => Some(prompt),
            PromptRow::Section { .. } => None,
        }
    }
}

/// 提示词表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptTable {
    pub rows: Vec<PromptRow>,
}

impl PromptTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 场景行数量
    pub fn scene_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, PromptRow::Scene { .. }))
            .count()
    }
}

/// 按场景编号取出提示词（两种写法合并、删除词过滤后，空提示词去掉）
pub fn resolve_scene_prompts(raw: &str, filter: &RemovalFilter) -> Vec<ScenePrompt> {
    let cleaned = clean_prompt_text(raw);
    let classic = classic_scene_prompts(&parse_scene_blocks(&cleaned));
    let markdown = markdown_scene_prompts(parse_markdown_scene_prompts(raw));

    resolved_rows(merge_scene_prompts(classic, markdown))
        .into_iter()
        .map(|p| ScenePrompt {
            prompt: filter.apply(&p.prompt),
            label: p.label,
        })
        .filter(|p| !p.prompt.trim().is_empty())
        .collect()
}

/// 原文中的位置记号
enum Anchor {
    Section(usize),
    Scene(SceneLabel),
}

/// 组装提示词表
///
/// 1. 有主角提示词时放在第一行
/// 2. 段落标题和场景标题按原文位置排序，段落变成分隔行，
///    场景只在第一次出现且有提示词时输出
/// 3. 按位置没有输出任何场景时，退回为按编号升序列出全部场景
pub fn build_prompt_table(raw: &str, filter: &RemovalFilter) -> PromptTable {
    let resolved = resolve_scene_prompts(raw, filter);
    let resolved_labels: HashSet<SceneLabel> = resolved.iter().map(|p| p.label).collect();

    let protagonist = filter.apply(&extract_protagonist_prompt(raw));
    let mut sections = find_section_tokens(raw);
    let scenes = find_scene_tokens(raw);
    count_section_prompts(&mut sections, &scenes, &resolved_labels);

    PromptTable {
        rows: assemble_rows(&protagonist, &sections, &scenes, resolved),
    }
}

fn assemble_rows(
    protagonist: &str,
    sections: &[SectionToken],
    scenes: &[SceneToken],
    resolved: Vec<ScenePrompt>,
) -> Vec<PromptRow> {
    let mut rows = Vec::new();
    if !protagonist.trim().is_empty() {
        rows.push(PromptRow::Protagonist {
            prompt: protagonist.to_string(),
        });
    }

    let by_label: HashMap<SceneLabel, &str> = resolved
        .iter()
        .map(|p| (p.label, p.prompt.as_str()))
        .collect();

    // 同一偏移时段落在前
    let mut anchors: Vec<(usize, Anchor)> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.index, Anchor::Section(i)))
        .chain(scenes.iter().map(|t| (t.index, Anchor::Scene(t.label))))
        .collect();
    anchors.sort_by_key(|(index, _)| *index);

    let mut emitted: HashSet<SceneLabel> = HashSet::new();
    for (_, anchor) in anchors {
        match anchor {
            Anchor::Section(i) => {
                let section = &sections[i];
                rows.push(PromptRow::Section {
                    title: section.title.clone(),
                    count: section.count,
                });
            }
            Anchor::Scene(label) => {
                let Some(prompt) = by_label.get(&label) else {
                    continue;
                };
                if emitted.insert(label) {
                    rows.push(PromptRow::Scene {
                        label,
                        prompt: prompt.to_string(),
                    });
                }
            }
        }
    }

    if emitted.is_empty() {
        rows.extend(resolved.iter().map(|p| PromptRow::Scene {
            label: p.label,
            prompt: p.prompt.clone(),
        }));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::removal::RemovalWordSet;

    const SAMPLE: &str = "\
## 👤 주인공 이미지 프롬프트
**민지 - 주인공**
Korean drama still photo, a woman in her 30s, cinematic

## 🎬 1장 장면별 이미지 프롬프트
[장면 1] 프롬프트: Korean drama still photo, bus stop at dawn
[장면 2] 프롬프트: Korean drama still photo, rainy alley

## 🎬 2장 장면별 이미지 프롬프트
### 장면 3: 옥상
Korean drama still photo, rooftop at night, cinematic
";

    fn labels(table: &PromptTable) -> Vec<String> {
        table.rows.iter().map(PromptRow::label).collect()
    }

    #[test]
    fn test_table_interleaves_sections_and_scenes() {
        let table = build_prompt_table(SAMPLE, &RemovalFilter::noop());
        assert_eq!(
            labels(&table),
            vec![
                "주인공",
                "🎬 1장 / 프롬프트 2개",
                "장면 001",
                "장면 002",
                "🎬 2장 / 프롬프트 1개",
                "장면 003",
            ]
        );
        assert_eq!(table.scene_count(), 3);
        assert_eq!(
            table.rows[2].prompt(),
            Some("Korean drama still photo, bus stop at dawn")
        );
        assert_eq!(table.rows[1].prompt(), None);
    }

    #[test]
    fn test_removal_filter_applied_to_all_rows() {
        let filter = RemovalWordSet::from_words([", cinematic"]).filter();
        let table = build_prompt_table(SAMPLE, &filter);
        assert_eq!(
            table.rows[0].prompt(),
            Some("Korean drama still photo, a woman in her 30s")
        );
        assert_eq!(
            table.rows.last().and_then(PromptRow::prompt),
            Some("Korean drama still photo, rooftop at night")
        );
    }

    #[test]
    fn test_scenes_follow_document_order() {
        let table = build_prompt_table("**장면 2**\nsecond\n**장면 1**\nfirst", &RemovalFilter::noop());
        assert_eq!(labels(&table), vec!["장면 002", "장면 001"]);
    }

    #[test]
    fn test_fallback_without_positions() {
        let resolved = vec![
            ScenePrompt {
                label: SceneLabel::new(1).unwrap(),
                prompt: "first".to_string(),
            },
            ScenePrompt {
                label: SceneLabel::new(2).unwrap(),
                prompt: "second".to_string(),
            },
        ];
        let sections = vec![SectionToken {
            index: 0,
            title: "1장".to_string(),
            count: 0,
        }];
        let rows = assemble_rows("", &sections, &[], resolved);
        let labels: Vec<String> = rows.iter().map(PromptRow::label).collect();
        assert_eq!(labels, vec!["🎬 1장 / 프롬프트 0개", "장면 001", "장면 002"]);
    }

    #[test]
    fn test_markdown_heading_overrides_bracket_body() {
        let raw = "[장면 1] 프롬프트: classic\n\n### 장면 1: 제목\nmarkdown body";
        let resolved = resolve_scene_prompts(raw, &RemovalFilter::noop());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].prompt, "markdown body");
    }

    #[test]
    fn test_scene_emitted_once() {
        let raw = "[장면 1] a: one\n[장면 1] b: two";
        let table = build_prompt_table(raw, &RemovalFilter::noop());
        assert_eq!(table.scene_count(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_prompt_table("", &RemovalFilter::noop()).is_empty());
        assert!(build_prompt_table("그냥 메모", &RemovalFilter::noop()).is_empty());
    }
}

//! Scene Prompt Merge - 两种场景写法的合并
//!
//! 方括号/粗体写法先填入，`### 장면 N` 写法按场景编号覆盖。

use std::collections::BTreeMap;

use super::blocks::{extract_prompt, SceneBlock};
use super::ScenePrompt;
use crate::domain::scene_label::SceneLabel;

/// 按场景编号索引的提示词表
pub type ScenePromptMap = BTreeMap<SceneLabel, ScenePrompt>;

/// 场景块 → 提示词（每块正文经过提示词提取）
pub fn classic_scene_prompts(blocks: &[SceneBlock]) -> ScenePromptMap {
    blocks
        .iter()
        .map(|block| {
            (
                block.label,
                ScenePrompt {
                    label: block.label,
                    prompt: extract_prompt(&block.body),
                },
            )
        })
        .collect()
}

/// `### 장면 N` 提示词列表转为同一形状的表（同号取最后一个）
pub fn markdown_scene_prompts(prompts: Vec<ScenePrompt>) -> ScenePromptMap {
    prompts.into_iter().map(|p| (p.label, p)).collect()
}

/// 合并两张表：同一场景编号以 markdown 写法为准
pub fn merge_scene_prompts(classic: ScenePromptMap, markdown: ScenePromptMap) -> ScenePromptMap {
    let mut merged = classic;
    merged.extend(markdown);
    merged
}

/// 合并结果按场景编号升序输出，去掉空提示词
pub fn resolved_rows(merged: ScenePromptMap) -> Vec<ScenePrompt> {
    merged
        .into_values()
        .filter(|p| !p.prompt.trim().is_empty())
        .collect()
}

//! Removal-Word Filter - 删除词过滤
//!
//! 对每个提示词删除用户指定的词（大小写不敏感），再合并多余空白。

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace run pattern"));

/// 删除词集合（有序、去重）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalWordSet {
    words: Vec<String>,
}

impl RemovalWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for word in words {
            set.add(word);
        }
        set
    }

    /// 追加一个词：去掉首尾空白，空串或已存在时忽略
    ///
    /// 返回是否真的追加了。
    pub fn add(&mut self, word: impl Into<String>) -> bool {
        let word = word.into().trim().to_string();
        if word.is_empty() || self.words.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 编译为过滤器（一次编译，多次使用）
    pub fn filter(&self) -> RemovalFilter {
        RemovalFilter::new(&self.words)
    }
}

/// 编译好的删除词过滤器
#[derive(Debug, Clone)]
pub struct RemovalFilter {
    pattern: Option<Regex>,
}

impl RemovalFilter {
    pub fn new(words: &[String]) -> Self {
        let parts: Vec<String> = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();
        if parts.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&parts.join("|"))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    /// 不做任何处理的过滤器
    pub fn noop() -> Self {
        Self { pattern: None }
    }

    pub fn is_noop(&self) -> bool {
        self.pattern.is_none()
    }

    /// 删除所有命中的词，合并连续空白并去首尾空白
    ///
    /// 空集合时原样返回。
    pub fn apply(&self, prompt: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return prompt.to_string();
        };
        let removed = pattern.replace_all(prompt, "");
        WHITESPACE_RUN.replace_all(&removed, " ").trim().to_string()
    }
}

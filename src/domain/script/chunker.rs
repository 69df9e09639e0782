//! Card Chunker - 脚本卡片切分
//!
//! 把清理后的脚本按句末边界切成不超过字符上限的卡片。
//!
//! 处理流程：
//! 1. 截掉 `## 🎨 이미지 프롬프트` 之后的内容
//! 2. 场景标题规范化 → 行清理
//! 3. 去掉双引号类字符（单引号保留，它常出现在缩写里）
//! 4. 从钩子段落（或第 1 个场景）开始切分

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::normalizer::normalize_scene_headers;
use super::sanitizer::{clip_before_image_prompt, sanitize_lines};
use super::sentence::cut_point;

/// 默认卡片字符上限
pub const DEFAULT_CARD_LIMIT: usize = 10_000;

/// 默认朗读速度（字/分钟）
pub const DEFAULT_READ_SPEED_CPM: u32 = 360;

/// 默认钩子段落锚点
pub const DEFAULT_HOOK_ANCHOR: &str = "초반 45초 훅";

/// 第 1 个场景标题（锚点缺失时的起点）
static FIRST_SCENE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[ \t]*장면[ \t]*0*1[ \t]*(?:\]|:)").expect("first scene pattern")
});

/// 卡片切分配置
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// 每张卡片的最大字符数
    pub limit: usize,
    /// 朗读速度，用于估算时长
    pub read_speed_cpm: u32,
    /// 钩子段落锚点，空白处宽松匹配
    pub hook_anchor: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CARD_LIMIT,
            read_speed_cpm: DEFAULT_READ_SPEED_CPM,
            hook_anchor: DEFAULT_HOOK_ANCHOR.to_string(),
        }
    }
}

/// 一张卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// 从 1 开始的序号
    pub index: usize,
    pub text: String,
    pub char_count: usize,
    /// 估算朗读秒数
    pub read_seconds: u64,
}

impl Card {
    /// 卡片标题：`카드 1 / 1,234자 / [ 00시 03분 25초 ]`
    pub fn heading(&self) -> String {
        format!(
            "카드 {} / {}자 / {}",
            self.index,
            group_thousands(self.char_count),
            format_read_duration(self.read_seconds)
        )
    }
}

/// 按字符数估算朗读秒数
pub fn read_seconds(chars: usize, read_speed_cpm: u32) -> u64 {
    if read_speed_cpm == 0 {
        return 0;
    }
    (chars as u64 * 60) / read_speed_cpm as u64
}

/// `[ HH시 MM분 SS초 ]`
pub fn format_read_duration(seconds: u64) -> String {
    format!(
        "[ {:02}시 {:02}분 {:02}초 ]",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 锚点编译为宽松正则：词与词、数字与文字之间允许任意空白
fn anchor_pattern(anchor: &str) -> Option<Regex> {
    let mut tokens: Vec<String> = Vec::new();
    for word in anchor.split_whitespace() {
        let mut current = String::new();
        let mut prev_digit: Option<bool> = None;
        for ch in word.chars() {
            let is_digit = ch.is_ascii_digit();
            if prev_digit.is_some_and(|p| p != is_digit) {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(ch);
            prev_digit = Some(is_digit);
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }
    if tokens.is_empty() {
        return None;
    }
    let pattern = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join(r"\s*");
    Regex::new(&format!("(?i){}", pattern)).ok()
}

/// 计算切分起点（字节偏移）
///
/// 优先钩子锚点，其次第 1 个场景标题，都没有则从头开始。
pub fn start_offset(text: &str, hook_anchor: &str) -> usize {
    if let Some(m) = anchor_pattern(hook_anchor).and_then(|re| re.find(text)) {
        return m.start();
    }
    FIRST_SCENE_HEADER.find(text).map_or(0, |m| m.start())
}

/// 去掉双引号和书名号类引号，单引号保留
pub fn strip_double_quotes(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                c,
                '"' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{00AB}' | '\u{00BB}'
            )
        })
        .collect()
}

/// 切分前的完整预处理，返回已从起点截取的文本
pub fn prepare_script(script: &str, hook_anchor: &str) -> String {
    let clipped = clip_before_image_prompt(script);
    let cleaned = sanitize_lines(&normalize_scene_headers(clipped));
    let unquoted = strip_double_quotes(&cleaned);
    let start = start_offset(&unquoted, hook_anchor);
    unquoted[start..].to_string()
}

/// 卡片序列
///
/// 惰性、有限、只能消费一次：每次取剩余文本中不超过上限的最长句子前缀。
pub struct CardChunks<'a> {
    rest: &'a str,
    limit: usize,
    read_speed_cpm: u32,
    next_index: usize,
}

impl<'a> CardChunks<'a> {
    pub fn new(text: &'a str, limit: usize, read_speed_cpm: u32) -> Self {
        Self {
            rest: text,
            limit,
            read_speed_cpm,
            next_index: 1,
        }
    }
}

impl Iterator for CardChunks<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.rest.trim().is_empty() {
            self.rest = "";
            return None;
        }
        let cut = cut_point(self.rest, self.limit);
        let (head, tail) = self.rest.split_at(cut.byte);
        self.rest = tail;

        let text = head.trim().to_string();
        let char_count = text.chars().count();
        let card = Card {
            index: self.next_index,
            read_seconds: read_seconds(char_count, self.read_speed_cpm),
            text,
            char_count,
        };
        self.next_index += 1;
        Some(card)
    }
}

/// 把已经清理好的文本切成卡片
pub fn chunk_cards(text: &str, limit: usize, read_speed_cpm: u32) -> Vec<Card> {
    CardChunks::new(text, limit, read_speed_cpm).collect()
}

/// 从原始脚本生成卡片
pub fn split_script_cards(script: &str, config: &CardConfig) -> Vec<Card> {
    let prepared = prepare_script(script, &config.hook_anchor);
    chunk_cards(&prepared, config.limit, config.read_speed_cpm)
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::script::{CardConfig, DEFAULT_CARD_LIMIT, DEFAULT_HOOK_ANCHOR, DEFAULT_READ_SPEED_CPM};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 解析配置
    #[serde(default)]
    pub parser: ParserConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024 // 16 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 解析配置
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// 每张卡片的最大字符数
    #[serde(default = "default_card_limit")]
    pub card_limit: usize,

    /// 朗读速度（字/分钟）
    #[serde(default = "default_read_speed_cpm")]
    pub read_speed_cpm: u32,

    /// 卡片切分起点锚点
    #[serde(default = "default_hook_anchor")]
    pub hook_anchor: String,
}

fn default_card_limit() -> usize {
    DEFAULT_CARD_LIMIT
}

fn default_read_speed_cpm() -> u32 {
    DEFAULT_READ_SPEED_CPM
}

fn default_hook_anchor() -> String {
    DEFAULT_HOOK_ANCHOR.to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            card_limit: default_card_limit(),
            read_speed_cpm: default_read_speed_cpm(),
            hook_anchor: default_hook_anchor(),
        }
    }
}

impl ParserConfig {
    /// 转为卡片切分配置
    pub fn card_config(&self) -> CardConfig {
        CardConfig {
            limit: self.card_limit,
            read_speed_cpm: self.read_speed_cpm,
            hook_anchor: self.hook_anchor.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

//! ScenePrompt - 韩剧脚本卡片与场景图片提示词工具
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Script Context: 场景标题规范化、行清理、句末切分卡片
//! - Prompt Context: 场景块解析、提示词合并、提示词表、JSON 导出
//!
//! 应用层 (application/):
//! - Ports: RemovalWordStore
//! - Commands: 删除词追加/清空
//! - Queries: 卡片切分、提示词表、导出、删除词列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: RemovalWordStore 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

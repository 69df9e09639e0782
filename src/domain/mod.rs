//! Domain Layer - 领域层
//!
//! 包含两个处理上下文:
//! - Script Context: 脚本规范化与卡片切分
//! - Prompt Context: 图片提示词解析、表格组装与导出
//!
//! 纯函数，不做 I/O。

pub mod errors;
pub mod prompt;
pub mod scene_label;
pub mod script;

pub use errors::ParseError;
pub use scene_label::SceneLabel;

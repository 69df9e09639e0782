//! Domain Errors - 解析层错误
//!
//! 解析核心对任意输入文本都不会失败（降级处理），
//! 只有显式构造值对象时才可能返回错误。

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("无效的场景编号: {0}（必须在 0..=999 范围内）")]
    InvalidSceneNumber(u32),
}

//! Removal Word Store Port - 删除词集合存储
//!
//! 单个共享的删除词集合，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::prompt::RemovalWordSet;

/// 删除词存储错误
#[derive(Debug, Error)]
pub enum RemovalWordStoreError {
    #[error("Removal word store lock poisoned")]
    Poisoned,
}

/// Removal Word Store Port
///
/// 多个请求并发读写同一个集合，后写者生效
pub trait RemovalWordStorePort: Send + Sync {
    /// 追加一个词，返回追加后的集合快照和是否真的追加
    fn add(&self, word: &str) -> Result<(RemovalWordSet, bool), RemovalWordStoreError>;

    /// 清空集合
    fn reset(&self) -> Result<(), RemovalWordStoreError>;

    /// 当前集合的快照
    fn snapshot(&self) -> Result<RemovalWordSet, RemovalWordStoreError>;
}

//! Removal Word Queries

/// 列出删除词查询
#[derive(Debug, Clone)]
pub struct ListRemovalWords;

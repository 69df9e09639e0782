//! Removal Word Commands

/// 追加删除词命令
#[derive(Debug, Clone)]
pub struct AddRemovalWord {
    pub word: String,
}

/// 清空删除词命令
#[derive(Debug, Clone)]
pub struct ResetRemovalWords;

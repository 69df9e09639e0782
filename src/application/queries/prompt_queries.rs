//! Prompt Queries

use chrono::NaiveDate;

/// 组装提示词表查询
#[derive(Debug, Clone)]
pub struct BuildPromptTable {
    pub prompt: String,
}

/// 导出提示词查询
#[derive(Debug, Clone)]
pub struct ExportPrompts {
    pub prompt: String,
    /// 用于文件名首句
    pub script: Option<String>,
    /// 上传日期，缺省为今天
    pub upload_date: Option<NaiveDate>,
}

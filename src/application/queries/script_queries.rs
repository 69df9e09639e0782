//! Script Queries

/// 切分脚本卡片查询
#[derive(Debug, Clone)]
pub struct SplitScriptCards {
    pub script: String,
    /// 覆盖配置里的卡片字符上限
    pub limit: Option<usize>,
}

//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod prompt_queries;
mod removal_word_queries;
mod script_queries;

pub mod handlers;

pub use prompt_queries::*;
pub use removal_word_queries::*;
pub use script_queries::*;

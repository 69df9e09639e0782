//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod prompt_handlers;
mod removal_word_handlers;
mod script_handlers;

pub use prompt_handlers::*;
pub use removal_word_handlers::*;
pub use script_handlers::*;

//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod removal_word_handlers;

pub use removal_word_handlers::*;

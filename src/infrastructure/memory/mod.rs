//! Memory Layer - In-Memory State Management
//!
//! 实现 RemovalWordStore，保存进程内共享的删除词集合

mod removal_word_store;

pub use removal_word_store::InMemoryRemovalWordStore;

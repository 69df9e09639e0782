//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod removal_words;

pub use removal_words::{RemovalWordStoreError, RemovalWordStorePort};

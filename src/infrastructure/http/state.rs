//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddRemovalWordHandler, ResetRemovalWordsHandler,
    // Query handlers
    BuildPromptTableHandler, ExportPromptsHandler, ListRemovalWordsHandler,
    SplitScriptCardsHandler,
    // Ports
    RemovalWordStorePort,
};
use crate::domain::script::CardConfig;

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_removal_word_handler: AddRemovalWordHandler,
    pub reset_removal_words_handler: ResetRemovalWordsHandler,

    // ========== Query Handlers ==========
    pub split_script_cards_handler: SplitScriptCardsHandler,
    pub build_prompt_table_handler: BuildPromptTableHandler,
    pub export_prompts_handler: ExportPromptsHandler,
    pub list_removal_words_handler: ListRemovalWordsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(removal_words: Arc<dyn RemovalWordStorePort>, card_config: CardConfig) -> Self {
        Self {
            // Command handlers
            add_removal_word_handler: AddRemovalWordHandler::new(removal_words.clone()),
            reset_removal_words_handler: ResetRemovalWordsHandler::new(removal_words.clone()),

            // Query handlers
            split_script_cards_handler: SplitScriptCardsHandler::new(card_config),
            build_prompt_table_handler: BuildPromptTableHandler::new(removal_words.clone()),
            export_prompts_handler: ExportPromptsHandler::new(removal_words.clone()),
            list_removal_words_handler: ListRemovalWordsHandler::new(removal_words),
        }
    }
}

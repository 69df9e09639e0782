//! Removal Word Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddRemovalWord, ResetRemovalWords};
use crate::application::error::ApplicationError;
use crate::application::ports::RemovalWordStorePort;

// ============================================================================
// AddRemovalWord
// ============================================================================

/// 删除词变更后的集合
#[derive(Debug, Clone)]
pub struct RemovalWordsResponse {
    pub words: Vec<String>,
}

/// AddRemovalWord Handler
pub struct AddRemovalWordHandler {
    store: Arc<dyn RemovalWordStorePort>,
}

impl AddRemovalWordHandler {
    pub fn new(store: Arc<dyn RemovalWordStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddRemovalWord) -> Result<RemovalWordsResponse, ApplicationError> {
        let word = command.word.trim();
        if word.is_empty() {
            return Err(ApplicationError::validation("removal word must not be empty"));
        }

        let (set, added) = self.store.add(word)?;

        if added {
            tracing::info!(word = %word, total = set.len(), "Removal word added");
        } else {
            tracing::debug!(word = %word, "Removal word already present");
        }

        Ok(RemovalWordsResponse {
            words: set.words().to_vec(),
        })
    }
}

// ============================================================================
// ResetRemovalWords
// ============================================================================

/// ResetRemovalWords Handler
pub struct ResetRemovalWordsHandler {
    store: Arc<dyn RemovalWordStorePort>,
}

impl ResetRemovalWordsHandler {
    pub fn new(store: Arc<dyn RemovalWordStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _command: ResetRemovalWords) -> Result<RemovalWordsResponse, ApplicationError> {
        self.store.reset()?;

        tracing::info!("Removal words reset");

        Ok(RemovalWordsResponse { words: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryRemovalWordStore;

    #[tokio::test]
    async fn test_add_then_reset() {
        let store: Arc<dyn RemovalWordStorePort> = Arc::new(InMemoryRemovalWordStore::new());
        let add = AddRemovalWordHandler::new(store.clone());
        let reset = ResetRemovalWordsHandler::new(store.clone());

        add.handle(AddRemovalWord { word: " rain ".into() }).await.unwrap();
        let resp = add.handle(AddRemovalWord { word: "rain".into() }).await.unwrap();
        assert_eq!(resp.words, vec!["rain".to_string()]);

        let resp = reset.handle(ResetRemovalWords).await.unwrap();
        assert!(resp.words.is_empty());
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_word_rejected() {
        let store: Arc<dyn RemovalWordStorePort> = Arc::new(InMemoryRemovalWordStore::new());
        let add = AddRemovalWordHandler::new(store);
        let err = add
            .handle(AddRemovalWord { word: "   ".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}

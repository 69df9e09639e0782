//! Removal Word Query Handlers

use std::sync::Arc;

use crate::application::commands::handlers::RemovalWordsResponse;
use crate::application::error::ApplicationError;
use crate::application::ports::RemovalWordStorePort;
use crate::application::queries::ListRemovalWords;

/// ListRemovalWords Handler
pub struct ListRemovalWordsHandler {
    store: Arc<dyn RemovalWordStorePort>,
}

impl ListRemovalWordsHandler {
    pub fn new(store: Arc<dyn RemovalWordStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListRemovalWords) -> Result<RemovalWordsResponse, ApplicationError> {
        let set = self.store.snapshot()?;
        Ok(RemovalWordsResponse {
            words: set.words().to_vec(),
        })
    }
}

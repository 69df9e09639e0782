//! In-Memory Removal Word Store Implementation

use std::sync::RwLock;

use crate::application::ports::{RemovalWordStoreError, RemovalWordStorePort};
use crate::domain::prompt::RemovalWordSet;

/// 内存删除词集合
pub struct InMemoryRemovalWordStore {
    words: RwLock<RemovalWordSet>,
}

impl InMemoryRemovalWordStore {
    pub fn new() -> Self {
        Self::with_words(RemovalWordSet::new())
    }

    pub fn with_words(words: RemovalWordSet) -> Self {
        Self {
            words: RwLock::new(words),
        }
    }
}

impl Default for InMemoryRemovalWordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RemovalWordStorePort for InMemoryRemovalWordStore {
    fn add(&self, word: &str) -> Result<(RemovalWordSet, bool), RemovalWordStoreError> {
        let mut words = self.words.write().map_err(|_| RemovalWordStoreError::Poisoned)?;
        let added = words.add(word);
        tracing::debug!(word = %word, added, "Removal word store updated");
        Ok((words.clone(), added))
    }

    fn reset(&self) -> Result<(), RemovalWordStoreError> {
        let mut words = self.words.write().map_err(|_| RemovalWordStoreError::Poisoned)?;
        words.clear();
        Ok(())
    }

    fn snapshot(&self) -> Result<RemovalWordSet, RemovalWordStoreError> {
        let words = self.words.read().map_err(|_| RemovalWordStoreError::Poisoned)?;
        Ok(words.clone())
    }
}

//! Prompt Query Handlers

use chrono::Local;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::RemovalWordStorePort;
use crate::application::queries::{BuildPromptTable, ExportPrompts};
use crate::domain::prompt::{build_export, build_prompt_table, export_filename, ExportPayload, PromptTable};

// ============================================================================
// Response DTOs
// ============================================================================

/// 导出响应
#[derive(Debug, Clone)]
pub struct ExportPromptsResponse {
    pub filename: String,
    pub payload: ExportPayload,
    /// 可直接保存的 JSON 文本
    pub json: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// BuildPromptTable Handler
pub struct BuildPromptTableHandler {
    store: Arc<dyn RemovalWordStorePort>,
}

impl BuildPromptTableHandler {
    pub fn new(store: Arc<dyn RemovalWordStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: BuildPromptTable) -> Result<PromptTable, ApplicationError> {
        let filter = self.store.snapshot()?.filter();
        let table = build_prompt_table(&query.prompt, &filter);

        tracing::debug!(
            rows = table.rows.len(),
            scenes = table.scene_count(),
            "Prompt table built"
        );

        Ok(table)
    }
}

/// ExportPrompts Handler
pub struct ExportPromptsHandler {
    store: Arc<dyn RemovalWordStorePort>,
}

impl ExportPromptsHandler {
    pub fn new(store: Arc<dyn RemovalWordStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ExportPrompts) -> Result<ExportPromptsResponse, ApplicationError> {
        let filter = self.store.snapshot()?.filter();
        let now = Local::now();
        let today = now.date_naive();

        let payload = build_export(&query.prompt, &filter, today);
        let filename = export_filename(
            query.upload_date.unwrap_or(today),
            now.time(),
            query.script.as_deref().unwrap_or_default(),
        );
        let json = payload.to_pretty_json()?;

        tracing::debug!(count = payload.count, filename = %filename, "Prompts exported");

        Ok(ExportPromptsResponse {
            filename,
            payload,
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::infrastructure::memory::InMemoryRemovalWordStore;

    fn store_with(words: &[&str]) -> Arc<dyn RemovalWordStorePort> {
        let store = InMemoryRemovalWordStore::new();
        for word in words {
            store.add(word).unwrap();
        }
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_table_uses_removal_snapshot() {
        let handler = BuildPromptTableHandler::new(store_with(&["rain"]));
        let table = handler
            .handle(BuildPromptTable {
                prompt: "[장면 1] 프롬프트: Korean drama still photo, rain street".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].prompt(), Some("Korean drama still photo, street"));
    }

    #[tokio::test]
    async fn test_export_filename_and_payload() {
        let handler = ExportPromptsHandler::new(store_with(&[]));
        let resp = handler
            .handle(ExportPrompts {
                prompt: "[장면 2] a: two\n[장면 1] b: one".to_string(),
                script: Some("첫 문장\n둘째".to_string()),
                upload_date: NaiveDate::from_ymd_opt(2026, 3, 9),
            })
            .await
            .unwrap();
        assert!(resp.filename.starts_with("[03-09] ／ ["));
        assert!(resp.filename.ends_with("] 첫 문장.json"));
        assert_eq!(resp.payload.count, 2);
        assert_eq!(resp.payload.items[0].id, "001");
        assert!(resp.json.contains("\"suggested_filenames\""));
    }

    #[tokio::test]
    async fn test_export_without_script_is_untitled() {
        let handler = ExportPromptsHandler::new(store_with(&[]));
        let resp = handler
            .handle(ExportPrompts {
                prompt: String::new(),
                script: None,
                upload_date: None,
            })
            .await
            .unwrap();
        assert!(resp.filename.ends_with("] untitled.json"));
        assert_eq!(resp.payload.count, 0);
    }
}

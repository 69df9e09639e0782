//! Script Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::SplitScriptCards;
use crate::domain::script::{format_read_duration, split_script_cards, Card, CardConfig};

// ============================================================================
// Response DTOs
// ============================================================================

/// 卡片响应
#[derive(Debug, Clone)]
pub struct CardResponse {
    pub index: usize,
    pub heading: String,
    pub text: String,
    pub char_count: usize,
    pub read_seconds: u64,
    pub read_duration: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            heading: card.heading(),
            read_duration: format_read_duration(card.read_seconds),
            index: card.index,
            text: card.text,
            char_count: card.char_count,
            read_seconds: card.read_seconds,
        }
    }
}

/// 卡片列表响应
#[derive(Debug, Clone)]
pub struct SplitScriptCardsResponse {
    pub limit: usize,
    pub total_chars: usize,
    pub cards: Vec<CardResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// SplitScriptCards Handler
pub struct SplitScriptCardsHandler {
    config: CardConfig,
}

impl SplitScriptCardsHandler {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub async fn handle(&self, query: SplitScriptCards) -> Result<SplitScriptCardsResponse, ApplicationError> {
        let config = match query.limit {
            Some(0) => return Err(ApplicationError::validation("card limit must be greater than 0")),
            Some(limit) => CardConfig {
                limit,
                ..self.config.clone()
            },
            None => self.config.clone(),
        };

        let cards = split_script_cards(&query.script, &config);
        let total_chars = cards.iter().map(|c| c.char_count).sum();

        tracing::debug!(
            limit = config.limit,
            cards = cards.len(),
            total_chars,
            "Script split into cards"
        );

        Ok(SplitScriptCardsResponse {
            limit: config.limit,
            total_chars,
            cards: cards.into_iter().map(CardResponse::from).collect(),
        })
    }
}

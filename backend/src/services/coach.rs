//! Coach service - canned replies and chat history

use crate::error::ApiError;
use crate::repositories::LogStore;
use chrono::Utc;
use nutriai_shared::coach::respond;
use nutriai_shared::ChatExchange;
use tracing::debug;

/// Coach service
pub struct CoachService;

impl CoachService {
    /// Answer a message and append the exchange to the user's history
    pub async fn reply(
        store: &dyn LogStore,
        user_id: &str,
        message: Option<String>,
    ) -> Result<ChatExchange, ApiError> {
        let message = message
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ApiError::Validation("Message is required".to_string()))?;

        let exchange = ChatExchange {
            ai_response: respond(&message).to_string(),
            user_message: message,
            timestamp: Utc::now(),
        };
        store.append_chat(user_id, exchange.clone()).await?;

        debug!(user_id = %user_id, "Recorded chat exchange");
        Ok(exchange)
    }

    pub async fn history(store: &dyn LogStore, user_id: &str) -> Result<Vec<ChatExchange>, ApiError> {
        Ok(store.chat_history(user_id).await?)
    }
}

use async_trait::async_trait;

use super::errors::ConversationError;
use super::model::IntentResult;

/// Service port for reading intent out of a user utterance.
///
/// Implementations must not fail on oddly shaped model output: they fall back
/// to an empty item list and the raw text as reply. Only a failed model call
/// is reported as an error.
#[async_trait]
pub trait IntentInterpreterService: Send + Sync {
    async fn interpret(
        &self,
        user_query: &str,
        inventory_summary: &str,
    ) -> Result<IntentResult, ConversationError>;
}

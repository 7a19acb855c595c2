use erudio_shared::protocol::{
    AddToPlanRequest, AddToPlanResponse, ChatRequest, ChatResponse, ConversationSummary,
};

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Conversations stored for the signed-in user.
    pub async fn chat_history(&self, token: Option<&str>) -> Result<Vec<ConversationSummary>> {
        self.get_json("/chat/history", token).await
    }

    /// Send the conversation so far and get the assistant's reply. The
    /// backend assigns a conversation id when the request carries none.
    pub async fn chat(&self, token: Option<&str>, req: &ChatRequest) -> Result<ChatResponse> {
        self.post_json("/chat", token, req).await
    }

    pub async fn add_to_plan(
        &self,
        token: Option<&str>,
        req: &AddToPlanRequest,
    ) -> Result<AddToPlanResponse> {
        self.post_json("/chat/add-to-plan", token, req).await
    }

    pub async fn delete_conversation(&self, token: Option<&str>, conversation_id: &str) -> Result<()> {
        self.delete(&format!("/chat/{conversation_id}"), token).await
    }
}

//! Exchange seam between the controller and the chat service.

use async_trait::async_trait;
use chat_api::{ChatApiClient, ChatApiError, ChatReply, ChatRequest};

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatApiError>;
}

#[async_trait]
impl ChatTransport for ChatApiClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatApiError> {
        ChatApiClient::send(self, request).await
    }
}

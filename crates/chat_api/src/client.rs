use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;

use crate::config::ChatApiConfig;
use crate::error::{parse_error_message, ChatApiError};
use crate::payload::{ChatReply, ChatRequest};
use crate::url::normalize_chat_url;

#[derive(Debug)]
pub struct ChatApiClient {
    http: Client,
    config: ChatApiConfig,
}

impl ChatApiClient {
    pub fn new(config: ChatApiConfig) -> Result<Self, ChatApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ChatApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn normalized_endpoint(&self) -> String {
        normalize_chat_url(&self.config.base_url)
    }

    pub fn build_headers(&self) -> Result<HeaderMap, ChatApiError> {
        let mut out = HeaderMap::new();
        for (key, value) in &self.config.extra_headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                    ChatApiError::InvalidConfig(format!("invalid header key: {key}"))
                })?,
                HeaderValue::from_str(value).map_err(|_| {
                    ChatApiError::InvalidConfig(format!("invalid header value for {key}"))
                })?,
            );
        }
        if let Some(user_agent) = self.config.user_agent.as_deref() {
            out.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(|_| {
                    ChatApiError::InvalidConfig("invalid user agent".to_string())
                })?,
            );
        }
        Ok(out)
    }

    pub fn build_request(
        &self,
        request: &ChatRequest,
    ) -> Result<reqwest::RequestBuilder, ChatApiError> {
        let headers = self.build_headers()?;
        Ok(self
            .http
            .post(self.normalized_endpoint())
            .headers(headers)
            .json(request))
    }

    /// Performs one exchange. There is no retry: every failure is returned to the caller.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatApiError> {
        let endpoint = self.normalized_endpoint();
        tracing::debug!(
            %endpoint,
            has_session = request.session_id.is_some(),
            "sending chat request"
        );

        let response = self.build_request(request)?.send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());
            let body = response.text().await.unwrap_or_default();
            let message = parse_error_message(status, reason.as_deref(), &body);
            tracing::warn!(status = status.as_u16(), %message, "chat request failed");
            return Err(ChatApiError::Status { status, message });
        }

        let body = response.text().await?;
        let reply = serde_json::from_str::<ChatReply>(&body)?;
        tracing::debug!(
            status = status.as_u16(),
            has_reply = reply.reply.is_some(),
            issued_session = reply.issued_session_id().is_some(),
            "chat response received"
        );
        Ok(reply)
    }
}

//! Chat API.

use std::collections::HashMap;

use bytes::Bytes;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use serde::Serialize;
use tokio_stream::Stream;

use crate::client::FastGptClient;
use crate::error::{Error, Result};
use crate::types::{ChatMessage, ChatRequest, JsonObject};

/// Chat completions endpoint. Uses the chat key, not the general key.
const CHAT_COMPLETIONS: &str = "api/v1/chat/completions";

/// Wire body for chat completions; the `stream` flag is owned by the
/// client method, not the caller's request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatCompletionsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_id: Option<&'a str>,
    stream: bool,
    detail: bool,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    variables: &'a HashMap<String, String>,
    messages: &'a [ChatMessage],
}

impl<'a> ChatCompletionsBody<'a> {
    fn new(request: &'a ChatRequest, stream: bool) -> Self {
        Self {
            chat_id: request.chat_id.as_deref(),
            stream,
            detail: request.detail,
            variables: &request.variables,
            messages: &request.messages,
        }
    }
}

/// Chat API client.
pub struct ChatApi {
    client: FastGptClient,
}

impl ChatApi {
    pub(crate) fn new(client: FastGptClient) -> Self {
        Self { client }
    }

    /// Send a chat request and wait for the full response.
    pub async fn completions(&self, request: &ChatRequest) -> Result<JsonObject> {
        self.client
            .post_chat(CHAT_COMPLETIONS, &ChatCompletionsBody::new(request, false))
            .await
    }

    /// Send a message with just text (convenience method).
    pub async fn message(&self, text: impl Into<String>) -> Result<JsonObject> {
        self.completions(&ChatRequest::new(text)).await
    }

    /// Stream a chat response as raw bytes.
    ///
    /// The stream is the server-sent-event body exactly as the server
    /// emits it, starting at the first byte. Control returns once
    /// headers have arrived; dropping the stream releases the
    /// connection.
    pub async fn completions_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<impl Stream<Item = Result<Bytes>>> {
        let response = self
            .client
            .post_chat_stream(CHAT_COMPLETIONS, &ChatCompletionsBody::new(request, true))
            .await?;

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from)))
    }

    /// Stream a chat response as parsed server-sent events.
    ///
    /// Yields one JSON object per `data:` event, skipping empty events
    /// and the `[DONE]` sentinel.
    pub async fn completions_events(
        &self,
        request: &ChatRequest,
    ) -> Result<impl Stream<Item = Result<JsonObject>>> {
        let response = self
            .client
            .post_chat_stream(CHAT_COMPLETIONS, &ChatCompletionsBody::new(request, true))
            .await?;

        // Parse SSE frames using the Eventsource extension trait
        let stream = response.bytes_stream().eventsource();

        Ok(stream.filter_map(|result| async move {
            match result {
                Ok(event) => {
                    if event.data.is_empty() || event.data == "[DONE]" {
                        return None;
                    }

                    match serde_json::from_str::<JsonObject>(&event.data) {
                        Ok(object) => Some(Ok(object)),
                        Err(e) => {
                            tracing::warn!(data = %event.data, error = %e, "failed to parse stream event");
                            Some(Err(Error::from(e)))
                        }
                    }
                }
                Err(e) => Some(Err(Error::new(format!("stream error: {}", e)))),
            }
        }))
    }
}

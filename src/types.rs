//! Request and entity types for the FastGPT API.
//!
//! Responses are deliberately untyped: the service does not guarantee a
//! response schema, so every operation returns a [`JsonObject`]. Request
//! bodies are typed, and absent optional fields are omitted from the
//! serialized JSON rather than sent as `null`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Generic JSON object returned by every API operation.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// A single message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message text.
    pub content: String,
    /// Sender role (`user`, `assistant`, `system`).
    pub role: String,
}

impl ChatMessage {
    /// Create a message with the default `user` role.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: "user".to_string(),
        }
    }

    /// Create a message with an explicit role.
    pub fn with_role(content: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: role.into(),
        }
    }
}

/// Chat completion request.
///
/// The `stream` wire flag is not part of this type; it is set by the
/// client depending on whether the plain or streaming call is used.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// Conversation ID. When set, the server loads history for this ID
    /// and treats the last message as the user question; when absent,
    /// context comes entirely from `messages` and nothing is stored.
    /// Must be unique per conversation and under 250 characters.
    pub chat_id: Option<String>,
    /// Return intermediate values (module status, full response data).
    pub detail: bool,
    /// Module variables, substituted into `{{key}}` placeholders.
    pub variables: HashMap<String, String>,
    /// Conversation messages, GPT chat format.
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Create a request with a single user message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::new(message)],
            ..Default::default()
        }
    }

    /// Create a request from a full message list.
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Set the conversation ID.
    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    /// Request intermediate values in the response.
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    /// Add a module variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Datasets
// ─────────────────────────────────────────────────────────────────────────────

/// Dataset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetType {
    /// A plain knowledge base.
    Dataset,
    /// A folder grouping other datasets.
    Folder,
}

/// Request to create a dataset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetRequest {
    /// Parent ID for folder-like nesting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Dataset kind; the server defaults to a plain dataset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<DatasetType>,
    /// Dataset name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Vector model; leave unset to use the server default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_model: Option<String>,
    /// Text processing model; leave unset to use the server default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_model: Option<String>,
}

impl CreateDatasetRequest {
    /// Create a request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Search mode for [`SearchTestRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    /// Vector similarity search.
    Embedding,
    /// Full-text recall.
    FullTextRecall,
    /// Combined vector and full-text recall.
    MixedRecall,
}

/// Request to run a search test against a dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTestRequest {
    /// Dataset to search.
    pub dataset_id: String,
    /// Query text.
    pub text: String,
    /// Maximum tokens in the returned matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Minimum similarity threshold, `0.0`–`1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    /// Search mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_mode: Option<SearchMode>,
    /// Rerank the results.
    pub using_re_rank: bool,
}

impl SearchTestRequest {
    /// Create a request with a dataset and query text.
    pub fn new(dataset_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            text: text.into(),
            limit: None,
            similarity: None,
            search_mode: None,
            using_re_rank: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// A folder grouping other collections.
    Folder,
    /// A manually curated collection.
    Virtual,
}

/// How source text is split into records for indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingType {
    /// Split by text length.
    Chunk,
    /// Split into question/answer pairs.
    Qa,
}

/// Request to create an empty collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    /// Dataset the collection belongs to.
    pub dataset_id: String,
    /// Parent ID; root when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Collection name.
    pub name: String,
    /// Collection kind.
    #[serde(rename = "type")]
    pub collection_type: CollectionType,
    /// Opaque metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl CreateCollectionRequest {
    /// Create a request with the required fields.
    pub fn new(
        dataset_id: impl Into<String>,
        name: impl Into<String>,
        collection_type: CollectionType,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            parent_id: None,
            name: name.into(),
            collection_type,
            metadata: None,
        }
    }
}

/// Request to create a collection from raw text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextCollectionRequest {
    /// Source text.
    pub text: String,
    /// Dataset the collection belongs to.
    pub dataset_id: String,
    /// Parent ID; root when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Collection name.
    pub name: String,
    /// Opaque metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Chunking strategy.
    pub training_type: TrainingType,
    /// Chunk length. Chunk mode: 100–3000; QA mode: 4000 up to the
    /// model's token limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    /// Highest-priority custom split marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_splitter: Option<String>,
    /// Custom prompt for QA splitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_prompt: Option<String>,
}

impl CreateTextCollectionRequest {
    /// Create a request with the required fields.
    pub fn new(
        text: impl Into<String>,
        dataset_id: impl Into<String>,
        name: impl Into<String>,
        training_type: TrainingType,
    ) -> Self {
        Self {
            text: text.into(),
            dataset_id: dataset_id.into(),
            parent_id: None,
            name: name.into(),
            metadata: None,
            training_type,
            chunk_size: None,
            chunk_splitter: None,
            qa_prompt: None,
        }
    }

    /// Set the chunk length.
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }
}

/// Request to create a collection from a web link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkCollectionRequest {
    /// Web link to ingest.
    pub link: String,
    /// Dataset the collection belongs to.
    pub dataset_id: String,
    /// Parent ID; root when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Opaque metadata; `webPageSelector` picks the page element to read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Chunking strategy.
    pub training_type: TrainingType,
    /// Chunk length, same bounds as the text variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    /// Highest-priority custom split marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_splitter: Option<String>,
    /// Custom prompt for QA splitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_prompt: Option<String>,
}

impl CreateLinkCollectionRequest {
    /// Create a request with the required fields.
    pub fn new(
        link: impl Into<String>,
        dataset_id: impl Into<String>,
        training_type: TrainingType,
    ) -> Self {
        Self {
            link: link.into(),
            dataset_id: dataset_id.into(),
            parent_id: None,
            metadata: None,
            training_type,
            chunk_size: None,
            chunk_splitter: None,
            qa_prompt: None,
        }
    }

    /// Set the chunk length.
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }
}

/// Request to update a collection's name or parent.
#[derive(Debug, Clone, Default)]
pub struct UpdateCollectionRequest {
    /// New parent ID.
    pub parent_id: Option<String>,
    /// New name.
    pub name: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Data records
// ─────────────────────────────────────────────────────────────────────────────

/// A question/answer record pushed into a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushData {
    /// Primary text (the question).
    pub q: String,
    /// Auxiliary text (the answer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    /// Custom index entries; when absent the server indexes `q` and `a`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<DataIndex>>,
}

impl PushData {
    /// Create a record from primary text.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: None,
            indexes: None,
        }
    }

    /// Set the auxiliary text.
    pub fn with_answer(mut self, a: impl Into<String>) -> Self {
        self.a = Some(a.into());
        self
    }
}

/// A custom index entry on a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIndex {
    /// Whether this is the default index built from `q`/`a`.
    pub default_index: bool,
    /// Index kind.
    #[serde(rename = "type")]
    pub index_type: String,
    /// Indexed text.
    pub text: String,
}

/// Request to push records into a collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushDataRequest {
    /// Target collection.
    pub collection_id: String,
    /// Chunking strategy.
    pub training_type: TrainingType,
    /// Custom QA-split prompt; must follow the server template exactly,
    /// so usually left unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Records to ingest.
    pub data: Vec<PushData>,
}

impl PushDataRequest {
    /// Create a request with the required fields.
    pub fn new(
        collection_id: impl Into<String>,
        training_type: TrainingType,
        data: Vec<PushData>,
    ) -> Self {
        Self {
            collection_id: collection_id.into(),
            training_type,
            prompt: None,
            data,
        }
    }
}

/// Request to list records in a collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDataRequest {
    /// Collection to list.
    pub collection_id: String,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    /// Page size, capped at 30 by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Fuzzy search text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl ListDataRequest {
    /// Create a request for a collection.
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            page_num: None,
            page_size: None,
            search_text: None,
        }
    }
}

/// Request to update a single record.
///
/// Updating `q`/`a` refreshes the default index when one exists.
#[derive(Debug, Clone, Default)]
pub struct UpdateDataRequest {
    /// New primary text.
    pub q: Option<String>,
    /// New auxiliary text.
    pub a: Option<String>,
    /// Replacement index entries.
    pub indexes: Option<Vec<DataIndex>>,
}

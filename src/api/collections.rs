//! Collections API.

use serde::Serialize;

use crate::api::IdQuery;
use crate::client::FastGptClient;
use crate::error::Result;
use crate::types::{
    CreateCollectionRequest, CreateLinkCollectionRequest, CreateTextCollectionRequest, JsonObject,
    UpdateCollectionRequest,
};

const COLLECTION_CREATE: &str = "api/core/dataset/collection/create";
const COLLECTION_CREATE_TEXT: &str = "api/core/dataset/collection/create/text";
const COLLECTION_CREATE_LINK: &str = "api/core/dataset/collection/create/link";
const COLLECTION_DETAIL: &str = "api/core/dataset/collection/detail";
const COLLECTION_LIST: &str = "api/core/dataset/collection/list";
const COLLECTION_UPDATE: &str = "api/core/dataset/collection/update";
const COLLECTION_DELETE: &str = "api/core/dataset/collection/delete";

/// Query parameters for listing collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCollectionsQuery {
    /// Dataset to list collections from.
    pub dataset_id: String,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    /// Page size, capped at 30 by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Parent ID; the root level when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Fuzzy search text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl ListCollectionsQuery {
    /// Create a query for a dataset.
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            page_num: None,
            page_size: None,
            parent_id: None,
            search_text: None,
        }
    }
}

/// The update endpoint takes the collection id in the body, not the path.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCollectionBody<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Collections API client.
pub struct CollectionsApi {
    client: FastGptClient,
}

impl CollectionsApi {
    pub(crate) fn new(client: FastGptClient) -> Self {
        Self { client }
    }

    /// Create an empty collection.
    pub async fn create(&self, request: CreateCollectionRequest) -> Result<JsonObject> {
        self.client.post(COLLECTION_CREATE, &request).await
    }

    /// Create a collection from raw text.
    pub async fn create_text(&self, request: CreateTextCollectionRequest) -> Result<JsonObject> {
        self.client.post(COLLECTION_CREATE_TEXT, &request).await
    }

    /// Create a collection from a web link.
    pub async fn create_link(&self, request: CreateLinkCollectionRequest) -> Result<JsonObject> {
        self.client.post(COLLECTION_CREATE_LINK, &request).await
    }

    /// Get a collection by ID.
    pub async fn get(&self, id: &str) -> Result<JsonObject> {
        self.client
            .get_with_query(COLLECTION_DETAIL, &IdQuery { id })
            .await
    }

    /// List collections in a dataset.
    pub async fn list(&self, query: ListCollectionsQuery) -> Result<JsonObject> {
        self.client.get_with_query(COLLECTION_LIST, &query).await
    }

    /// Update a collection's name or parent.
    pub async fn update(&self, id: &str, request: UpdateCollectionRequest) -> Result<JsonObject> {
        let body = UpdateCollectionBody {
            id,
            parent_id: request.parent_id.as_deref(),
            name: request.name.as_deref(),
        };
        self.client.put(COLLECTION_UPDATE, &body).await
    }

    /// Delete a collection.
    pub async fn delete(&self, id: &str) -> Result<JsonObject> {
        self.client
            .delete_with_query(COLLECTION_DELETE, &IdQuery { id })
            .await
    }
}

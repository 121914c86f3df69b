//! Data records API.

use serde::Serialize;

use crate::api::IdQuery;
use crate::client::FastGptClient;
use crate::error::Result;
use crate::types::{DataIndex, JsonObject, ListDataRequest, PushDataRequest, UpdateDataRequest};

const DATA_PUSH: &str = "api/core/dataset/data/pushData";
const DATA_LIST: &str = "api/core/dataset/data/list";
const DATA_DETAIL: &str = "api/core/dataset/data/detail";
const DATA_UPDATE: &str = "api/core/dataset/data/update";
const DATA_DELETE: &str = "api/core/dataset/data/delete";

/// The update endpoint takes the record id in the body, not the path.
#[derive(Serialize)]
struct UpdateDataBody<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    a: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indexes: Option<&'a [DataIndex]>,
}

/// Data records API client.
pub struct DataApi {
    client: FastGptClient,
}

impl DataApi {
    pub(crate) fn new(client: FastGptClient) -> Self {
        Self { client }
    }

    /// Push a batch of records into a collection.
    pub async fn push(&self, request: PushDataRequest) -> Result<JsonObject> {
        self.client.post(DATA_PUSH, &request).await
    }

    /// List records in a collection. The upstream API takes the listing
    /// parameters as a POST body.
    pub async fn list(&self, request: ListDataRequest) -> Result<JsonObject> {
        self.client.post(DATA_LIST, &request).await
    }

    /// Get a record by ID.
    pub async fn get(&self, id: &str) -> Result<JsonObject> {
        self.client
            .get_with_query(DATA_DETAIL, &IdQuery { id })
            .await
    }

    /// Update a record.
    pub async fn update(&self, id: &str, request: UpdateDataRequest) -> Result<JsonObject> {
        let body = UpdateDataBody {
            id,
            q: request.q.as_deref(),
            a: request.a.as_deref(),
            indexes: request.indexes.as_deref(),
        };
        self.client.put(DATA_UPDATE, &body).await
    }

    /// Delete a record.
    pub async fn delete(&self, id: &str) -> Result<JsonObject> {
        self.client
            .delete_with_query(DATA_DELETE, &IdQuery { id })
            .await
    }
}

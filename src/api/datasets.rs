//! Datasets API.

use crate::api::IdQuery;
use crate::client::FastGptClient;
use crate::error::Result;
use crate::types::{CreateDatasetRequest, JsonObject, SearchTestRequest};

const DATASET_CREATE: &str = "api/core/dataset/create";
const DATASET_DETAIL: &str = "api/core/dataset/detail";
const DATASET_LIST: &str = "api/core/dataset/list";
const DATASET_DELETE: &str = "api/core/dataset/delete";
const DATASET_SEARCH_TEST: &str = "api/core/dataset/searchTest";

/// Query parameters for listing datasets.
#[derive(Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDatasetsQuery {
    /// Parent ID; the root level when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Datasets API client.
pub struct DatasetsApi {
    client: FastGptClient,
}

impl DatasetsApi {
    pub(crate) fn new(client: FastGptClient) -> Self {
        Self { client }
    }

    /// Create a dataset.
    pub async fn create(&self, request: CreateDatasetRequest) -> Result<JsonObject> {
        self.client.post(DATASET_CREATE, &request).await
    }

    /// List datasets under a parent, or at the root when `parent_id` is
    /// absent.
    pub async fn list(&self, parent_id: Option<&str>) -> Result<JsonObject> {
        let query = ListDatasetsQuery {
            parent_id: parent_id.map(str::to_string),
        };
        self.client.get_with_query(DATASET_LIST, &query).await
    }

    /// Get a dataset by ID.
    pub async fn get(&self, id: &str) -> Result<JsonObject> {
        self.client
            .get_with_query(DATASET_DETAIL, &IdQuery { id })
            .await
    }

    /// Delete a dataset.
    pub async fn delete(&self, id: &str) -> Result<JsonObject> {
        self.client
            .delete_with_query(DATASET_DELETE, &IdQuery { id })
            .await
    }

    /// Run a search test against a dataset's indexed content.
    pub async fn search_test(&self, request: SearchTestRequest) -> Result<JsonObject> {
        self.client.post(DATASET_SEARCH_TEST, &request).await
    }
}

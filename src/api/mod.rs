//! API endpoint implementations.

mod chat;
mod collections;
mod data;
mod datasets;

pub use chat::ChatApi;
pub use collections::{CollectionsApi, ListCollectionsQuery};
pub use data::DataApi;
pub use datasets::{DatasetsApi, ListDatasetsQuery};

/// Query string carrying a single resource id (`?id=...`).
#[derive(serde::Serialize)]
pub(crate) struct IdQuery<'a> {
    pub(crate) id: &'a str,
}

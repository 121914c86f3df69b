//! HTTP client SDK for the FastGPT knowledge-base and chat API.
//!
//! This crate provides a typed client for the FastGPT REST endpoints:
//! chat completions (plain and streaming), datasets, collections, and
//! data records. Requests are typed; responses come back as generic
//! JSON objects since the service does not guarantee a response schema.
//!
//! # Example
//!
//! ```no_run
//! use fastgpt_client::{ChatRequest, CreateDatasetRequest, FastGptClient, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client; the chat endpoint uses its own key
//! let client = FastGptClient::builder()
//!     .api_key("dataset-key")
//!     .chat_api_key("app-key")
//!     .build()?;
//!
//! // Create a knowledge base
//! let dataset = client
//!     .datasets()
//!     .create(CreateDatasetRequest::new("api_test"))
//!     .await?;
//! println!("created: {:?}", dataset.get("data"));
//!
//! // Ask a question
//! let reply = client.chat().message("hi!").await?;
//! println!("reply: {:?}", reply.get("choices"));
//!
//! // Stream a response
//! use futures::StreamExt;
//! use tokio::pin;
//! let stream = client
//!     .chat()
//!     .completions_stream(&ChatRequest::new("tell me a story"))
//!     .await?;
//! pin!(stream);
//! while let Some(chunk) = stream.next().await {
//!     print!("{}", String::from_utf8_lossy(&chunk?));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API coverage
//!
//! - **Chat**: completions, raw SSE streaming, parsed SSE events
//! - **Datasets**: create, list, get, delete, search test
//! - **Collections**: create (empty, text, link), get, list, update, delete
//! - **Data records**: push, list, get, update, delete
//!
//! Every operation authenticates with a bearer token: the chat endpoint
//! uses the chat key, everything else the general key.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, FastGptClient};
pub use error::{Error, Result};
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{ListCollectionsQuery, ListDatasetsQuery};

//! End-to-end request-shape tests against a mock server.

use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fastgpt_client::{
    ChatRequest, CreateDatasetRequest, CreateTextCollectionRequest, FastGptClient,
    ListCollectionsQuery, PushData, PushDataRequest, SearchMode, SearchTestRequest, TrainingType,
    UpdateDataRequest,
};

fn test_client(server: &MockServer) -> FastGptClient {
    FastGptClient::builder()
        .base_url(server.uri())
        .api_key("general-key")
        .chat_api_key("chat-key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn chat_completions_uses_chat_key_and_sends_wire_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer chat-key"))
        .and(body_json(json!({
            "stream": false,
            "detail": false,
            "messages": [{"content": "hi!", "role": "user"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "chat-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let reply = client
        .chat()
        .completions(&ChatRequest::new("hi!"))
        .await
        .unwrap();

    assert_eq!(reply["id"], "chat-1");
}

#[tokio::test]
async fn dataset_operations_use_the_general_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/core/dataset/list"))
        .and(header("Authorization", "Bearer general-key"))
        .and(query_param_is_missing("parentId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let datasets = client.datasets().list(None).await.unwrap();

    assert!(datasets["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dataset_list_sends_parent_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/core/dataset/list"))
        .and(query_param("parentId", "folder-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.datasets().list(Some("folder-1")).await.unwrap();
}

#[tokio::test]
async fn dataset_delete_sends_id_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/core/dataset/delete"))
        .and(query_param("id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let reply = client.datasets().delete("abc").await.unwrap();

    assert_eq!(reply["data"], true);
}

#[tokio::test]
async fn create_dataset_posts_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/core/dataset/create"))
        .and(body_json(json!({"name": "api_test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "ds1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .datasets()
        .create(CreateDatasetRequest::new("api_test"))
        .await
        .unwrap();
}

#[tokio::test]
async fn create_text_collection_sends_exactly_the_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/core/dataset/collection/create/text"))
        .and(header("Authorization", "Bearer general-key"))
        .and(body_json(json!({
            "text": "text_text",
            "datasetId": "ds1",
            "name": "test",
            "trainingType": "chunk",
            "chunkSize": 500,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "col1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = CreateTextCollectionRequest::new("text_text", "ds1", "test", TrainingType::Chunk)
        .with_chunk_size(500);
    client.collections().create_text(request).await.unwrap();
}

#[tokio::test]
async fn collection_list_builds_query_string_without_absent_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/core/dataset/collection/list"))
        .and(query_param("datasetId", "ds1"))
        .and(query_param("pageNum", "1"))
        .and(query_param("pageSize", "10"))
        .and(query_param("searchText", "hi"))
        .and(query_param_is_missing("parentId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut query = ListCollectionsQuery::new("ds1");
    query.page_num = Some(1);
    query.page_size = Some(10);
    query.search_text = Some("hi".to_string());
    client.collections().list(query).await.unwrap();
}

#[tokio::test]
async fn push_data_posts_records_with_absent_fields_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/core/dataset/data/pushData"))
        .and(body_json(json!({
            "collectionId": "col1",
            "trainingType": "chunk",
            "data": [{"q": "hi!", "a": "hello world!"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"insertLen": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = PushDataRequest::new(
        "col1",
        TrainingType::Chunk,
        vec![PushData::new("hi!").with_answer("hello world!")],
    );
    let reply = client.data().push(request).await.unwrap();

    assert_eq!(reply["insertLen"], 1);
}

#[tokio::test]
async fn update_data_puts_id_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/core/dataset/data/update"))
        .and(body_json(json!({"id": "data1", "q": "new_q", "a": "new_a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = UpdateDataRequest {
        q: Some("new_q".to_string()),
        a: Some("new_a".to_string()),
        indexes: None,
    };
    client.data().update("data1", request).await.unwrap();
}

#[tokio::test]
async fn search_test_posts_fractional_similarity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/core/dataset/searchTest"))
        .and(body_json(json!({
            "datasetId": "ds1",
            "text": "hi",
            "limit": 100,
            "similarity": 0.5,
            "searchMode": "embedding",
            "usingReRank": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut request = SearchTestRequest::new("ds1", "hi");
    request.limit = Some(100);
    request.similarity = Some(0.5);
    request.search_mode = Some(SearchMode::Embedding);
    client.datasets().search_test(request).await.unwrap();
}

#[tokio::test]
async fn chat_stream_passes_sse_body_through_byte_exact() {
    let server = MockServer::start().await;
    let sse_body = "data: one\n\ndata: two\n\n";
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer chat-key"))
        .and(body_json(json!({
            "stream": true,
            "detail": false,
            "messages": [{"content": "hi!", "role": "user"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sse_body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stream = client
        .chat()
        .completions_stream(&ChatRequest::new("hi!"))
        .await
        .unwrap();

    let mut stream = Box::pin(stream);
    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }

    assert_eq!(collected, sse_body.as_bytes());
}

#[tokio::test]
async fn chat_event_stream_parses_data_events_and_skips_done() {
    let server = MockServer::start().await;
    let sse_body =
        "data: {\"content\": \"he\"}\n\ndata: {\"content\": \"llo\"}\n\ndata: [DONE]\n\n";
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sse_body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stream = client
        .chat()
        .completions_events(&ChatRequest::new("hi!"))
        .await
        .unwrap();

    let events: Vec<_> = Box::pin(stream)
        .map(|event| event.unwrap())
        .collect()
        .await;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["content"], "he");
    assert_eq!(events[1]["content"], "llo");
}

#[tokio::test]
async fn non_success_response_becomes_the_single_error_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/core/dataset/detail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.datasets().get("ds1").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("request failed"));
    assert!(err.message().contains("500"));
    assert!(err.message().contains("boom"));
}

#[tokio::test]
async fn streaming_request_with_error_status_fails_before_returning_a_stream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .chat()
        .completions_stream(&ChatRequest::new("hi!"))
        .await
        .err()
        .expect("stream call should fail");

    assert!(err.message().contains("401"));
}

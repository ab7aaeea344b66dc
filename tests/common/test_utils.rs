use ai_parser::{
    config::LlmConfig,
    llm::OpenAiClient,
    parser::TransactionParser,
    server,
};
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_API_KEY: &str = "test-api-key";

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A valid record with deliberately uneven formatting, so passthrough can be
/// checked byte for byte.
pub const VALID_RECORD: &str = "{\n  \"amount\": 50,\n  \"is_income\": false,\n  \"category\":\"交通费用\",\n  \"is_outstanding\": false,\n  \"counterparty\": null,\n  \"input_text\": \"花了50元打车\"\n}";

/// LLM config pointing at `base_url` (usually a wiremock server).
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        model: "gpt-3.5-turbo".to_string(),
    }
}

/// The `/v1` base URL for a wiremock server.
pub fn api_base(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Router served at `/`, talking to a real `OpenAiClient` at `base_url`.
pub fn create_test_app(base_url: &str) -> Router {
    create_test_app_at(base_url, "/")
}

pub fn create_test_app_at(base_url: &str, route: &str) -> Router {
    let client = OpenAiClient::new(create_test_llm_config(base_url));
    let parser = Arc::new(TransactionParser::new(Arc::new(client)));
    server::router(parser, route)
}

/// Chat-completion body as the API returns it, with `content` as the first
/// choice's message.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
    })
}

/// Mounts a successful completion returning `content`.
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! A mock Openrouter gateway.

pub use httpmock::{Method::POST, Mock, MockServer};
use serde_json::{Value, json};

/// Path of the chat completions endpoint, relative to the base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// A successful completion response whose first choice carries `content`.
#[must_use]
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-1700000000-test",
        "provider": "Mock",
        "model": "mock/model",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "native_finish_reason": "stop",
            "message": {
                "role": "assistant",
                "content": content,
                "reasoning": null
            }
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

/// An error response body as returned by the gateway.
#[must_use]
pub fn error_body(code: u16, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Mock a completion that replies with `content` for the given API key.
pub fn mock_completion<'a>(server: &'a MockServer, api_key: &str, content: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_COMPLETIONS_PATH)
            .header("authorization", format!("Bearer {api_key}"))
            .header("content-type", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(completion_body(content));
    })
}

/// Mock a failing completion with the given status and raw body.
pub fn mock_failure<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(status).body(body);
    })
}

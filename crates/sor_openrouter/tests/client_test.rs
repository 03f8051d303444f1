use std::collections::HashMap;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use sor_openrouter::{
    ChatCompletion, Client, Config, Error, ModelId, ReasoningEffort,
    types::chat::{SystemMessage, UserMessage},
};
use sor_schema::describe_record;
use sor_test::mock::{
    CHAT_COMPLETIONS_PATH, MockServer, POST, error_body, mock_completion, mock_failure,
};

const API_KEY: &str = "test-api-key";

#[derive(Debug, PartialEq, Deserialize)]
pub struct TestResponse {
    pub summary: String,
    pub tags: Vec<String>,
}

describe_record!(TestResponse {
    pub summary: String = "summary",
    pub tags: Vec<String> = "tags",
});

fn client(server: &MockServer) -> Client {
    Client::new(Config::default().with_base_url(server.base_url()))
}

fn request() -> ChatCompletion<TestResponse> {
    ChatCompletion::new()
        .model(ModelId::GEMINI_2_5_FLASH_LITE)
        .message(UserMessage::text("Test"))
}

#[test_log::test]
fn test_chat_completion_success() -> sor_test::Result {
    let server = MockServer::start();
    let mock = mock_completion(
        &server,
        API_KEY,
        r#"{"summary": "It works", "tags": ["a", "b"]}"#,
    );

    let response = client(&server).execute(&request(), API_KEY)?;

    assert_eq!(response, TestResponse {
        summary: "It works".to_owned(),
        tags: vec!["a".to_owned(), "b".to_owned()],
    });
    mock.assert();

    Ok(())
}

#[test_log::test]
fn test_chat_completion_sends_structured_body() -> sor_test::Result {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_COMPLETIONS_PATH)
            .header("x-title", "sor-tests")
            .header("referer", "https://example.com")
            .json_body(json!({
                "model": "anthropic/claude-sonnet-4.5",
                "messages": [
                    { "role": "system", "content": "You are a geography expert." },
                    {
                        "role": "user",
                        "content": [{ "type": "text", "text": "Largest city?" }]
                    }
                ],
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": "response",
                        "strict": true,
                        "schema": {
                            "type": "object",
                            "properties": {
                                "summary": { "type": "string" },
                                "tags": { "type": "array", "items": { "type": "string" } }
                            },
                            "required": ["summary", "tags"],
                            "additionalProperties": false
                        }
                    }
                },
                "reasoning": { "effort": "xhigh" }
            }));
        then.status(200)
            .json_body(sor_test::mock::completion_body(
                r#"{"summary": "TOKYO", "tags": []}"#,
            ));
    });

    let client = Client::new(
        Config::default()
            .with_base_url(server.base_url())
            .with_app_name("sor-tests")
            .with_app_referrer("https://example.com"),
    );

    let request = ChatCompletion::<TestResponse>::new()
        .model(ModelId::CLAUDE_SONNET_4_5)
        .append_messages([SystemMessage::new("You are a geography expert.")])
        .message(UserMessage::text("Largest city?"))
        .reasoning_effort(ReasoningEffort::Xhigh);

    let response = client.execute(&request, API_KEY)?;

    assert_eq!(response.summary, "TOKYO");
    assert!(response.tags.is_empty());
    mock.assert();

    Ok(())
}

#[test_log::test]
fn test_chat_completion_internal_server_error() {
    let server = MockServer::start();
    let mock = mock_failure(
        &server,
        500,
        &error_body(500, "Internal server error").to_string(),
    );

    let error = client(&server)
        .execute(&request(), API_KEY)
        .unwrap_err();

    assert!(
        error
            .to_string()
            .contains("API error: 500 - Internal server error")
    );
    assert_matches!(error, Error::Api { code: 500, .. });
    mock.assert();
}

#[test_log::test]
fn test_chat_completion_unstructured_error_body() {
    let server = MockServer::start();
    mock_failure(&server, 502, "Bad gateway");

    let error = client(&server)
        .execute(&request(), API_KEY)
        .unwrap_err();

    assert_matches!(error, Error::Api { code: 502, message } if message == "Bad gateway");
}

#[test_log::test]
fn test_chat_completion_decode_error() {
    let server = MockServer::start();
    mock_completion(
        &server,
        API_KEY,
        r#"{"summary": 123, "tags": ["go", "test"]}"#,
    );

    let error = client(&server)
        .execute(&request(), API_KEY)
        .unwrap_err();

    assert!(error.to_string().contains("error unmarshaling response"));
    assert_matches!(error, Error::Decode(_));
}

#[test_log::test]
fn test_chat_completion_empty_choices() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(200).json_body(json!({ "choices": [] }));
    });

    let error = client(&server)
        .execute(&request(), API_KEY)
        .unwrap_err();

    assert_matches!(error, Error::MissingContent);
}

#[test_log::test]
fn test_schema_generation_error_skips_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(200).json_body(json!({ "choices": [] }));
    });

    let request = ChatCompletion::<HashMap<String, String>>::new()
        .model(ModelId::GPT_5_2)
        .message(UserMessage::text("Test"));

    let error = client(&server).execute(&request, API_KEY).unwrap_err();

    assert!(error.to_string().contains("error generating schema"));
    assert_matches!(error, Error::Schema(sor_schema::Error::UnsupportedKind { shape: "map" }));
    mock.assert_hits(0);
}

#[test_log::test]
fn test_transport_error() {
    let client = Client::new(Config::default().with_base_url("http://127.0.0.1:1"));

    let error = client.execute(&request(), API_KEY).unwrap_err();

    assert_matches!(error, Error::Request(_));
}

#[test_log::test]
fn test_shared_client_is_reused() {
    assert!(std::ptr::eq(Client::shared(), Client::shared()));
}

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn minimal_completion() {
    let completion: ChatCompletion = serde_json::from_value(json!({
        "choices": [{ "message": { "content": "{\"ok\":true}" } }]
    }))
    .unwrap();

    assert_eq!(completion.content(), Some("{\"ok\":true}"));
    assert_eq!(completion.usage, None);
    assert_eq!(completion.choices[0].finish_reason, None);
}

#[test]
fn full_completion() {
    let completion: ChatCompletion = serde_json::from_value(json!({
        "id": "gen-123",
        "provider": "Google",
        "model": "google/gemini-2.5-flash-lite",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "native_finish_reason": "STOP",
            "message": { "role": "assistant", "content": "{}", "reasoning": null }
        }],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 3,
            "total_tokens": 15,
            "cost": 0.0001
        }
    }))
    .unwrap();

    assert_eq!(completion.provider.as_deref(), Some("Google"));
    assert_eq!(completion.choices[0].finish_reason, Some(FinishReason::Stop));
    assert_eq!(completion.usage.map(|u| u.total_tokens), Some(15));
}

#[test]
fn unknown_finish_reason() {
    let choice: Choice = serde_json::from_value(json!({
        "finish_reason": "tool_calls",
        "message": { "content": null }
    }))
    .unwrap();

    assert_eq!(choice.finish_reason, Some(FinishReason::Unknown));
    assert_eq!(choice.message.content, None);
}

#[test]
fn error_envelope() {
    let envelope: ErrorEnvelope = serde_json::from_value(json!({
        "error": {
            "code": 400,
            "message": "Invalid model",
            "param": "model",
            "type": "invalid_request_error"
        }
    }))
    .unwrap();

    assert_eq!(envelope.error.code, Some(json!(400)));
    assert_eq!(envelope.error.message, "Invalid model");
    assert_eq!(envelope.error.param.as_deref(), Some("model"));
    assert_eq!(envelope.error.kind.as_deref(), Some("invalid_request_error"));

    let envelope: ErrorEnvelope =
        serde_json::from_value(json!({ "error": { "message": "Internal server error" } }))
            .unwrap();
    assert_eq!(envelope.error.message, "Internal server error");
    assert_eq!(envelope.error.code, None);
}

#[test]
fn usage_missing_counters_default_to_zero() {
    let usage: Usage = serde_json::from_value(json!({
        "prompt_tokens": 3,
        "completion_tokens": 2
    }))
    .unwrap();

    assert_eq!(usage, Usage {
        prompt_tokens: 3,
        completion_tokens: 2,
        total_tokens: 0,
        cost: None,
    });
}

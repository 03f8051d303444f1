use serde::Deserialize;
use serde_json::Value;

/// A non-streaming chat completion response.
///
/// Only `choices` is required, the remaining fields depend on the provider
/// serving the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletion {
    /// The ID of the response.
    #[serde(default)]
    pub id: Option<String>,

    /// The name of the provider serving the response.
    ///
    /// This can differ from the model provider, e.g. if the model provider is
    /// Anthropic, but the provider server is Amazon AWS.
    #[serde(default)]
    pub provider: Option<String>,

    /// The model used to generate the response.
    #[serde(default)]
    pub model: Option<String>,

    /// A list of "choices" made by the model in response to the prompt.
    pub choices: Vec<Choice>,

    /// Usage statistics for the completion request.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// The message content of the first choice.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,

    /// The reply. For structured requests this is itself a JSON document.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub reasoning: Option<String>,
}

/// The reason why the assistant stopped generating tokens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The assistant has stopped generating tokens.
    Stop,

    /// The assistant has reached the maximum length of accepted tokens.
    Length,

    /// The assistant has filtered out the content due to a flag from content
    /// filters.
    ContentFilter,

    /// The assistant encountered an error generating the response.
    Error,

    /// Undefined/unknown finish reason.
    #[serde(other)]
    Unknown,
}

/// Token accounting. Providers may leave out any counter, missing ones are
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub cost: Option<f64>,
}

/// Error body returned with a non-success status code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorResponse,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    /// Numeric or symbolic error code, depending on the provider.
    #[serde(default)]
    pub code: Option<Value>,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub param: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

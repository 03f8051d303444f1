use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sor_schema::SchemaNode;

use super::{chat::Message, model::ModelId};
use crate::error::Error;

/// Name under which the response schema is registered.
const RESPONSE_SCHEMA_NAME: &str = "response";

/// Chat completion request body matching the `OpenRouter` API schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody<'a> {
    /// The model ID to use.
    pub model: &'a ModelId,

    /// The list of messages, in order.
    pub messages: &'a [Message],

    /// The format the model must respond in.
    pub response_format: ResponseFormat,

    /// Reasoning configuration, omitted when no effort is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchema },
}

impl ResponseFormat {
    /// A strict JSON schema response format.
    #[must_use]
    pub fn json_schema(schema: SchemaNode) -> Self {
        Self::JsonSchema {
            json_schema: JsonSchema {
                name: RESPONSE_SCHEMA_NAME.to_owned(),
                strict: true,
                schema,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchema {
    pub name: String,
    pub strict: bool,
    pub schema: SchemaNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reasoning {
    pub effort: ReasoningEffort,
}

/// How much the model deliberates before answering.
///
/// See: <https://openrouter.ai/docs/api/api-reference/chat/send-chat-completion-request#request.body.reasoning>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Xhigh,
    High,
    Medium,
    Low,
    Minimal,
    None,
}

impl ReasoningEffort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xhigh => "xhigh",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Minimal => "minimal",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xhigh" => Ok(Self::Xhigh),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "minimal" => Ok(Self::Minimal),
            "none" => Ok(Self::None),
            _ => Err(Error::Config(format!("unknown reasoning effort: {s:?}"))),
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

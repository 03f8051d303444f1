use std::{fmt, marker::PhantomData};

use serde::{Serialize, Serializer, de::DeserializeOwned, ser::Error as _};
use sor_schema::{Describe, SchemaNode, generate_for};

use crate::{
    client::Client,
    error::Result,
    types::{
        chat::Message,
        model::ModelId,
        request::{Reasoning, ReasoningEffort, RequestBody, ResponseFormat},
    },
};

/// A chat completion request whose reply is decoded into `T`.
///
/// The JSON schema of `T` is generated when the request body is built, and
/// sent along as a strict `json_schema` response format.
pub struct ChatCompletion<T> {
    model: ModelId,
    messages: Vec<Message>,
    reasoning: Option<ReasoningEffort>,
    target: PhantomData<fn() -> T>,
}

impl<T> ChatCompletion<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: ModelId::default(),
            messages: vec![],
            reasoning: None,
            target: PhantomData,
        }
    }

    /// Set the model to use.
    #[must_use]
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = model.into();
        self
    }

    /// Append a single message.
    #[must_use]
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Append messages, keeping their order.
    #[must_use]
    pub fn append_messages<I>(mut self, messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.messages.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Set or clear the reasoning effort.
    #[must_use]
    pub fn reasoning_effort(mut self, effort: impl Into<Option<ReasoningEffort>>) -> Self {
        self.reasoning = effort.into();
        self
    }

    #[must_use]
    pub fn model_id(&self) -> &ModelId {
        &self.model
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn reasoning(&self) -> Option<ReasoningEffort> {
        self.reasoning
    }
}

impl<T: Describe> ChatCompletion<T> {
    /// The schema of the expected result.
    pub fn schema(&self) -> Result<SchemaNode> {
        generate_for::<T>().map_err(Into::into)
    }

    /// Build the request body, generating the result schema.
    pub fn body(&self) -> Result<RequestBody<'_>> {
        Ok(RequestBody {
            model: &self.model,
            messages: &self.messages,
            response_format: ResponseFormat::json_schema(self.schema()?),
            reasoning: self.reasoning.map(|effort| Reasoning { effort }),
        })
    }
}

impl<T: Describe + DeserializeOwned> ChatCompletion<T> {
    /// Send the request with the shared client.
    pub fn generate_content(&self, api_key: &str) -> Result<T> {
        Client::shared().execute(self, api_key)
    }
}

impl<T> Default for ChatCompletion<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ChatCompletion<T> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            messages: self.messages.clone(),
            reasoning: self.reasoning,
            target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ChatCompletion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletion")
            .field("model", &self.model)
            .field("messages", &self.messages)
            .field("reasoning", &self.reasoning)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Describe> Serialize for ChatCompletion<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.body()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;

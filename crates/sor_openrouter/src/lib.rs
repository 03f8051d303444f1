//! Structured chat completions over the OpenRouter API.
//!
//! A [`ChatCompletion`] is typed by the result it expects. When sent, the
//! JSON schema of that type is attached as the response format, and the
//! model's reply is decoded back into it.
//!
//! ```ignore
//! use serde::Deserialize;
//! use sor_openrouter::{ChatCompletion, ModelId, ReasoningEffort, types::chat::UserMessage};
//!
//! #[derive(Deserialize)]
//! pub struct Answer {
//!     pub answer: String,
//! }
//!
//! sor_schema::describe_record!(Answer { pub answer: String = "answer" });
//!
//! let answer: Answer = ChatCompletion::new()
//!     .model(ModelId::CLAUDE_SONNET_4_5)
//!     .message(UserMessage::text("Which city is larger, Paris or Tokyo?"))
//!     .reasoning_effort(ReasoningEffort::Low)
//!     .generate_content(&api_key)?;
//! ```

mod client;
mod completion;
mod config;
mod error;
pub mod types;

pub use client::Client;
pub use completion::ChatCompletion;
pub use config::Config;
pub use error::Error;
pub use types::{model::ModelId, request::ReasoningEffort};

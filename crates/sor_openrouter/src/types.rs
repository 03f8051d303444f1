//! Wire types of the OpenRouter chat completions API.

pub mod chat;
pub mod model;
pub mod request;
pub mod response;

use std::{collections::HashMap, sync::LazyLock};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, REFERER};
use serde::de::DeserializeOwned;
use sor_schema::Describe;
use tracing::{debug, error, trace};

use crate::{
    completion::ChatCompletion,
    config::Config,
    error::{Error, Result},
    types::response::{self, ErrorEnvelope},
};

const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

static SHARED: LazyLock<Client> = LazyLock::new(|| Client::new(Config::from_env()));

/// A blocking Openrouter client.
///
/// Cloning is cheap, clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http_client: reqwest::blocking::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Client {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::blocking::Client::new(),
        }
    }

    /// The process-wide client, configured from the environment on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a chat completion request and decode the reply into `T`.
    ///
    /// The schema of `T` is generated before anything is sent, a type that
    /// cannot be described fails without a network call.
    pub fn execute<T>(&self, request: &ChatCompletion<T>, api_key: &str) -> Result<T>
    where
        T: Describe + DeserializeOwned,
    {
        let body = request.body()?;
        let payload = serde_json::to_vec(&body).map_err(Error::Encode)?;

        let url = format!(
            "{}{CHAT_COMPLETIONS_PATH}",
            self.config.base_url.trim_end_matches('/')
        );
        let headers = self.build_headers(api_key)?;

        trace!(
            %url,
            headers = ?redacted(&headers),
            model = %body.model,
            messages = body.messages.len(),
            "Triggering request."
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .body(payload)
            .send()?;

        let status = response.status();
        trace!(
            status = status.as_u16(),
            content_length = response.content_length().unwrap_or_default(),
            "Received response."
        );

        let body = response.text()?;
        if status.is_client_error() || status.is_server_error() {
            let status = status.as_u16();
            error!(status, %body, "Unexpected response.");

            return Err(api_error(status, &body));
        }

        decode(&body)
    }

    /// Build HTTP headers required for making API calls.
    /// Returns an error if any header value cannot be constructed.
    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers.insert(
            AUTHORIZATION,
            format!("Bearer {api_key}")
                .parse()
                .map_err(|e| Error::Config(format!("Invalid API key header format: {e}")))?,
        );

        if let Some(referer) = &self.config.app_referrer {
            headers.insert(
                REFERER,
                referer
                    .parse()
                    .map_err(|e| Error::Config(format!("Invalid Referer header: {e}")))?,
            );
        }

        if let Some(title) = &self.config.app_name {
            headers.insert(
                "X-Title",
                title
                    .parse()
                    .map_err(|e| Error::Config(format!("Invalid Title header: {e}")))?,
            );
        }

        Ok(headers)
    }
}

fn redacted(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(k, v)| {
            if *k == AUTHORIZATION {
                return (k.to_string(), "[REDACTED]".to_owned());
            }

            (k.to_string(), v.to_str().unwrap_or_default().to_owned())
        })
        .collect()
}

/// Turn a non-success response into [`Error::Api`].
///
/// Falls back to the raw body when it is not a structured error.
fn api_error(status: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => error.message,
        Err(_) => body.trim().to_owned(),
    };

    Error::Api {
        code: status,
        message,
    }
}

/// Decode the first choice's content into `T`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let completion: response::ChatCompletion = serde_json::from_str(body).map_err(Error::Decode)?;

    if let Some(usage) = &completion.usage {
        debug!(
            provider = completion.provider.as_deref().unwrap_or_default(),
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            cost = usage.cost.unwrap_or_default(),
            "Completion usage."
        );
    }

    let content = completion.content().ok_or(Error::MissingContent)?;
    serde_json::from_str(content).map_err(Error::Decode)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

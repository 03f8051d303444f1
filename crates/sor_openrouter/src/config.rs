//! Openrouter client configuration.

use std::env;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Openrouter client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Environment variable that contains the API key.
    pub api_key_env: String,

    /// Application name sent to Openrouter as `X-Title`.
    pub app_name: Option<String>,

    /// Optional HTTP referrer to send with requests.
    pub app_referrer: Option<String>,

    /// The base URL to use for API requests.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key_env: "OPENROUTER_API_KEY".to_owned(),
            app_name: None,
            app_referrer: None,
            base_url: "https://openrouter.ai".to_owned(),
        }
    }
}

impl Config {
    /// The default configuration, with overrides from the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply `OPENROUTER_BASE_URL`, `OPENROUTER_APP_NAME` and
    /// `OPENROUTER_APP_REFERRER` overrides from `lookup`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(base_url) = lookup("OPENROUTER_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(app_name) = lookup("OPENROUTER_APP_NAME") {
            self.app_name = Some(app_name);
        }
        if let Some(app_referrer) = lookup("OPENROUTER_APP_REFERRER") {
            self.app_referrer = Some(app_referrer);
        }

        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    #[must_use]
    pub fn with_app_referrer(mut self, app_referrer: impl Into<String>) -> Self {
        self.app_referrer = Some(app_referrer.into());
        self
    }

    /// Read the API key from the environment variable named by
    /// [`Config::api_key_env`].
    ///
    /// The key is handed back to the caller, it is never stored.
    pub fn api_key(&self) -> Result<String> {
        env::var(&self.api_key_env).map_err(|_| Error::MissingEnv {
            var: self.api_key_env.clone(),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

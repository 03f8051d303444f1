use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// An OpenRouter model slug, e.g. `anthropic/claude-sonnet-4.5`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(Cow<'static, str>);

impl ModelId {
    pub const GEMINI_2_5_FLASH_LITE: Self = Self::from_static("google/gemini-2.5-flash-lite");
    pub const GEMINI_3_FLASH_PREVIEW: Self = Self::from_static("google/gemini-3-flash-preview");
    pub const GEMINI_3_PRO_PREVIEW: Self = Self::from_static("google/gemini-3-pro-preview");
    pub const CLAUDE_SONNET_4_5: Self = Self::from_static("anthropic/claude-sonnet-4.5");
    pub const GPT_5_2: Self = Self::from_static("openai/gpt-5.2");

    #[must_use]
    pub const fn from_static(slug: &'static str) -> Self {
        Self(Cow::Borrowed(slug))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ModelId {
    fn from(slug: &'static str) -> Self {
        Self::from_static(slug)
    }
}

impl From<String> for ModelId {
    fn from(slug: String) -> Self {
        Self(Cow::Owned(slug))
    }
}

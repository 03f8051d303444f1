pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error generating schema: {0}")]
    Schema(#[from] sor_schema::Error),

    #[error("error encoding request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    Api { code: u16, message: String },

    #[error("error unmarshaling response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error unmarshaling response: no message content in first choice")]
    MissingContent,

    #[error("client config error: {0}")]
    Config(String),

    #[error("missing env var: {var}")]
    MissingEnv { var: String },
}

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        // Good enough for testing purposes
        format!("{self:?}") == format!("{other:?}")
    }
}

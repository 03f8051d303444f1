pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The shape, or one nested inside it, has no JSON schema counterpart.
    #[error("unsupported type: {shape}")]
    UnsupportedKind { shape: &'static str },

    /// A record is reachable from its own fields.
    #[error("cyclic shape: {record} contains itself")]
    CyclicShape { record: &'static str },
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    shape::Shape,
};

/// The closed set of shape categories a schema can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,

    /// A nullable or pointer-like wrapper. Never appears in a generated
    /// schema, the wrapped kind is used instead.
    Optional,
}

impl DataKind {
    /// Resolve the kind of a shape.
    ///
    /// Maps, functions, channels and complex numbers have no schema
    /// representation and fail with [`Error::UnsupportedKind`].
    pub fn resolve(shape: &Shape) -> Result<Self> {
        match shape {
            Shape::String => Ok(Self::String),
            Shape::Integer(_) => Ok(Self::Integer),
            Shape::Number(_) => Ok(Self::Number),
            Shape::Boolean => Ok(Self::Boolean),
            Shape::Sequence(_) | Shape::FixedArray { .. } => Ok(Self::Array),
            Shape::Record(_) => Ok(Self::Object),
            Shape::Optional(_) => Ok(Self::Optional),
            Shape::Map | Shape::Function | Shape::Channel | Shape::Complex => {
                Err(Error::UnsupportedKind {
                    shape: shape.name(),
                })
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;

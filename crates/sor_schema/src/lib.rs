//! JSON schema generation for structured LLM output.
//!
//! A result type describes its shape through [`Describe`] (usually via
//! [`describe_record!`]), and [`generate`] turns that shape into a
//! [`SchemaNode`] that can be sent as a `json_schema` response format.

mod error;
mod generate;
mod kind;
mod node;
pub mod shape;

pub use error::Error;
pub use generate::{generate, generate_for};
pub use kind::DataKind;
pub use node::{NodeBody, SchemaNode};
pub use shape::{Describe, Field, FloatWidth, IntWidth, Record, Shape, ShapeFn, Tag};

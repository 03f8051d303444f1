use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    kind::DataKind,
    node::{NodeBody, SchemaNode},
    shape::{Describe, Record, Shape},
};

/// Generate the schema of a type.
pub fn generate_for<T: Describe + ?Sized>() -> Result<SchemaNode> {
    let schema = generate(&T::shape())?;
    debug!(
        shape = std::any::type_name::<T>(),
        kind = %schema.kind(),
        "Generated schema."
    );

    Ok(schema)
}

/// Generate the schema of a shape.
///
/// Any unsupported shape in the tree aborts generation, no partial schema is
/// returned.
pub fn generate(shape: &Shape) -> Result<SchemaNode> {
    Generator::default().node(shape)
}

#[derive(Debug, Default)]
struct Generator {
    /// Records on the path from the root to the current node.
    path: Vec<&'static str>,
}

impl Generator {
    fn node(&mut self, shape: &Shape) -> Result<SchemaNode> {
        let kind = DataKind::resolve(shape)?;

        match (kind, shape) {
            (DataKind::String, _) => Ok(SchemaNode::new(NodeBody::String)),
            (DataKind::Integer, _) => Ok(SchemaNode::new(NodeBody::Integer)),
            (DataKind::Number, _) => Ok(SchemaNode::new(NodeBody::Number)),
            (DataKind::Boolean, _) => Ok(SchemaNode::new(NodeBody::Boolean)),
            (DataKind::Array, Shape::Sequence(element) | Shape::FixedArray { element, .. }) => {
                self.node(&element()).map(SchemaNode::array)
            }

            // The wrapper is transparent, nullability is not recorded.
            (DataKind::Optional, Shape::Optional(inner)) => self.node(&inner()),
            (DataKind::Object, Shape::Record(record)) => self.object(record),
            _ => Err(Error::UnsupportedKind {
                shape: shape.name(),
            }),
        }
    }

    fn object(&mut self, record: &Record) -> Result<SchemaNode> {
        if self.path.contains(&record.name) {
            return Err(Error::CyclicShape {
                record: record.name,
            });
        }

        self.path.push(record.name);
        let schema = self.fields(record);
        self.path.pop();

        schema
    }

    fn fields(&mut self, record: &Record) -> Result<SchemaNode> {
        let mut properties = IndexMap::new();
        let mut required = vec![];

        for field in &record.fields {
            let Some(tag) = field.serialized() else {
                trace!(record = record.name, field = field.ident, "Skipping field.");
                continue;
            };

            if !tag.omit_empty {
                required.push(tag.name.to_owned());
            }

            let schema = self.node(&(field.shape)())?;
            properties.insert(tag.name.to_owned(), schema);
        }

        Ok(SchemaNode::object(properties, required))
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::kind::DataKind;

/// A node in a generated JSON schema.
///
/// The kind-specific parts live in [`NodeBody`], so a node can only carry
/// `items` when it is an array, and `properties` when it is an object.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Free-form description. Never set by the generator.
    pub description: Option<String>,

    /// Allowed values, in order.
    pub enum_values: Option<Vec<String>>,

    pub nullable: bool,
    pub body: NodeBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    String,
    Integer,
    Number,
    Boolean,
    Array {
        items: Box<SchemaNode>,
    },
    Object {
        /// Properties in field declaration order.
        properties: IndexMap<String, SchemaNode>,
        required: Vec<String>,
        additional_properties: bool,
    },
}

impl SchemaNode {
    #[must_use]
    pub const fn new(body: NodeBody) -> Self {
        Self {
            description: None,
            enum_values: None,
            nullable: false,
            body,
        }
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self::new(NodeBody::Array {
            items: Box::new(items),
        })
    }

    /// A closed object schema, additional properties are not allowed.
    #[must_use]
    pub const fn object(properties: IndexMap<String, Self>, required: Vec<String>) -> Self {
        Self::new(NodeBody::Object {
            properties,
            required,
            additional_properties: false,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> DataKind {
        match self.body {
            NodeBody::String => DataKind::String,
            NodeBody::Integer => DataKind::Integer,
            NodeBody::Number => DataKind::Number,
            NodeBody::Boolean => DataKind::Boolean,
            NodeBody::Array { .. } => DataKind::Array,
            NodeBody::Object { .. } => DataKind::Object,
        }
    }

    #[must_use]
    pub fn items(&self) -> Option<&Self> {
        match &self.body {
            NodeBody::Array { items } => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn properties(&self) -> Option<&IndexMap<String, Self>> {
        match &self.body {
            NodeBody::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    #[must_use]
    pub fn required(&self) -> &[String] {
        match &self.body {
            NodeBody::Object { required, .. } => required,
            _ => &[],
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind())?;

        if let Some(description) = self.description.as_ref().filter(|v| !v.is_empty()) {
            map.serialize_entry("description", description)?;
        }

        if let Some(values) = self.enum_values.as_ref().filter(|v| !v.is_empty()) {
            map.serialize_entry("enum", values)?;
        }

        match &self.body {
            NodeBody::Array { items } => map.serialize_entry("items", items)?,
            NodeBody::Object {
                properties,
                required,
                additional_properties,
            } => {
                // Always present, even without properties.
                map.serialize_entry("properties", properties)?;
                if !required.is_empty() {
                    map.serialize_entry("required", required)?;
                }
                map.serialize_entry("additionalProperties", additional_properties)?;
            }
            NodeBody::String | NodeBody::Integer | NodeBody::Number | NodeBody::Boolean => {}
        }

        if self.nullable {
            map.serialize_entry("nullable", &true)?;
        }

        map.end()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;

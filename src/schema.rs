//! Output-shape descriptors for schema-constrained generation.
//!
//! Serializes to the OpenAPI subset the Gemini `responseSchema` field
//! accepts: upper-case `type`, `properties`, `required`, `items`, `enum`,
//! plus `propertyOrdering` so the model emits fields in declaration order.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    kind: SchemaType,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    property_ordering: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
}

impl Schema {
    fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            values: Vec::new(),
            items: None,
            properties: BTreeMap::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::scalar(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::scalar(SchemaType::Number)
    }

    /// A string restricted to a closed set of values.
    pub fn enumeration(values: &[&str]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
            ..Self::scalar(SchemaType::String)
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// An object whose fields are all required, in the given order.
    pub fn object<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        let mut schema = Self::scalar(SchemaType::Object);
        for (name, field) in fields {
            schema.property_ordering.push(name.to_string());
            schema.required.push(name.to_string());
            schema.properties.insert(name.to_string(), field);
        }
        schema
    }

    /// Drop `name` from the required list.
    pub fn optional(mut self, name: &str) -> Self {
        self.required.retain(|r| r != name);
        self
    }

    pub fn kind(&self) -> SchemaType {
        self.kind
    }

    pub fn enum_values(&self) -> &[String] {
        &self.values
    }

    pub fn items(&self) -> Option<&Schema> {
        self.items.as_deref()
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> &[String] {
        &self.property_ordering
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

//! Schema snapshot types
//!
//! A [`SchemaSnapshot`] is the set of field descriptors for one resource at
//! one point in time. Snapshots are built by a loader and only ever read by
//! the rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
    /// Nested block with its own fields
    Block,
}

/// One attribute of a resource schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub force_new: bool,
    /// Element type for list, set and map fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<FieldType>,
    /// Fields of a nested block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<SchemaSnapshot>,
}

impl FieldDescriptor {
    /// Create an optional field of the given type
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            optional: true,
            computed: false,
            force_new: false,
            elem: None,
            nested: None,
        }
    }

    /// Create a required field of the given type
    pub fn required(field_type: FieldType) -> Self {
        Self {
            required: true,
            optional: false,
            ..Self::new(field_type)
        }
    }

    /// Create a nested block field
    pub fn block(fields: SchemaSnapshot) -> Self {
        Self {
            nested: Some(fields),
            ..Self::new(FieldType::Block)
        }
    }

    /// Mark the field as computed by the provider
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Mark the field as forcing resource recreation when changed
    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    /// Set the element type of a collection field
    pub fn with_elem(mut self, elem: FieldType) -> Self {
        self.elem = Some(elem);
        self
    }
}

/// Field name to descriptor mapping for a single resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSnapshot {
    fields: HashMap<String, FieldDescriptor>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        self.insert(name, field);
        self
    }

    /// Insert a field, returning the descriptor it replaced
    pub fn insert(&mut self, name: impl Into<String>, field: FieldDescriptor) -> Option<FieldDescriptor> {
        self.fields.insert(name.into(), field)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, FieldDescriptor)> for SchemaSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, FieldDescriptor)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// All resource schemas of one provider version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSchema {
    resources: HashMap<String, SchemaSnapshot>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_resource(mut self, name: impl Into<String>, schema: SchemaSnapshot) -> Self {
        self.insert(name, schema);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: SchemaSnapshot) -> Option<SchemaSnapshot> {
        self.resources.insert(name.into(), schema)
    }

    /// Get the schema of a resource
    pub fn resource(&self, name: &str) -> Option<&SchemaSnapshot> {
        self.resources.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resource names, sorted
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaSnapshot)> for ProviderSchema {
    fn from_iter<I: IntoIterator<Item = (K, SchemaSnapshot)>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

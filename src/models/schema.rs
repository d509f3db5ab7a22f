use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::FieldDescriptor;

/// One GraphQL object type with its resolved field list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectType {
    /// Schema name of the type (e.g. `User`)
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// The resolved schema handed over by the introspection layer
///
/// Serialized as a TOML manifest: a flat list of object types, each with its
/// field descriptors. This is deliberately not GraphQL SDL — every field is
/// already resolved to a name, kind and (where applicable) target type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaManifest {
    /// Object types to generate query object classes for
    #[serde(default)]
    pub types: Vec<ObjectType>,
}

impl SchemaManifest {
    /// Load a schema manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema manifest: {}", path.display()))?;

        let manifest: SchemaManifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse schema manifest: {}", path.display()))?;

        Ok(manifest)
    }
}

use serde::{Deserialize, Serialize};

/// Kind of the type a field resolves to
///
/// Schema introspection may report kinds this tool does not know about;
/// those deserialize to [`TypeKind::Other`] and are generated with the
/// generic object strategy instead of aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Leaf field (Int, String, ID, custom scalars, ...)
    Scalar,
    /// Enum-typed field, selected through a generated `*EnumObject` class
    Enum,
    /// Object-typed field, selected through a generated `*QueryObject` class
    Object,
    /// Any kind the introspection layer reports that we do not model
    #[serde(other)]
    Other,
}

/// A fully resolved field of one GraphQL object type
///
/// Produced by the schema-introspection collaborator; field names are unique
/// within one type's field list (a schema invariant, not enforced here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Wire name of the field as it appears in the schema
    pub name: String,
    /// Kind of the field's target type
    pub kind: TypeKind,
    /// Name of the target type; only meaningful for non-scalar kinds
    #[serde(default)]
    pub target_type: Option<String>,
    /// Name of the arguments object accepted by the field, if any
    #[serde(default)]
    pub arguments_type: Option<String>,
}

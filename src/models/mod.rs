mod field;
mod schema;

pub use field::{FieldDescriptor, TypeKind};
pub use schema::{ObjectType, SchemaManifest};

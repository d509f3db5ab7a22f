use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{FieldDescriptor, TypeKind};
use crate::utils::to_upper_camel_case;

use super::{ClassFile, MethodParam, MethodSpec};

/// Schema name of the distinguished root query type
///
/// Mirrors the runtime's `QueryObject.ROOT_QUERY_OBJECT_NAME`: the root
/// operation is addressed on the wire by the `query` keyword, not by its
/// type name.
pub const ROOT_QUERY_OBJECT_NAME: &str = "Query";

/// Generated method names whose child selection node is deduplicated per
/// parent. Cursor pagination selects a connection's `edges`/`node` exactly
/// once per query path no matter how often the fluent API is invoked.
const SINGLE_INSTANCE_FIELDS: [&str; 2] = ["Edges", "Node"];

/// Builder for one generated query object class
///
/// Constructed once per GraphQL object type, fed every field of that type,
/// and finalized exactly once with [`QueryObjectBuilder::build`]. The
/// consuming method signatures make reuse after finalization impossible.
pub struct QueryObjectBuilder {
    class_file: ClassFile,
}

impl QueryObjectBuilder {
    /// Create a builder for `object_name`, writing into `write_dir`
    ///
    /// The generated class is `<objectName>QueryObject`, extends the runtime
    /// `QueryObject` imported from `namespace`, and carries an `OBJECT_NAME`
    /// constant holding the type's wire name (`"query"` for the root type).
    pub fn new(write_dir: &Path, object_name: &str, namespace: &str) -> Self {
        let class_name = format!("{}QueryObject", object_name);

        // Special case for handling the root query object
        let wire_name = if object_name == ROOT_QUERY_OBJECT_NAME {
            "query"
        } else {
            object_name
        };

        let class_file = ClassFile::new(write_dir, &class_name)
            .namespace(namespace)
            .import(&format!("{}/QueryObject", namespace))
            .extends("QueryObject")
            .constant("OBJECT_NAME", wire_name);

        QueryObjectBuilder { class_file }
    }

    /// Add one field, dispatching on its kind
    ///
    /// Scalar fields get a leaf selector; everything else gets an object
    /// selector. A non-scalar field without a resolved target type violates
    /// the manifest contract and is reported instead of generating broken
    /// code.
    pub fn field(self, field: &FieldDescriptor) -> Result<Self> {
        match field.kind {
            TypeKind::Scalar => Ok(self.scalar_field(&field.name)),
            kind => {
                let target_type = field.target_type.as_deref().with_context(|| {
                    format!(
                        "Field `{}` has kind `{:?}` but no target_type",
                        field.name, kind
                    )
                })?;
                Ok(self.object_field(
                    &field.name,
                    target_type,
                    field.arguments_type.as_deref(),
                    kind,
                ))
            }
        }
    }

    /// Add a selector method for a scalar field
    pub fn scalar_field(mut self, field_name: &str) -> Self {
        let upper_camel = to_upper_camel_case(field_name);
        self.class_file = self
            .class_file
            .method(simple_selector(field_name, &upper_camel));
        self
    }

    /// Add a selector method for an object- or enum-typed field
    pub fn object_field(
        mut self,
        field_name: &str,
        target_type: &str,
        arguments_type: Option<&str>,
        kind: TypeKind,
    ) -> Self {
        let upper_camel = to_upper_camel_case(field_name);
        let object_class = format!("{}{}", target_type, object_kind_suffix(kind));
        let args_class = arguments_type.map(|name| format!("{}ArgumentsObject", name));

        self.class_file = self.class_file.import(&object_class);
        if let Some(args_class) = &args_class {
            self.class_file = self.class_file.import(args_class);
        }

        self.class_file = self.class_file.method(object_selector(
            field_name,
            &upper_camel,
            &object_class,
            args_class.as_deref(),
        ));
        self
    }

    /// Name of the class being generated
    pub fn class_name(&self) -> &str {
        self.class_file.class_name()
    }

    /// Render the class as TypeScript without writing it
    pub fn render(&self) -> String {
        self.class_file.render()
    }

    /// Finalize: write the class file and return its path
    pub fn build(self) -> Result<PathBuf> {
        self.class_file.write()
    }
}

/// Resolve the generated-class suffix for a field's type kind
///
/// Unanticipated kinds deliberately fall through to the generic object
/// suffix so generation still produces compilable code.
fn object_kind_suffix(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Enum => "EnumObject",
        _ => "QueryObject",
    }
}

/// Selector for a scalar field: select the leaf, stay on `this`
fn simple_selector(field_name: &str, upper_camel: &str) -> MethodSpec {
    MethodSpec {
        name: format!("select{}", upper_camel),
        params: vec![],
        return_type: "this".to_string(),
        statements: vec![
            format!("this.selectField(\"{}\");", field_name),
            "return this;".to_string(),
        ],
    }
}

/// Selector for an object/enum field: register a child node and return it
fn object_selector(
    field_name: &str,
    upper_camel: &str,
    object_class: &str,
    args_class: Option<&str>,
) -> MethodSpec {
    let single_instance = SINGLE_INSTANCE_FIELDS.contains(&upper_camel);

    let mut statements = Vec::new();

    if single_instance {
        statements.push(format!(
            "const object = this.getSelectionObjectIfExists(new {}(\"{}\"));",
            object_class, field_name
        ));
    } else {
        statements.push(format!(
            "const object = new {}(\"{}\");",
            object_class, field_name
        ));
    }

    // arguments are flattened onto the child before it is registered
    if args_class.is_some() {
        statements.push(
            "if (argsObject !== undefined) {\n  object.appendArguments(argsObject.toArray());\n}"
                .to_string(),
        );
    }

    if single_instance {
        statements.push(
            "if (!this.selectionObjectExists(object)) {\n  this.selectField(object);\n}"
                .to_string(),
        );
    } else {
        statements.push("this.selectField(object);".to_string());
    }

    statements.push("return object;".to_string());

    MethodSpec {
        name: format!("select{}", upper_camel),
        params: args_class
            .map(|ty| {
                vec![MethodParam {
                    name: "argsObject".to_string(),
                    ty: ty.to_string(),
                    optional: true,
                }]
            })
            .unwrap_or_default(),
        return_type: object_class.to_string(),
        statements,
    }
}

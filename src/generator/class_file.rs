use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::MethodSpec;

/// In-memory model of one generated class file
///
/// Accumulates the pieces of a TypeScript class (imports, base class,
/// constants, methods) and renders them on demand. Configuration calls
/// consume and return the value, and [`ClassFile::write`] consumes the
/// instance, so a finalized file cannot be mutated or written twice.
///
/// Repeated `extends`/`constant` calls are last-write-wins: a later call
/// with a different value replaces the earlier one, identical calls are
/// no-ops. Constants keep their original insertion position when replaced.
#[derive(Debug, Clone)]
pub struct ClassFile {
    write_dir: PathBuf,
    class_name: String,
    namespace: Option<String>,
    imports: BTreeSet<String>,
    base_class: Option<String>,
    constants: Vec<(String, String)>,
    methods: Vec<MethodSpec>,
}

impl ClassFile {
    /// Create an empty class file model for `class_name`
    pub fn new(write_dir: &Path, class_name: &str) -> Self {
        ClassFile {
            write_dir: write_dir.to_path_buf(),
            class_name: class_name.to_string(),
            namespace: None,
            imports: BTreeSet::new(),
            base_class: None,
            constants: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Name of the generated class
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Record the runtime namespace (module path) this class belongs to
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    /// Record one import
    ///
    /// A name containing `/` is a module path whose last segment is the
    /// imported item (`graphql/schema-object/QueryObject`). A bare name is
    /// a generated sibling class and is imported from `./<Name>`.
    pub fn import(mut self, name: &str) -> Self {
        self.imports.insert(name.to_string());
        self
    }

    /// Record the base class this class extends
    pub fn extends(mut self, base_class: &str) -> Self {
        self.base_class = Some(base_class.to_string());
        self
    }

    /// Record one `static readonly` string constant
    pub fn constant(mut self, name: &str, value: &str) -> Self {
        if let Some(existing) = self.constants.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.constants.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Append one method; declaration order is preserved in the output
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Render the accumulated class as TypeScript source
    pub fn render(&self) -> String {
        let mut out = String::from("// Generated by graphql-queryobject-gen. Do not edit by hand.\n");
        if let Some(namespace) = &self.namespace {
            out.push_str(&format!("// Namespace: {}\n", namespace));
        }

        if !self.imports.is_empty() {
            out.push('\n');
            for import in &self.imports {
                out.push_str(&render_import(import));
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str("export class ");
        out.push_str(&self.class_name);
        if let Some(base) = &self.base_class {
            out.push_str(" extends ");
            out.push_str(base);
        }
        out.push_str(" {\n");

        for (name, value) in &self.constants {
            out.push_str(&format!("  static readonly {} = \"{}\";\n", name, value));
        }

        for method in &self.methods {
            out.push('\n');
            out.push_str(&method.render(2));
            out.push('\n');
        }

        out.push_str("}\n");
        out
    }

    /// Render the class and write it to `<write_dir>/<ClassName>.ts`
    ///
    /// Consumes the model; I/O failures propagate to the caller.
    pub fn write(self) -> Result<PathBuf> {
        fs::create_dir_all(&self.write_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.write_dir.display()
            )
        })?;

        let path = self.write_dir.join(format!("{}.ts", self.class_name));
        fs::write(&path, self.render())
            .with_context(|| format!("Failed to write class file: {}", path.display()))?;

        Ok(path)
    }
}

/// Render one import line from a recorded import name
fn render_import(name: &str) -> String {
    match name.rsplit_once('/') {
        Some((module, item)) => format!("import {{ {} }} from \"{}\";", item, module),
        None => format!("import {{ {} }} from \"./{}\";", name, name),
    }
}

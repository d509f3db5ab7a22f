/// One parameter of a generated method
#[derive(Debug, Clone)]
pub struct MethodParam {
    /// Parameter name
    pub name: String,
    /// TypeScript type of the parameter
    pub ty: String,
    /// Whether the parameter is optional (`name?: Type`)
    pub optional: bool,
}

/// Structured description of one generated method
///
/// The builder describes methods as data (name, parameters, statements) and
/// leaves serialization to [`MethodSpec::render`], so the per-field decision
/// logic stays free of raw text templating.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    /// Method name (e.g. `selectUserId`)
    pub name: String,
    /// Parameters in declaration order
    pub params: Vec<MethodParam>,
    /// TypeScript return type
    pub return_type: String,
    /// Body statements; a statement may span multiple lines
    pub statements: Vec<String>,
}

impl MethodSpec {
    /// Render the method as TypeScript, indented by `indent` spaces
    pub fn render(&self, indent: usize) -> String {
        let outer = " ".repeat(indent);
        let inner = " ".repeat(indent + 2);

        let params = self
            .params
            .iter()
            .map(|p| {
                if p.optional {
                    format!("{}?: {}", p.name, p.ty)
                } else {
                    format!("{}: {}", p.name, p.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = format!("{}{}({}): {} {{\n", outer, self.name, params, self.return_type);
        for statement in &self.statements {
            for line in statement.lines() {
                out.push_str(&inner);
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(&outer);
        out.push('}');
        out
    }
}

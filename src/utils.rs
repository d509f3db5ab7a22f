use convert_case::{Case, Casing};

/// Convert a schema field name to UpperCamelCase for generated method names
pub fn to_upper_camel_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

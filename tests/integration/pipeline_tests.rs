//! Integration tests for the full pipeline

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use graphql_queryobject_gen::config::{Config, InputConfig, NamingConfig, OutputConfig};
use graphql_queryobject_gen::pipeline::Pipeline;

/// Create a test config pointing at a manifest and an output directory
fn create_test_config(schema_file: PathBuf, write_dir: PathBuf) -> Config {
    Config {
        input: InputConfig { schema_file },
        output: OutputConfig { write_dir },
        naming: NamingConfig::default(),
    }
}

#[test]
fn test_full_pipeline_simple() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    let manifest = r#"
[[types]]
name = "Query"

[[types.fields]]
name = "viewer"
kind = "object"
target_type = "Viewer"

[[types]]
name = "Viewer"

[[types.fields]]
name = "id"
kind = "scalar"

[[types.fields]]
name = "login"
kind = "scalar"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    let pipeline = Pipeline::new(false);

    let result = pipeline.run(&config);
    assert!(result.is_ok(), "Pipeline should succeed: {:?}", result.err());

    // Verify output files exist
    assert!(output_dir.join("QueryQueryObject.ts").exists());
    assert!(output_dir.join("ViewerQueryObject.ts").exists());

    // Verify root class content
    let root_content = fs::read_to_string(output_dir.join("QueryQueryObject.ts")).unwrap();
    assert!(root_content.contains("static readonly OBJECT_NAME = \"query\";"));
    assert!(root_content.contains("selectViewer(): ViewerQueryObject {"));
    assert!(root_content.contains("import { QueryObject } from \"graphql/schema-object\";"));

    // Verify non-root class content
    let viewer_content = fs::read_to_string(output_dir.join("ViewerQueryObject.ts")).unwrap();
    assert!(viewer_content.contains("static readonly OBJECT_NAME = \"Viewer\";"));
    assert!(viewer_content.contains("selectId(): this {"));
    assert!(viewer_content.contains("selectLogin(): this {"));
}

#[test]
fn test_pipeline_connection_pattern() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    let manifest = r#"
[[types]]
name = "FriendsConnection"

[[types.fields]]
name = "total_count"
kind = "scalar"

[[types.fields]]
name = "edges"
kind = "object"
target_type = "FriendsEdge"

[[types]]
name = "FriendsEdge"

[[types.fields]]
name = "cursor"
kind = "scalar"

[[types.fields]]
name = "node"
kind = "object"
target_type = "User"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    Pipeline::new(false).run(&config).unwrap();

    let connection = fs::read_to_string(output_dir.join("FriendsConnectionQueryObject.ts")).unwrap();
    assert!(connection.contains("getSelectionObjectIfExists(new FriendsEdgeQueryObject(\"edges\"))"));
    assert!(connection.contains("selectTotalCount(): this {"));

    let edge = fs::read_to_string(output_dir.join("FriendsEdgeQueryObject.ts")).unwrap();
    assert!(edge.contains("getSelectionObjectIfExists(new UserQueryObject(\"node\"))"));
}

#[test]
fn test_pipeline_with_naming_config() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    let manifest = r#"
[[types]]
name = "User"

[[types.fields]]
name = "id"
kind = "scalar"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = Config {
        input: InputConfig {
            schema_file,
        },
        output: OutputConfig {
            write_dir: output_dir.clone(),
        },
        naming: NamingConfig {
            namespace: "app/graphql/runtime".to_string(),
        },
    };

    Pipeline::new(false).run(&config).unwrap();

    let content = fs::read_to_string(output_dir.join("UserQueryObject.ts")).unwrap();
    assert!(content.contains("import { QueryObject } from \"app/graphql/runtime\";"));
    assert!(content.contains("// Namespace: app/graphql/runtime"));
}

#[test]
fn test_pipeline_empty_manifest() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    fs::write(&schema_file, "").unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    let result = Pipeline::new(false).run(&config);

    assert!(result.is_ok());
    // Nothing to generate, nothing written
    assert!(!output_dir.exists() || fs::read_dir(&output_dir).unwrap().next().is_none());
}

#[test]
fn test_pipeline_creates_output_directories() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("deeply").join("nested").join("output");

    let manifest = r#"
[[types]]
name = "User"

[[types.fields]]
name = "id"
kind = "scalar"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    let result = Pipeline::new(false).run(&config);

    assert!(result.is_ok());
    assert!(output_dir.join("UserQueryObject.ts").exists());
}

#[test]
fn test_pipeline_missing_manifest_fails() {
    let temp = tempdir().unwrap();
    let config = create_test_config(
        temp.path().join("nonexistent.toml"),
        temp.path().join("generated"),
    );

    let result = Pipeline::new(false).run(&config);
    assert!(result.is_err());
}

#[test]
fn test_pipeline_unresolved_field_aborts_that_type() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    // second type has an object field without a target_type
    let manifest = r#"
[[types]]
name = "User"

[[types.fields]]
name = "id"
kind = "scalar"

[[types]]
name = "Broken"

[[types.fields]]
name = "thing"
kind = "object"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    let result = Pipeline::new(false).run(&config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Broken"));

    // the class generated before the failure stays on disk
    assert!(output_dir.join("UserQueryObject.ts").exists());
    assert!(!output_dir.join("BrokenQueryObject.ts").exists());
}

#[test]
fn test_pipeline_verbose_mode() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    let manifest = r#"
[[types]]
name = "User"

[[types.fields]]
name = "id"
kind = "scalar"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir);

    // Run with verbose mode - should not panic
    let result = Pipeline::new(true).run(&config);
    assert!(result.is_ok());
}

#[test]
fn test_pipeline_unknown_kind_generates_generic_object() {
    let temp = tempdir().unwrap();
    let schema_file = temp.path().join("schema.toml");
    let output_dir = temp.path().join("generated");

    let manifest = r#"
[[types]]
name = "User"

[[types.fields]]
name = "pet"
kind = "interface"
target_type = "Pet"
"#;
    fs::write(&schema_file, manifest).unwrap();

    let config = create_test_config(schema_file, output_dir.clone());
    Pipeline::new(false).run(&config).unwrap();

    let content = fs::read_to_string(output_dir.join("UserQueryObject.ts")).unwrap();
    assert!(content.contains("selectPet(): PetQueryObject {"));
}

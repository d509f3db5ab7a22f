use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default module path the runtime `QueryObject` base class is imported from
pub const DEFAULT_NAMESPACE: &str = "graphql/schema-object";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Input configuration - where to find the resolved schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the schema manifest produced by the introspection pass
    pub schema_file: PathBuf,
}

/// Output configuration - where to write generated classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the generated query object classes are written into
    pub write_dir: PathBuf,
}

/// Naming configuration for the generated code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Module path the runtime base classes are imported from
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            namespace: default_namespace(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !self.input.schema_file.exists() {
            anyhow::bail!(
                "Schema manifest does not exist: {}",
                self.input.schema_file.display()
            );
        }

        // Ensure the output directory exists or can be created
        if !self.output.write_dir.exists() {
            fs::create_dir_all(&self.output.write_dir).with_context(|| {
                format!(
                    "Failed to create output directory: {}",
                    self.output.write_dir.display()
                )
            })?;
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                schema_file: PathBuf::from("schema.toml"),
            },
            output: OutputConfig {
                write_dir: PathBuf::from("src/generated/schema-object"),
            },
            naming: NamingConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

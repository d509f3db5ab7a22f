use anyhow::{Context, Result};

use crate::config::Config;
use crate::generator::QueryObjectBuilder;
use crate::models::SchemaManifest;

/// The generation driver: schema manifest in, one class file per type out
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(verbose: bool) -> Self {
        Pipeline { verbose }
    }

    /// Run the full generation pass
    ///
    /// Builds every object type listed in the manifest. A failure aborts the
    /// run for the failing type; classes already written stay on disk.
    pub fn run(&self, config: &Config) -> Result<()> {
        let manifest = SchemaManifest::load(&config.input.schema_file)?;

        if self.verbose {
            println!(
                "Loaded {} object types from {}",
                manifest.types.len(),
                config.input.schema_file.display()
            );
        }

        for object_type in &manifest.types {
            let mut builder = QueryObjectBuilder::new(
                &config.output.write_dir,
                &object_type.name,
                &config.naming.namespace,
            );

            for field in &object_type.fields {
                builder = builder.field(field).with_context(|| {
                    format!("Failed to generate type `{}`", object_type.name)
                })?;
            }

            let path = builder
                .build()
                .with_context(|| format!("Failed to write type `{}`", object_type.name))?;

            if self.verbose {
                println!("  wrote {}", path.display());
            }
        }

        println!(
            "Generated {} query object class{}",
            manifest.types.len(),
            if manifest.types.len() == 1 { "" } else { "es" }
        );

        Ok(())
    }
}

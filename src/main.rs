use anyhow::Result;
use graphql_queryobject_gen::cli::{Cli, Commands};
use graphql_queryobject_gen::config::Config;
use graphql_queryobject_gen::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate { config, verbose } => {
            run_generate(&config, verbose)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Run the generate command
fn run_generate(config_path: &std::path::Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    if verbose {
        println!("Loaded configuration from: {}", config_path.display());
    }

    let pipeline = Pipeline::new(verbose);
    pipeline.run(&config)
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - schema_file: Path to the resolved schema manifest");
    println!("  - write_dir: Output directory for generated classes");
    println!("  - namespace: Module the runtime QueryObject is imported from");

    Ok(())
}

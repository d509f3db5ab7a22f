use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate TypeScript query object classes from a resolved GraphQL schema
#[derive(Debug, Parser)]
#[command(name = "graphql-queryobject-gen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate query object classes from the configured schema manifest
    Generate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "querygen.toml")]
        config: PathBuf,

        /// Print progress for every generated class
        #[arg(short, long)]
        verbose: bool,
    },
    /// Write a default configuration file
    Init {
        /// Where to write the configuration file
        #[arg(short, long, default_value = "querygen.toml")]
        output: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

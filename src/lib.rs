//! # graphql-queryobject-gen
//!
//! A CLI tool and library for generating TypeScript "query object" classes
//! from a resolved GraphQL schema.
//!
//! This crate reads a schema manifest (the fully resolved output of a schema
//! introspection pass) and generates, per GraphQL object type, a class with
//! one fluent selector method per field:
//! - **Scalar fields** get a `select<Name>(): this` method that marks the
//!   field as selected and keeps the chain on the same object.
//! - **Object and enum fields** get a `select<Name>(argsObject?)` method
//!   that returns a child query object, so callers descend into nested
//!   selections without writing raw query strings.
//!
//! The generated classes extend the runtime `QueryObject` base class, which
//! owns the selection-tree primitives the generated methods call into.
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, you can also use it as a library:
//!
//! ```rust,no_run
//! use graphql_queryobject_gen::config::Config;
//! use graphql_queryobject_gen::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default_config();
//!     let pipeline = Pipeline::new(false);
//!     pipeline.run(&config)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod utils;

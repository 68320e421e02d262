//! CLI argument definitions for nmod.
//!
//! Uses `clap` derive macros. Each command corresponds to a handler in the
//! [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nmod",
    version,
    about = "Common configuration for necauqua's mod projects",
    long_about = "nmod applies the shared defaults of necauqua's mod projects and \
                  wires up credential-gated publishing to their Maven repositories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize nmod in an existing directory
    Init,

    /// Evaluate publish rules, register publications, and run the publish check
    Publish {
        /// Define a property, like Gradle's -P (repeatable)
        #[arg(short = 'P', long = "prop", value_name = "NAME=VALUE")]
        define: Vec<String>,

        /// Show what would be registered without handing tasks off
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the layered property bag
    Env {
        /// Define a property, like Gradle's -P (repeatable)
        #[arg(short = 'P', long = "prop", value_name = "NAME=VALUE")]
        define: Vec<String>,

        /// Show property values unmasked
        #[arg(long)]
        reveal: bool,
    },

    /// Emit machine-readable defaults and project metadata
    Metadata {
        /// Output format
        #[arg(long, default_value = "json")]
        format: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

//! Command dispatch and handler modules.

mod env;
mod init;
mod metadata;
mod publish;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Publish { define, dry_run } => publish::exec(&define, dry_run, cli.verbose),
        Command::Env { define, reveal } => env::exec(&define, reveal),
        Command::Metadata { format } => metadata::exec(&format),
    }
}

/// Locate the project root by walking up from the current directory.
pub(crate) fn project_root() -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir().map_err(nmod_util::errors::NmodError::Io)?;
    nmod_util::fs::find_ancestor_with(&cwd, "Nmod.toml").ok_or_else(|| {
        nmod_util::errors::NmodError::Manifest {
            message: "Could not find Nmod.toml in this directory or any parent".to_string(),
        }
        .into()
    })
}

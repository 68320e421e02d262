//! Handler for `nmod init`.

use miette::Result;

use nmod_util::errors::NmodError;

pub fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(NmodError::Io)?;
    let manifest_path = cwd.join("Nmod.toml");

    if manifest_path.exists() {
        return Err(NmodError::Generic {
            message: "Nmod.toml already exists in this directory".to_string(),
        }
        .into());
    }

    let name = cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my-mod");

    let manifest = format!(
        "[project]\n\
         name = \"{name}\"\n\
         group = \"dev.necauqua\"\n\
         version = \"0.1.0\"\n",
    );
    std::fs::write(&manifest_path, manifest).map_err(NmodError::Io)?;

    println!("Initialized nmod project in {}", cwd.display());
    Ok(())
}

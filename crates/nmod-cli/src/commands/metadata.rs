//! Handler for `nmod metadata`.

use miette::Result;
use serde_json::json;

use nmod_core::defaults;
use nmod_core::manifest::Manifest;
use nmod_util::errors::NmodError;

pub fn exec(format: &str) -> Result<()> {
    if format != "json" {
        return Err(NmodError::Generic {
            message: format!("Unknown metadata format '{format}'. Available: json"),
        }
        .into());
    }

    let project_root = super::project_root()?;
    let manifest = Manifest::from_path(&project_root.join("Nmod.toml"))?;

    let metadata = json!({
        "plugin": {
            "id": defaults::PLUGIN_ID,
            "display-name": defaults::PLUGIN_DISPLAY_NAME,
            "description": defaults::PLUGIN_DESCRIPTION,
        },
        "project": manifest.project,
        "pom": manifest.pom(),
        "repositories": defaults::default_repositories(),
        "dependencies": defaults::default_dependencies(),
    });

    let rendered = serde_json::to_string_pretty(&metadata).map_err(|e| NmodError::Generic {
        message: format!("Failed to serialize metadata: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}

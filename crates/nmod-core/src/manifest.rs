use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pom::PomMetadata;
use nmod_util::errors::NmodError;

/// The parsed representation of an `Nmod.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    /// POM overrides; projects that omit this get the built-in defaults.
    #[serde(default)]
    pub pom: Option<PomMetadata>,

    /// Publish rules declared by the project. When empty, only the
    /// built-in rules apply.
    #[serde(default)]
    pub publish: Vec<PublishRuleEntry>,
}

/// Project identity from the `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "display-name")]
    pub display_name: Option<String>,
}

/// A declarative publish rule from a `[[publish]]` block.
///
/// The endpoint URL comes either from a `url` literal or from a property
/// named by `url-property`; the rule is only acted on when every property
/// in `requires` is supplied with a non-empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRuleEntry {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "url-property")]
    pub url_property: Option<String>,
    pub requires: Vec<String>,
    #[serde(default)]
    pub auth: Option<String>,
}

impl Manifest {
    /// Load and parse an `Nmod.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.nmod.env` (if present alongside `Nmod.toml`) and
    /// process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NmodError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(".nmod.env")).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::from_str(&resolved)
    }

    /// Parse an `Nmod.toml` from a string (no interpolation).
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            NmodError::Manifest {
                message: format!("Failed to parse Nmod.toml: {e}"),
            }
            .into()
        })
    }

    /// POM metadata for the publication, falling back to the defaults.
    pub fn pom(&self) -> PomMetadata {
        self.pom.clone().unwrap_or_default()
    }
}

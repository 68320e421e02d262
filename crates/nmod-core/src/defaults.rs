//! Built-in defaults shared by all of the maintainer's mod projects.
//!
//! Everything here is declarative data: plugin identity, the repositories
//! every project resolves against, the build-time dependency coordinates,
//! and the POM boilerplate. None of it carries behavior.

use serde::{Deserialize, Serialize};

/// Plugin identifier.
pub const PLUGIN_ID: &str = "dev.necauqua.nmod";

/// Human-readable plugin name.
pub const PLUGIN_DISPLAY_NAME: &str = "necauqua mod";

/// Plugin description.
pub const PLUGIN_DESCRIPTION: &str = "Common configuration for necauquas Minecraft mods";

/// Canonical project name used in the default POM.
pub const PROJECT_NAME: &str = "necauqua-mod";

/// Git URL of the project itself, used for the default SCM/POM links.
pub const PROJECT_GIT_URL: &str = "https://github.com/necauqua/necauqua-mod";

/// The maintainer's own Maven repository, target of the built-in publish
/// rule guarded by `maven.user`/`maven.pass`.
pub const NECAUQUA_MAVEN_URL: &str = "https://maven.necauqua.dev";

/// A named repository every project resolves dependencies against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDefault {
    pub name: String,
    pub url: String,
}

/// A build-time dependency coordinate pulled in by every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDefault {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

/// The default dependency-resolution repositories.
pub fn default_repositories() -> Vec<RepositoryDefault> {
    [
        ("gradle-plugin-portal", "https://plugins.gradle.org/m2"),
        ("minecraft-forge", "https://files.minecraftforge.net/maven"),
        ("necauqua", NECAUQUA_MAVEN_URL),
    ]
    .into_iter()
    .map(|(name, url)| RepositoryDefault {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// The default build-time dependency coordinates.
pub fn default_dependencies() -> Vec<DependencyDefault> {
    [
        ("net.minecraftforge.gradle", "ForgeGradle", "3.+"),
        ("co.riiid.gradle", "co.riiid.gradle.gradle.plugin", "0.4.1"),
        (
            "com.matthewprenger.cursegradle",
            "com.matthewprenger.cursegradle.gradle.plugin",
            "1.4.0",
        ),
    ]
    .into_iter()
    .map(|(group, artifact, version)| DependencyDefault {
        group: group.to_string(),
        artifact: artifact.to_string(),
        version: version.to_string(),
    })
    .collect()
}

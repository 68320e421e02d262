use serde::{Deserialize, Serialize};

use crate::defaults;

/// POM metadata attached to the published artifact.
///
/// These are inert values copied verbatim into the publication; nothing
/// validates them beyond parsing. Defaults describe the maintainer's own
/// projects and can be overridden per project in the `[pom]` section of
/// `Nmod.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(default)]
    pub scm: Option<Scm>,
}

/// A license entry in the POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// A developer entry in the POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Source-control coordinates in the POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scm {
    pub connection: String,
    #[serde(default, rename = "developer-connection")]
    pub developer_connection: Option<String>,
    pub url: String,
}

impl Default for PomMetadata {
    fn default() -> Self {
        Self {
            name: defaults::PROJECT_NAME.to_string(),
            description: defaults::PLUGIN_DESCRIPTION.to_string(),
            url: format!("{}#readme", defaults::PROJECT_GIT_URL),
            licenses: vec![License {
                name: "MIT License".to_string(),
                url: "https://opensource.org/licenses/mit-license".to_string(),
            }],
            developers: vec![Developer {
                id: "necauqua".to_string(),
                name: "Anton Bulakh".to_string(),
                email: Some("self@necauqua.dev".to_string()),
            }],
            scm: Some(Scm {
                connection: format!("scm:git:{}", defaults::PROJECT_GIT_URL),
                developer_connection: Some(format!("scm:git:{}", defaults::PROJECT_GIT_URL)),
                url: format!("{}#readme", defaults::PROJECT_GIT_URL),
            }),
        }
    }
}

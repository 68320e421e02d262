use std::collections::BTreeMap;
use std::path::Path;

use nmod_util::errors::NmodError;

/// Loads a `.nmod.env` file (shell-style `KEY=value` format).
///
/// `.nmod.env` holds the values a project does not commit: publishing
/// credentials, private repository passwords, CI tokens. A missing file is
/// not an error and yields an empty map.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(NmodError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.nmod.env`), then falls back to actual process environment
/// variables. Missing keys expand to the empty string.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    while let Some(start) = result.find("${env:") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let key = &result[start + 6..end];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.replace_range(start..=end, &value);
    }
    result
}

/// Parse `-P name=value` style command-line definitions.
///
/// The value may be empty (`-P maven.pass=`); an empty value is kept in the
/// map but treated as absent by [`PropertyBag::get_non_empty`]. A missing
/// `=` or an empty name is rejected.
pub fn parse_defines(defines: &[String]) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for define in defines {
        let Some((name, value)) = define.split_once('=') else {
            return Err(NmodError::Property {
                message: format!("'{define}' is missing '='"),
            }
            .into());
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(NmodError::Property {
                message: format!("'{define}' has an empty property name"),
            }
            .into());
        }
        map.insert(name.to_string(), value.to_string());
    }
    Ok(map)
}

/// The externally supplied `name -> value` mapping the publish configurator
/// reads credentials from.
///
/// Built from two layers: the project's `.nmod.env` file, then `-P`
/// command-line definitions on top (later wins). The bag is assembled once
/// per invocation and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    values: BTreeMap<String, String>,
}

impl PropertyBag {
    /// Build a bag from the env-file layer and the `-P` define layer.
    pub fn layered(
        env_file: BTreeMap<String, String>,
        defines: BTreeMap<String, String>,
    ) -> Self {
        let mut values = env_file;
        values.extend(defines);
        Self { values }
    }

    /// Build a bag directly from a map. Mostly useful in tests.
    pub fn from_map(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Look up a property, treating an empty value the same as absence.
    ///
    /// Credential checks go through this: a property defined as the empty
    /// string does not count as present.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

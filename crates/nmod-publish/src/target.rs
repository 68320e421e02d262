//! Resolved publish targets and their Maven-layout URL helpers.

use crate::rule::AuthKind;

/// A resolved, authenticated description of where to upload an artifact.
///
/// Constructed only from a complete credential set; never mutated
/// afterwards and discarded at the end of the configuration pass. Equality
/// is by value so repeated evaluation of the same inputs yields equivalent
/// targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub name: String,
    pub url: String,
    pub username: String,
    pub secret: String,
    pub auth: AuthKind,
}

impl PublishTarget {
    pub fn new(
        name: impl Into<String>,
        url: &str,
        username: impl Into<String>,
        secret: impl Into<String>,
        auth: AuthKind,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.trim_end_matches('/').to_string(),
            username: username.into(),
            secret: secret.into(),
            auth,
        }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `dev.necauqua:some-mod:1.2.3` becomes `dev/necauqua/some-mod/1.2.3`.
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// Full URL to a specific file within the repository.
    pub fn file_url(&self, group: &str, artifact: &str, version: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url,
            Self::coordinate_path(group, artifact, version),
            filename
        )
    }

    /// URL the artifact JAR uploads to.
    pub fn jar_url(&self, group: &str, artifact: &str, version: &str) -> String {
        let filename = format!("{artifact}-{version}.jar");
        self.file_url(group, artifact, version, &filename)
    }

    /// URL the POM uploads to.
    pub fn pom_url(&self, group: &str, artifact: &str, version: &str) -> String {
        let filename = format!("{artifact}-{version}.pom");
        self.file_url(group, artifact, version, &filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> PublishTarget {
        PublishTarget::new(
            "necauqua",
            "https://maven.necauqua.dev/",
            "bob",
            "secret",
            AuthKind::Basic,
        )
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(target().url, "https://maven.necauqua.dev");
    }

    #[test]
    fn coordinate_path_replaces_dots() {
        let path = PublishTarget::coordinate_path("dev.necauqua", "some-mod", "1.2.3");
        assert_eq!(path, "dev/necauqua/some-mod/1.2.3");
    }

    #[test]
    fn jar_url_format() {
        let url = target().jar_url("dev.necauqua", "some-mod", "1.2.3");
        assert_eq!(
            url,
            "https://maven.necauqua.dev/dev/necauqua/some-mod/1.2.3/some-mod-1.2.3.jar"
        );
    }

    #[test]
    fn pom_url_format() {
        let url = target().pom_url("dev.necauqua", "some-mod", "1.2.3");
        assert!(url.ends_with("some-mod-1.2.3.pom"));
    }

    #[test]
    fn equal_inputs_give_equal_targets() {
        assert_eq!(target(), target());
    }
}

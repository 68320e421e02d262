use crate::target::PublishTarget;

/// The `group:artifact:version` coordinate of the artifact being published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl ArtifactCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// A deferred unit of work that uploads one artifact to one target.
///
/// Registered during configuration, one per constructed target; actually
/// executing the upload happens in a later, externally triggered phase.
/// This type only describes the work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationTask {
    pub target: PublishTarget,
    pub coordinate: ArtifactCoordinate,
}

impl PublicationTask {
    pub fn new(target: PublishTarget, coordinate: ArtifactCoordinate) -> Self {
        Self { target, coordinate }
    }

    /// The URLs the deferred upload will PUT to, in upload order.
    pub fn upload_urls(&self) -> Vec<String> {
        let c = &self.coordinate;
        vec![
            self.target.jar_url(&c.group, &c.artifact, &c.version),
            self.target.pom_url(&c.group, &c.artifact, &c.version),
        ]
    }
}

//! The conditional publish configurator.
//!
//! One configurator exists per configuration pass. Rules are evaluated
//! against the property bag, complete ones register a publication task,
//! and the "no publishing configurations" check runs only when the publish
//! action itself is invoked.

use tracing::debug;

use nmod_core::properties::PropertyBag;
use nmod_util::errors::NmodError;

use crate::credentials::CredentialSet;
use crate::rule::{PublishRule, UrlSource};
use crate::target::PublishTarget;
use crate::task::{ArtifactCoordinate, PublicationTask};

/// Evaluate one rule against the supplied properties.
///
/// Returns a target iff every required property is present with a
/// non-empty value. Incomplete credentials are an expected state (building
/// outside the maintainer's trusted environment), so they skip the rule
/// without an error or a warning.
pub fn evaluate(rule: &PublishRule, properties: &PropertyBag) -> Option<PublishTarget> {
    let Some(credentials) = CredentialSet::gather(&rule.requires, properties) else {
        debug!(rule = %rule.name, "credentials incomplete, skipping publish rule");
        return None;
    };

    let url = match &rule.url {
        UrlSource::Fixed(url) => url.as_str(),
        // The URL property is among the required names, so it resolved.
        UrlSource::Property(name) => credentials.get(name)?,
    };

    let (username, secret) = rule.credential_names();
    let username = username.and_then(|n| credentials.get(n)).unwrap_or("");
    let secret = secret.and_then(|n| credentials.get(n)).unwrap_or("");

    Some(PublishTarget::new(
        rule.name.clone(),
        url,
        username,
        secret,
        rule.auth,
    ))
}

/// Accumulates publication tasks over a single configuration pass.
pub struct PublishConfigurator {
    coordinate: ArtifactCoordinate,
    tasks: Vec<PublicationTask>,
}

impl PublishConfigurator {
    pub fn new(coordinate: ArtifactCoordinate) -> Self {
        Self {
            coordinate,
            tasks: Vec::new(),
        }
    }

    /// Register a publication task for a constructed target; a `None`
    /// target registers nothing.
    pub fn register_publication(&mut self, target: Option<PublishTarget>) {
        if let Some(target) = target {
            debug!(target = %target.name, url = %target.url, "registering publication");
            self.tasks
                .push(PublicationTask::new(target, self.coordinate.clone()));
        }
    }

    /// How many publication tasks this pass registered.
    pub fn registered_count(&self) -> usize {
        self.tasks.len()
    }

    /// The check that runs when the publish action is actually invoked.
    ///
    /// Configuration itself never fails on missing credentials; only
    /// attempting to publish with zero registered tasks does. The error is
    /// fatal to the publish step and propagates to the caller unretried.
    pub fn on_publish_invoked(&self) -> Result<&[PublicationTask], NmodError> {
        if self.tasks.is_empty() {
            return Err(NmodError::NoPublishingConfigurations);
        }
        Ok(&self.tasks)
    }
}

use nmod_core::defaults::NECAUQUA_MAVEN_URL;
use nmod_core::manifest::PublishRuleEntry;

/// How a publication authenticates against its endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    /// Username/password basic auth.
    Basic,
    /// Username plus a private signing key.
    PrivateKey,
}

impl AuthKind {
    fn from_entry(value: Option<&str>) -> Self {
        match value {
            Some("private-key") => Self::PrivateKey,
            _ => Self::Basic,
        }
    }
}

/// Where a rule's endpoint URL comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// A fixed literal URL.
    Fixed(String),
    /// Taken from a named property at evaluation time.
    Property(String),
}

/// A declarative description of one potential publish target.
///
/// A rule turns into a [`crate::target::PublishTarget`] only when every
/// property in `requires` is supplied with a non-empty value; otherwise it
/// is silently skipped for the rest of the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRule {
    pub name: String,
    pub url: UrlSource,
    pub requires: Vec<String>,
    pub auth: AuthKind,
}

impl PublishRule {
    /// Build a rule from a manifest `[[publish]]` entry.
    ///
    /// A `url` literal wins over `url-property`; an entry with neither
    /// falls back to requiring its URL from a property named
    /// `<rule-name>.url`.
    pub fn from_entry(entry: &PublishRuleEntry) -> Self {
        let url = match (&entry.url, &entry.url_property) {
            (Some(url), _) => UrlSource::Fixed(url.clone()),
            (None, Some(prop)) => UrlSource::Property(prop.clone()),
            (None, None) => UrlSource::Property(format!("{}.url", entry.name)),
        };
        Self {
            name: entry.name.clone(),
            url,
            requires: entry.requires.clone(),
            auth: AuthKind::from_entry(entry.auth.as_deref()),
        }
    }

    /// The username property is the first required name that is not the
    /// URL property; the secret is the one after it.
    pub(crate) fn credential_names(&self) -> (Option<&str>, Option<&str>) {
        let url_prop = match &self.url {
            UrlSource::Property(p) => Some(p.as_str()),
            UrlSource::Fixed(_) => None,
        };
        let mut names = self
            .requires
            .iter()
            .map(String::as_str)
            .filter(|n| Some(*n) != url_prop);
        (names.next(), names.next())
    }
}

/// The built-in rules, one per observed credential convention.
pub fn builtin_rules() -> Vec<PublishRule> {
    vec![
        PublishRule {
            name: "necauqua".to_string(),
            url: UrlSource::Fixed(NECAUQUA_MAVEN_URL.to_string()),
            requires: vec!["maven.user".to_string(), "maven.pass".to_string()],
            auth: AuthKind::Basic,
        },
        PublishRule {
            name: "repo".to_string(),
            url: UrlSource::Property("repo.url".to_string()),
            requires: vec![
                "repo.url".to_string(),
                "repo.username".to_string(),
                "repo.sk".to_string(),
            ],
            auth: AuthKind::PrivateKey,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_necauqua_rule_has_fixed_url() {
        let rules = builtin_rules();
        let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
        assert_eq!(rule.url, UrlSource::Fixed(NECAUQUA_MAVEN_URL.to_string()));
        assert_eq!(rule.requires, ["maven.user", "maven.pass"]);
        assert_eq!(rule.auth, AuthKind::Basic);
    }

    #[test]
    fn builtin_repo_rule_reads_url_from_property() {
        let rules = builtin_rules();
        let rule = rules.iter().find(|r| r.name == "repo").unwrap();
        assert_eq!(rule.url, UrlSource::Property("repo.url".to_string()));
        assert_eq!(rule.auth, AuthKind::PrivateKey);
    }

    #[test]
    fn credential_names_skip_the_url_property() {
        let rules = builtin_rules();
        let repo = rules.iter().find(|r| r.name == "repo").unwrap();
        assert_eq!(
            repo.credential_names(),
            (Some("repo.username"), Some("repo.sk"))
        );

        let necauqua = rules.iter().find(|r| r.name == "necauqua").unwrap();
        assert_eq!(
            necauqua.credential_names(),
            (Some("maven.user"), Some("maven.pass"))
        );
    }

    #[test]
    fn from_entry_without_url_falls_back_to_named_property() {
        let entry = nmod_core::manifest::PublishRuleEntry {
            name: "mirror".to_string(),
            url: None,
            url_property: None,
            requires: vec!["mirror.url".to_string(), "mirror.token".to_string()],
            auth: None,
        };
        let rule = PublishRule::from_entry(&entry);
        assert_eq!(rule.url, UrlSource::Property("mirror.url".to_string()));
        assert_eq!(rule.auth, AuthKind::Basic);
    }
}

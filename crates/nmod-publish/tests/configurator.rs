use nmod_core::properties::PropertyBag;
use nmod_publish::configurator::{evaluate, PublishConfigurator};
use nmod_publish::rule::builtin_rules;
use nmod_publish::task::ArtifactCoordinate;
use nmod_util::errors::NmodError;

fn bag(entries: &[(&str, &str)]) -> PropertyBag {
    PropertyBag::from_map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn coordinate() -> ArtifactCoordinate {
    ArtifactCoordinate::new("dev.necauqua", "some-mod", "1.2.3")
}

#[test]
fn complete_maven_credentials_produce_the_necauqua_target() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
    let properties = bag(&[("maven.user", "bob"), ("maven.pass", "secret")]);

    let target = evaluate(rule, &properties).unwrap();
    assert_eq!(target.name, "necauqua");
    assert_eq!(target.url, "https://maven.necauqua.dev");
    assert_eq!(target.username, "bob");
    assert_eq!(target.secret, "secret");
}

#[test]
fn empty_properties_produce_no_target() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();

    assert!(evaluate(rule, &bag(&[])).is_none());
}

#[test]
fn partial_repo_credentials_behave_like_total_absence() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "repo").unwrap();
    // repo.sk missing
    let properties = bag(&[("repo.url", "https://x"), ("repo.username", "bob")]);

    assert!(evaluate(rule, &properties).is_none());
}

#[test]
fn repo_rule_takes_its_url_from_the_property() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "repo").unwrap();
    let properties = bag(&[
        ("repo.url", "https://x/"),
        ("repo.username", "bob"),
        ("repo.sk", "key-material"),
    ]);

    let target = evaluate(rule, &properties).unwrap();
    assert_eq!(target.url, "https://x");
    assert_eq!(target.username, "bob");
    assert_eq!(target.secret, "key-material");
}

#[test]
fn evaluate_is_idempotent_by_value() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
    let properties = bag(&[("maven.user", "bob"), ("maven.pass", "secret")]);

    let first = evaluate(rule, &properties);
    let second = evaluate(rule, &properties);
    assert_eq!(first, second);
}

#[test]
fn registering_none_adds_nothing() {
    let mut configurator = PublishConfigurator::new(coordinate());
    configurator.register_publication(None);
    assert_eq!(configurator.registered_count(), 0);
}

#[test]
fn publish_with_zero_registrations_fails() {
    let configurator = PublishConfigurator::new(coordinate());
    let err = configurator.on_publish_invoked().unwrap_err();
    assert!(matches!(err, NmodError::NoPublishingConfigurations));
    assert_eq!(err.to_string(), "No publishing configurations");
}

#[test]
fn publish_fails_regardless_of_how_often_evaluate_ran() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
    let empty = bag(&[]);

    let mut configurator = PublishConfigurator::new(coordinate());
    for _ in 0..5 {
        configurator.register_publication(evaluate(rule, &empty));
    }

    assert!(matches!(
        configurator.on_publish_invoked(),
        Err(NmodError::NoPublishingConfigurations)
    ));
}

#[test]
fn publish_with_one_registration_succeeds() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
    let properties = bag(&[("maven.user", "bob"), ("maven.pass", "secret")]);

    let mut configurator = PublishConfigurator::new(coordinate());
    configurator.register_publication(evaluate(rule, &properties));

    let tasks = configurator.on_publish_invoked().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].coordinate.to_string(), "dev.necauqua:some-mod:1.2.3");
}

#[test]
fn two_complete_rules_register_two_tasks() {
    let properties = bag(&[
        ("maven.user", "bob"),
        ("maven.pass", "secret"),
        ("repo.url", "https://x"),
        ("repo.username", "bob"),
        ("repo.sk", "key-material"),
    ]);

    let mut configurator = PublishConfigurator::new(coordinate());
    for rule in builtin_rules() {
        configurator.register_publication(evaluate(&rule, &properties));
    }

    assert_eq!(configurator.registered_count(), 2);
    assert!(configurator.on_publish_invoked().is_ok());
}

#[test]
fn empty_string_credential_counts_as_missing() {
    let rules = builtin_rules();
    let rule = rules.iter().find(|r| r.name == "necauqua").unwrap();
    let properties = bag(&[("maven.user", "bob"), ("maven.pass", "")]);

    assert!(evaluate(rule, &properties).is_none());
}

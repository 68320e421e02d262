//! Handler for `nmod publish`.

use miette::Result;

use nmod_core::manifest::Manifest;
use nmod_core::properties::{load_env_file, parse_defines, PropertyBag};
use nmod_publish::configurator::{evaluate, PublishConfigurator};
use nmod_publish::rule::{builtin_rules, PublishRule};
use nmod_publish::task::ArtifactCoordinate;

pub fn exec(defines: &[String], dry_run: bool, verbose: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let manifest = Manifest::from_path(&project_root.join("Nmod.toml"))?;

    let env_file = load_env_file(&project_root.join(".nmod.env"))?;
    let properties = PropertyBag::layered(env_file, parse_defines(defines)?);

    let coordinate = ArtifactCoordinate::new(
        &manifest.project.group,
        &manifest.project.name,
        &manifest.project.version,
    );

    let mut rules = builtin_rules();
    rules.extend(manifest.publish.iter().map(PublishRule::from_entry));

    let mut configurator = PublishConfigurator::new(coordinate);
    for rule in &rules {
        let target = evaluate(rule, &properties);
        if verbose && target.is_none() {
            eprintln!("Skipping '{}': credentials incomplete", rule.name);
        }
        configurator.register_publication(target);
    }

    let tasks = configurator.on_publish_invoked()?;

    println!(
        "Registered {} publication task(s) for {}",
        tasks.len(),
        tasks[0].coordinate
    );
    for task in tasks {
        println!(
            "  {} -> {} (as {})",
            task.target.name, task.target.url, task.target.username
        );
        if verbose {
            for url in task.upload_urls() {
                println!("    will upload {url}");
            }
        }
    }

    if dry_run {
        println!("Dry run, not handing tasks off for upload.");
        return Ok(());
    }

    // The upload itself belongs to the build tool's deferred phase; our job
    // ends once the tasks are registered and the check has passed.
    println!("Publication tasks handed off for upload.");
    Ok(())
}

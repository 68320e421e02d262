//! Handler for `nmod env`.

use miette::Result;

use nmod_core::properties::{load_env_file, parse_defines, PropertyBag};

pub fn exec(defines: &[String], reveal: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let env_file = load_env_file(&project_root.join(".nmod.env"))?;
    let properties = PropertyBag::layered(env_file, parse_defines(defines)?);

    if properties.is_empty() {
        println!("No properties configured.");
        println!("  .nmod.env: {}", project_root.join(".nmod.env").display());
        return Ok(());
    }

    println!("properties ({} entries):", properties.len());
    for (name, value) in properties.iter() {
        let display_value = if reveal { value } else { "********" };
        println!("  {} = {}", name, display_value);
    }

    Ok(())
}

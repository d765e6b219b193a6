//! Profile management commands.
//!
//! Each command loads the config, applies one change and saves the whole
//! file again.
//!
//! # Examples
//!
//! ```bash
//! # Add a profile
//! fireprofile profile add work "firefox -P work"
//!
//! # Rename it (domain rules keep pointing at the old name)
//! fireprofile profile edit work --name office
//!
//! # Delete it along with its domain rules
//! fireprofile profile remove office --force
//! ```

use super::{format_columns, prompt, warn_on_validation};
use crate::OutputFormat;
use anyhow::{Context, Result};
use console::style;
use fireprofile_core::{Profile, ProfileStore};
use std::fs;
use std::io;
use std::path::Path;

/// List all profiles in stored order
pub fn list(store: &ProfileStore, format: OutputFormat) -> Result<()> {
    let config = store.load_or_default()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.profiles)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = config
                .profiles
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.command.clone(),
                        config.rules_for(&p.name).to_string(),
                    ]
                })
                .collect();
            print!("{}", format_columns(&["NAME", "COMMAND", "RULES"], &rows));
        }
        OutputFormat::Pretty => {
            if config.profiles.is_empty() {
                println!("No profiles configured.");
                println!("Add one with: fireprofile profile add <NAME> <COMMAND>");
                return Ok(());
            }

            println!("{}", style("Profiles:").bold());
            for profile in &config.profiles {
                println!(
                    "  {:<20} {}  {}",
                    profile.name,
                    profile.command,
                    style(format!("({} rule(s))", config.rules_for(&profile.name))).dim()
                );
            }
        }
    }

    Ok(())
}

/// Add a profile. Blank name or command is a warning, not an error.
pub fn add(store: &ProfileStore, name: &str, command: &str) -> Result<()> {
    warn_on_validation(add_profile(store, name, command))
}

fn add_profile(store: &ProfileStore, name: &str, command: &str) -> fireprofile_core::Result<()> {
    let profile = Profile::from_input(name, command)?;
    let mut config = store.load_or_default()?;

    if config.find_profile(&profile.name).is_some() {
        tracing::warn!(
            "A profile named '{}' already exists; lookups use the first one",
            profile.name
        );
    }

    let name = profile.name.clone();
    config.add_profile(profile.name, profile.command);
    store.save(&config)?;

    println!("Added profile '{}'", name);
    Ok(())
}

/// Remove a profile and every domain rule pointing at it
pub fn remove(store: &ProfileStore, name: &str, force: bool) -> Result<()> {
    let mut config = store.load_or_default()?;

    if config.find_profile(name).is_none() {
        println!("No profile named '{}'", name);
        return Ok(());
    }

    if !force {
        let stdin = io::stdin();
        let question = format!("Delete profile '{}'?", name);
        if !prompt::confirm(&mut stdin.lock(), &mut io::stdout(), &question, false)? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let removal = config.remove_profile(name);
    store.save(&config)?;

    println!(
        "Deleted profile '{}' and {} domain rule(s)",
        name, removal.domain_rules
    );
    Ok(())
}

/// Replace the name and/or command of the first profile called `name`
pub fn edit(
    store: &ProfileStore,
    name: &str,
    new_name: Option<&str>,
    new_command: Option<&str>,
) -> Result<()> {
    let mut config = store.load_or_default()?;

    let Some(index) = config.profiles.iter().position(|p| p.name == name) else {
        println!("No profile named '{}'", name);
        return Ok(());
    };

    let mut profiles = config.profiles.clone();
    let current = &profiles[index];
    let edited = Profile::new(
        new_name.unwrap_or(&current.name),
        new_command.unwrap_or(&current.command),
    );
    let edited_is_blank = edited.name.trim().is_empty() || edited.command.trim().is_empty();
    if edited_is_blank {
        tracing::warn!("Blank name or command: profile '{}' will be dropped", name);
    }
    profiles[index] = edited;

    let dropped = config.replace_all_profiles(profiles);
    store.save(&config)?;

    if edited_is_blank {
        println!("Removed profile '{}' (blank name or command)", name);
    } else {
        println!("Updated profile '{}'", name);
    }
    let other_dropped = dropped - usize::from(edited_is_blank);
    if other_dropped > 0 {
        println!(
            "Also dropped {} other profile(s) with a blank name or command",
            other_dropped
        );
    }

    let still_pointing = config.rules_for(name);
    if still_pointing > 0 && config.find_profile(name).is_none() {
        println!(
            "{} {} domain rule(s) still point at '{}'. Update them with: fireprofile domain set <DOMAIN> <PROFILE>",
            style("Note:").yellow().bold(),
            still_pointing,
            name
        );
    }

    Ok(())
}

/// Replace every profile with the list in a JSON file
pub fn import(store: &ProfileStore, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let profiles: Vec<Profile> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON list of profiles", file.display()))?;

    let mut config = store.load_or_default()?;
    let dropped = config.replace_all_profiles(profiles);
    store.save(&config)?;

    println!("Imported {} profile(s)", config.profiles.len());
    if dropped > 0 {
        println!("Skipped {} profile(s) with a blank name or command", dropped);
    }

    let dangling = config.dangling_rules().count();
    if dangling > 0 {
        println!(
            "{} {} domain rule(s) point at profiles that no longer exist",
            style("Note:").yellow().bold(),
            dangling
        );
    }

    Ok(())
}

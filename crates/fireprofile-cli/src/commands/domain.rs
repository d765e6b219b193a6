use super::{format_columns, prompt, warn_on_validation};
use crate::OutputFormat;
use anyhow::Result;
use console::style;
use fireprofile_core::config::domain_from_input;
use fireprofile_core::{Error, ProfileStore};
use std::io;

/// List domain rules in stored order
pub fn list(store: &ProfileStore, format: OutputFormat) -> Result<()> {
    let config = store.load_or_default()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.domains)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = config
                .domains
                .iter()
                .map(|(domain, profile)| vec![domain.to_string(), profile.to_string()])
                .collect();
            print!("{}", format_columns(&["DOMAIN", "PROFILE"], &rows));
        }
        OutputFormat::Pretty => {
            if config.domains.is_empty() {
                println!("No domain rules configured.");
                return Ok(());
            }

            println!("{}", style("Domain rules:").bold());
            for (domain, profile) in config.domains.iter() {
                let missing = if config.find_profile(profile).is_none() {
                    format!("  {}", style("(missing profile)").yellow())
                } else {
                    String::new()
                };
                println!("  {:<30} -> {}{}", domain, profile, missing);
            }
        }
    }

    Ok(())
}

/// Map a domain and its subdomains to a configured profile
pub fn set(store: &ProfileStore, domain: &str, profile: &str) -> Result<()> {
    warn_on_validation(set_rule(store, domain, profile))
}

fn set_rule(store: &ProfileStore, domain: &str, profile: &str) -> fireprofile_core::Result<()> {
    let domain = domain_from_input(domain)?;
    let mut config = store.load_or_default()?;

    if config.find_profile(profile).is_none() {
        return Err(Error::Validation(format!(
            "Profile '{}' does not exist. Configured profiles: {}",
            profile,
            profile_names(&config.profiles)
        )));
    }

    let previous = config.set_domain_rule(domain.as_str(), profile);
    store.save(&config)?;

    match previous {
        Some(old) if old != profile => {
            println!("Updated {}: {} -> {}", domain, old, profile)
        }
        _ => println!("{} -> {}", domain, profile),
    }
    Ok(())
}

/// Delete the rule for a domain; an unknown domain is a no-op
pub fn remove(store: &ProfileStore, domain: &str, force: bool) -> Result<()> {
    let trimmed = domain.trim();
    let mut config = store.load_or_default()?;

    // Files written by hand may hold keys that were never normalized
    let domain = if config.domains.contains(trimmed) {
        trimmed.to_string()
    } else {
        domain_from_input(trimmed).unwrap_or_else(|_| trimmed.to_string())
    };
    let domain = domain.as_str();

    if !config.domains.contains(domain) {
        println!("No domain rule for '{}'", domain);
        return Ok(());
    }

    if !force {
        let stdin = io::stdin();
        let question = format!("Delete domain rule for '{}'?", domain);
        if !prompt::confirm(&mut stdin.lock(), &mut io::stdout(), &question, false)? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    config.remove_domain_rule(domain);
    store.save(&config)?;

    println!("Deleted domain rule for '{}'", domain);
    Ok(())
}

fn profile_names(profiles: &[fireprofile_core::Profile]) -> String {
    if profiles.is_empty() {
        return "(none)".to_string();
    }
    profiles
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}


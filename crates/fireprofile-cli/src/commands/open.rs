//! URL-handler mode: pick the profile for a URL and launch it.
//!
//! When no rule applies the user chooses a profile. Remembering the choice
//! stores a rule for the host's parent domain (`mail.example.com` stores
//! `example.com`) so sibling subdomains resolve without asking again.

use super::prompt;
use anyhow::{Result, anyhow, bail};
use fireprofile_browser::ProfileLauncher;
use fireprofile_core::resolve::{host_from_url, remembered_domain, resolve};
use fireprofile_core::{ConfigStore, ProfileStore};
use std::io;

#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Profile to use when no rule matches, instead of prompting
    pub profile: Option<String>,
    /// Store a rule for the parent domain after a manual choice
    pub remember: bool,
    /// Print the command instead of running it
    pub dry_run: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            profile: None,
            remember: true,
            dry_run: false,
        }
    }
}

pub fn execute(store: &ProfileStore, url: &str, options: &OpenOptions) -> Result<()> {
    let (url, host) = host_from_url(url)?;
    let mut config = store.load_or_default()?;

    if let Some(resolution) = resolve(&config, &host) {
        match config.find_profile(resolution.profile) {
            Some(profile) => {
                tracing::debug!(
                    "Using profile '{}' ({} rule '{}')",
                    profile.name,
                    resolution.kind.as_str(),
                    resolution.domain
                );
                return launch(&profile.command, url.as_str(), options.dry_run);
            }
            None => tracing::warn!(
                "Rule '{}' points at missing profile '{}'",
                resolution.domain,
                resolution.profile
            ),
        }
    }

    if config.profiles.is_empty() {
        bail!(
            "No profiles configured. Add one with: fireprofile profile add <NAME> <COMMAND>"
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let (chosen, remember) = match &options.profile {
        Some(name) => (name.clone(), options.remember),
        None => {
            let Some(name) =
                prompt::choose_profile(&mut input, &mut output, &config.profiles, &host)?
            else {
                println!("Cancelled.");
                return Ok(());
            };
            let remember = options.remember
                && prompt::confirm(&mut input, &mut output, "Remember this choice?", true)?;
            (name, remember)
        }
    };

    let command = config
        .find_profile(&chosen)
        .map(|p| p.command.clone())
        .ok_or_else(|| anyhow!("Profile '{}' not found", chosen))?;

    if remember {
        remember_choice(store, &mut config, &host, &chosen)?;
    }

    launch(&command, url.as_str(), options.dry_run)
}

/// Persist a rule for the parent domain of `host`, if it has one
fn remember_choice(
    store: &ProfileStore,
    config: &mut ConfigStore,
    host: &str,
    profile: &str,
) -> Result<()> {
    let Some(domain) = remembered_domain(host) else {
        tracing::debug!("Not remembering a rule for single-label host {}", host);
        return Ok(());
    };

    config.set_domain_rule(domain.as_str(), profile);
    store.save(config)?;
    tracing::info!("Remembered {} -> {}", domain, profile);
    Ok(())
}

fn launch(command: &str, url: &str, dry_run: bool) -> Result<()> {
    let launcher = ProfileLauncher::new(command, url)?;

    if dry_run {
        println!("{}", launcher.display_command());
    } else {
        launcher.launch()?;
    }

    Ok(())
}

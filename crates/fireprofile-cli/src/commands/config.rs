//! Configuration mode: what `fireprofile` shows when run without a URL.

use super::format_columns;
use crate::OutputFormat;
use anyhow::Result;
use console::style;
use fireprofile_core::{ConfigStore, ProfileStore};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Overview<'a> {
    path: &'a Path,
    #[serde(flatten)]
    config: &'a ConfigStore,
}

pub fn show(store: &ProfileStore, format: OutputFormat) -> Result<()> {
    let config = store.load_or_default()?;

    let output = match format {
        OutputFormat::Json => {
            let overview = Overview {
                path: store.path(),
                config: &config,
            };
            serde_json::to_string_pretty(&overview)? + "\n"
        }
        OutputFormat::Table => format_table(&config),
        OutputFormat::Pretty => format_pretty(store.path(), &config),
    };

    print!("{}", output);
    Ok(())
}

fn format_table(config: &ConfigStore) -> String {
    let profiles: Vec<Vec<String>> = config
        .profiles
        .iter()
        .map(|p| vec![p.name.clone(), p.command.clone()])
        .collect();
    let rules: Vec<Vec<String>> = config
        .domains
        .iter()
        .map(|(d, p)| vec![d.to_string(), p.to_string()])
        .collect();

    let mut output = format_columns(&["NAME", "COMMAND"], &profiles);
    output.push('\n');
    output.push_str(&format_columns(&["DOMAIN", "PROFILE"], &rules));
    output
}

fn format_pretty(path: &Path, config: &ConfigStore) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{}\n",
        style("FireProfile Configuration").bold().cyan()
    ));
    output.push_str(&format!("File: {}\n", path.display()));
    if !path.exists() {
        output.push_str(&format!(
            "      {}\n",
            style("(not created yet, showing defaults)").dim()
        ));
    }

    output.push_str(&format!(
        "\n{} ({})\n",
        style("Profiles").bold(),
        config.profiles.len()
    ));
    if config.profiles.is_empty() {
        output.push_str("  none - add one with: fireprofile profile add <NAME> <COMMAND>\n");
    }
    for profile in &config.profiles {
        output.push_str(&format!("  {:<20} {}\n", profile.name, profile.command));
    }

    output.push_str(&format!(
        "\n{} ({})\n",
        style("Domain rules").bold(),
        config.domains.len()
    ));
    if config.domains.is_empty() {
        output.push_str("  none - add one with: fireprofile domain set <DOMAIN> <PROFILE>\n");
    }
    for (domain, profile) in config.domains.iter() {
        output.push_str(&format!("  {:<30} -> {}\n", domain, profile));
    }

    let dangling: Vec<_> = config.dangling_rules().collect();
    if !dangling.is_empty() {
        output.push_str(&format!(
            "\n{} these rules point at profiles that do not exist:\n",
            style("Warning:").yellow().bold()
        ));
        for (domain, profile) in dangling {
            output.push_str(&format!("  {} -> {}\n", domain, profile));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_lists_profiles_and_rules() {
        let mut config = ConfigStore::new();
        config.add_profile("work", "firefox -P work");
        config.set_domain_rule("example.com", "work");

        let output = format_pretty(Path::new("/nonexistent/.fireprofile.json"), &config);
        assert!(output.contains("Profiles (1)"));
        assert!(output.contains("firefox -P work"));
        assert!(output.contains("example.com"));
        assert!(output.contains("not created yet"));
        assert!(!output.contains("do not exist"));
    }

    #[test]
    fn test_pretty_flags_dangling_rules() {
        let mut config = ConfigStore::new();
        config.set_domain_rule("example.com", "ghost");

        let output = format_pretty(Path::new("/nonexistent/.fireprofile.json"), &config);
        assert!(output.contains("do not exist"));
        assert!(output.contains("example.com -> ghost"));
    }
}

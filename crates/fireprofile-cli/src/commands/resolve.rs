use super::format_columns;
use crate::OutputFormat;
use anyhow::Result;
use console::style;
use fireprofile_core::ProfileStore;
use fireprofile_core::resolve::{host_from_url, resolve};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    host: String,
    profile: Option<&'a str>,
    rule: Option<&'a str>,
    #[serde(rename = "match")]
    kind: Option<&'static str>,
    command: Option<&'a str>,
}

/// Show which profile a host or URL resolves to, without launching anything
pub fn execute(store: &ProfileStore, target: &str, format: OutputFormat) -> Result<()> {
    let (_, host) = host_from_url(target)?;

    let config = store.load_or_default()?;
    let resolution = resolve(&config, &host);

    let report = ResolveReport {
        profile: resolution.map(|r| r.profile),
        rule: resolution.map(|r| r.domain),
        kind: resolution.map(|r| r.kind.as_str()),
        command: resolution
            .and_then(|r| config.find_profile(r.profile))
            .map(|p| p.command.as_str()),
        host,
    };

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        OutputFormat::Table => format_columns(
            &["HOST", "PROFILE", "RULE", "MATCH"],
            &[vec![
                report.host.clone(),
                report.profile.unwrap_or("-").to_string(),
                report.rule.unwrap_or("-").to_string(),
                report.kind.unwrap_or("-").to_string(),
            ]],
        ),
        OutputFormat::Pretty => format_pretty(&report),
    };

    print!("{}", output);
    Ok(())
}

fn format_pretty(report: &ResolveReport) -> String {
    match (report.profile, report.rule, report.kind) {
        (Some(profile), Some(rule), Some(kind)) => {
            let mut output = format!(
                "{} -> {} ({} rule '{}')\n",
                report.host,
                style(profile).green().bold(),
                kind,
                rule
            );
            if report.command.is_none() {
                output.push_str(&format!(
                    "{} profile '{}' does not exist; you will be asked to choose\n",
                    style("Warning:").yellow().bold(),
                    profile
                ));
            }
            output
        }
        _ => format!(
            "{} -> {}\n",
            report.host,
            style("no rule (you will be asked to choose)").dim()
        ),
    }
}

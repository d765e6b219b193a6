use crate::{Error, Result};
use std::process::{Child, Command, Stdio};

/// Runs a profile's command template with a URL appended
pub struct ProfileLauncher {
    command: String,
    url: String,
}

impl ProfileLauncher {
    /// Create a launcher. The command is only checked for being non-blank.
    pub fn new(command: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }

        Ok(Self {
            command,
            url: url.into(),
        })
    }

    /// Spawn the command through the platform shell without waiting for it
    pub fn launch(&self) -> Result<Child> {
        let (program, args) = self.build_invocation();
        tracing::info!("Launching: {}", self.display_command());

        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Launch {
                command: self.command.clone(),
                source,
            })
    }

    /// The command line as a user would type it
    pub fn display_command(&self) -> String {
        format!("{} {}", self.command, self.url)
    }

    /// Build the shell program and its arguments.
    ///
    /// On Unix the URL is passed as a positional parameter (`"$@"`) so the
    /// shell never interprets characters inside it.
    #[cfg(not(windows))]
    fn build_invocation(&self) -> (&'static str, Vec<String>) {
        (
            "sh",
            vec![
                "-c".to_string(),
                format!("{} \"$@\"", self.command),
                "fireprofile".to_string(),
                self.url.clone(),
            ],
        )
    }

    #[cfg(windows)]
    fn build_invocation(&self) -> (&'static str, Vec<String>) {
        (
            "cmd",
            vec![
                "/C".to_string(),
                format!("{} \"{}\"", self.command, self.url),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(
            ProfileLauncher::new("   ", "https://example.com"),
            Err(Error::EmptyCommand)
        ));
    }

    #[test]
    fn test_display_command_concatenates_url() {
        let launcher = ProfileLauncher::new("firefox -P work", "https://example.com").unwrap();
        assert_eq!(
            launcher.display_command(),
            "firefox -P work https://example.com"
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unix_invocation_passes_url_as_parameter() {
        let launcher =
            ProfileLauncher::new("firefox -P work", "https://example.com/?a=1&b=$(x)").unwrap();

        let (program, args) = launcher.build_invocation();

        assert_eq!(program, "sh");
        assert_eq!(args[0], "-c");
        assert_eq!(args[1], "firefox -P work \"$@\"");
        assert_eq!(args[2], "fireprofile");
        assert_eq!(args[3], "https://example.com/?a=1&b=$(x)");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_launch_runs_command_with_url() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let command = format!("printf '%s' > '{}'", out.display());

        let launcher = ProfileLauncher::new(command, "https://example.com/x").unwrap();
        let status = launcher.launch().unwrap().wait().unwrap();

        assert!(status.success());
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "https://example.com/x"
        );
    }
}

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use fireprofile_cli::OutputFormat;
use fireprofile_cli::commands;
use fireprofile_cli::commands::open::OpenOptions;
use fireprofile_core::ProfileStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fireprofile")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Open URLs in the browser profile mapped to their domain",
    long_about = "FireProfile picks a browser launch profile for a URL based on its domain. \
                  Register it as your default browser to route links, or run it without a URL \
                  to see and edit profiles and domain rules."
)]
struct Cli {
    /// URL to open (same as `fireprofile open <URL>`)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Show the configuration instead of opening a URL
    #[arg(long, conflicts_with = "url")]
    config: bool,

    /// Path to the config file (defaults to ~/.fireprofile.json)
    #[arg(long, value_name = "PATH", env = "FIREPROFILE_CONFIG", global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a URL in the profile its domain maps to
    Open {
        /// URL to open
        #[arg(value_name = "URL")]
        url: String,

        /// Profile to use if no domain rule matches (skips the prompt)
        #[arg(short, long)]
        profile: Option<String>,

        /// Do not store a domain rule for the choice
        #[arg(long)]
        no_remember: bool,

        /// Print the command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show which profile a host or URL resolves to
    Resolve {
        /// Hostname or URL
        #[arg(value_name = "HOST")]
        target: String,
    },

    /// Manage launch profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage domain rules
    Domain {
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// List all profiles
    List,

    /// Add a profile
    Add {
        /// Profile name
        name: String,

        /// Launch command; the URL is appended when it runs
        command: String,
    },

    /// Delete a profile and the domain rules that use it
    Remove {
        /// Profile name
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Rename a profile or change its command
    Edit {
        /// Current profile name
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        /// New launch command
        #[arg(long = "command", value_name = "COMMAND")]
        new_command: Option<String>,
    },

    /// Replace all profiles with a JSON list of {"name", "command"} objects
    Import {
        /// JSON file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum DomainCommands {
    /// List all domain rules
    List,

    /// Map a domain and its subdomains to a profile
    Set {
        /// Domain, e.g. example.com
        domain: String,

        /// Profile name
        profile: String,
    },

    /// Delete the rule for a domain
    Remove {
        /// Domain
        domain: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let store = match cli.config_file {
        Some(path) => ProfileStore::new(path),
        None => ProfileStore::at_default_path()?,
    };
    tracing::debug!("Using config file {}", store.path().display());

    let Some(command) = cli.command else {
        return match cli.url {
            Some(url) if !cli.config => {
                commands::open::execute(&store, &url, &OpenOptions::default())
            }
            _ => commands::config::show(&store, cli.format),
        };
    };

    match command {
        Commands::Open {
            url,
            profile,
            no_remember,
            dry_run,
        } => {
            let options = OpenOptions {
                profile,
                remember: !no_remember,
                dry_run,
            };
            commands::open::execute(&store, &url, &options)
        }
        Commands::Resolve { target } => commands::resolve::execute(&store, &target, cli.format),
        Commands::Profile { command } => match command {
            ProfileCommands::List => commands::profile::list(&store, cli.format),
            ProfileCommands::Add { name, command } => {
                commands::profile::add(&store, &name, &command)
            }
            ProfileCommands::Remove { name, force } => {
                commands::profile::remove(&store, &name, force)
            }
            ProfileCommands::Edit {
                name,
                new_name,
                new_command,
            } => commands::profile::edit(
                &store,
                &name,
                new_name.as_deref(),
                new_command.as_deref(),
            ),
            ProfileCommands::Import { file } => commands::profile::import(&store, &file),
        },
        Commands::Domain { command } => match command {
            DomainCommands::List => commands::domain::list(&store, cli.format),
            DomainCommands::Set { domain, profile } => {
                commands::domain::set(&store, &domain, &profile)
            }
            DomainCommands::Remove { domain, force } => {
                commands::domain::remove(&store, &domain, force)
            }
        },
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("fireprofile_cli=debug,fireprofile_core=debug,fireprofile_browser=debug")
    } else {
        EnvFilter::new("fireprofile_cli=info,fireprofile_core=warn,fireprofile_browser=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

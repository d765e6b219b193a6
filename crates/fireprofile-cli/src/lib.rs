//! Command implementations behind the `fireprofile` binary.

use clap::ValueEnum;

pub mod commands;

/// How list and overview commands render their output
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Styled text for a terminal
    Pretty,
    /// Machine-readable JSON on stdout
    Json,
    /// Aligned columns
    Table,
}

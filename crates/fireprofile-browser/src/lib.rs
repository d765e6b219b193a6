//! Launches the command of a chosen profile with a URL.

mod error;
mod launcher;

pub use error::{Error, Result};
pub use launcher::ProfileLauncher;

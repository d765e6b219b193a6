use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("Profile command is empty")]
    EmptyCommand,
}

pub type Result<T> = std::result::Result<T, Error>;

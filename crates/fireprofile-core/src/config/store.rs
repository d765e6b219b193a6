use super::reader::ConfigReader;
use super::types::ConfigStore;
use super::writer::ConfigWriter;
use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the config under the home directory
pub const CONFIG_FILE_NAME: &str = ".fireprofile.json";

/// Loads and saves the [`ConfigStore`] at a single backing file.
///
/// Every save rewrites the whole file. There is no locking, so two
/// processes saving the same file race and the last write wins.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by `~/.fireprofile.json`
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(Error::NoHomeDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, or an empty one if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error; it is
    /// never replaced by the empty default.
    pub fn load_or_default(&self) -> Result<ConfigStore> {
        match ConfigReader::from_file(&self.path) {
            Ok(store) => Ok(store),
            Err(Error::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "No config at {}, starting with an empty one",
                    self.path.display()
                );
                Ok(ConfigStore::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, store: &ConfigStore) -> Result<()> {
        ConfigWriter::to_file(store, &self.path)
    }
}

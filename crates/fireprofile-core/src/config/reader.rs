use super::types::ConfigStore;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct ConfigReader;

impl ConfigReader {
    /// Read and parse a config file from the given path
    pub fn from_file(path: &Path) -> Result<ConfigStore> {
        tracing::debug!("Reading config file from: {}", path.display());

        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let store: ConfigStore =
            serde_json::from_reader(reader).map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            "Parsed config with {} profile(s) and {} domain rule(s)",
            store.profiles.len(),
            store.domains.len()
        );

        Ok(store)
    }
}

use super::types::ConfigStore;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

pub struct ConfigWriter;

impl ConfigWriter {
    /// Write the whole config to a file, replacing its contents
    pub fn to_file(store: &ConfigStore, path: &Path) -> Result<()> {
        tracing::debug!("Writing config file to: {}", path.display());

        let json = Self::to_string(store)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Saved {} profile(s) and {} domain rule(s) to {}",
            store.profiles.len(),
            store.domains.len(),
            path.display()
        );

        Ok(())
    }

    /// Convert a config to a pretty-printed JSON string
    pub fn to_string(store: &ConfigStore) -> Result<String> {
        Ok(serde_json::to_string_pretty(store)?)
    }
}

//! Loading dictionaries and character set documents named on the command line

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;
use strcheck_core::{Error, SetRegistry};

/// Read a flat JSON object of string keys to string values
pub fn load_dictionary(path: &Path) -> CliResult<BTreeMap<String, String>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let dictionary: BTreeMap<String, String> = serde_json::from_str(&content)
        .map_err(|e| CliError::InvalidDictionary(format!("{}: {e}", path.display())))?;

    log::debug!(
        "Loaded {} dictionary entries from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// The standard sets, with the sets from `extra` merged on top
pub fn load_registry(extra: Option<&Path>) -> CliResult<SetRegistry> {
    let mut registry = SetRegistry::standard().clone();

    if let Some(path) = extra {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let custom = SetRegistry::from_path(path).map_err(|e| match e {
            Error::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        })?;
        log::info!("Merging {} sets from {}", custom.len(), path.display());
        registry.merge(custom);
    }

    Ok(registry)
}

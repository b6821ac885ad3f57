use std::{fs, path::Path};

use matchbox_lib::{ExistingPreference, Resource};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Read a JSON array of [`Resource`]s.
pub fn resources(path: &Path) -> Result<Vec<Resource>, Error> {
    read_json(path)
}

/// Read a JSON array of [`ExistingPreference`]s.
pub fn existing_preferences(path: &Path) -> Result<Vec<ExistingPreference>, Error> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let items: Vec<T> = serde_json::from_str(&contents).map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;

    debug!("Read {} records from {}", items.len(), path.display());

    Ok(items)
}

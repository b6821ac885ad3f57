use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No owner given; pass --owner or set `owner_id` in the configuration")]
    MissingOwner,
    #[error("No resources given; pass --resources")]
    MissingResources,
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Malformed JSON in {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Preferences(#[from] matchbox_lib::preferences::Error),
}

impl Error {
    pub fn exit_code(&self) -> sysexits::ExitCode {
        use sysexits::ExitCode;

        match self {
            Error::MissingOwner | Error::MissingResources => ExitCode::Usage,
            Error::Read { .. } => ExitCode::NoInput,
            Error::Decode { .. } | Error::Preferences(_) => ExitCode::DataErr,
            Error::Encode(_) => ExitCode::IoErr,
        }
    }
}

//*** START FILE: src/error.rs ***//
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: Box<csv::Error>,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl TranslateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslateError::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        TranslateError::Csv { path: path.into(), source: Box::new(source) }
    }
}
//*** END FILE: src/error.rs ***//

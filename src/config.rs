//*** START FILE: src/config.rs ***//
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::TranslateError;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Paths of the three inputs and three outputs of a translation run.
/// Every key is optional in `config.toml`; missing keys keep the defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input_file: PathBuf,
    pub find_words_file: PathBuf,
    pub dictionary_file: PathBuf,
    pub output_file: PathBuf,
    pub performance_file: PathBuf,
    pub frequency_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: PathBuf::from("t8.shakespeare.txt"),
            find_words_file: PathBuf::from("find_words.txt"),
            dictionary_file: PathBuf::from("french_dictionary.csv"),
            output_file: PathBuf::from("t8.shakespeare.translated.txt"),
            performance_file: PathBuf::from("performance.txt"),
            frequency_file: PathBuf::from("frequency.csv"),
        }
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<Config, TranslateError> {
    toml::from_str::<Config>(contents).map_err(|e| TranslateError::Config {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Loads the config file, falling back to the defaults when it does not exist.
pub fn load_config_from_file(file_path: &Path) -> Result<Config, TranslateError> {
    match fs::read_to_string(file_path) {
        Ok(contents) => parse_config(file_path, &contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %file_path.display(), "no config file, using default paths");
            Ok(Config::default())
        }
        Err(e) => Err(TranslateError::io(file_path, e)),
    }
}

//*** END FILE: src/config.rs ***//

//*** START FILE: src/parsing/dictionary_csv.rs ***//
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::TranslateError;
use crate::substitution::FrenchDictionary;

/// Parses `english,french[,...]` records into a dictionary.
///
/// There is no header row. Records with fewer than two fields are skipped;
/// fields past the second are ignored.
pub fn parse_dictionary<R: Read>(reader: R, source: &Path) -> Result<FrenchDictionary, TranslateError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut dictionary = FrenchDictionary::new();
    let mut skipped = 0usize;
    for (line_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| TranslateError::csv(source, e))?;
        match (record.get(0), record.get(1)) {
            (Some(english), Some(french)) => dictionary.insert(english, french),
            _ => {
                skipped += 1;
                tracing::debug!(record = line_idx + 1, "skipping dictionary record with fewer than two fields");
            }
        }
    }

    tracing::info!(
        path = %source.display(),
        entries = dictionary.size(),
        skipped,
        "loaded dictionary"
    );
    Ok(dictionary)
}

pub fn load_dictionary(file_path: &Path) -> Result<FrenchDictionary, TranslateError> {
    let file = File::open(file_path).map_err(|e| TranslateError::io(file_path, e))?;
    parse_dictionary(BufReader::new(file), file_path)
}

//*** END FILE: src/parsing/dictionary_csv.rs ***//

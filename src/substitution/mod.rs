//*** START FILE: src/substitution/mod.rs ***//
pub mod dictionary;
pub mod engine;
pub mod frequency;
pub mod record;

// Re-export the pieces the run orchestration and main.rs use
pub use dictionary::FrenchDictionary;
pub use engine::replace_words;
pub use frequency::{count_frequencies, frequency_rows, FrequencyRow, FrequencyTable};
pub use record::ReplacementRecord;
//*** END FILE: src/substitution/mod.rs ***//

//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod parsing;
pub mod performance;
pub mod report_io;
pub mod substitution;
pub mod translation_run;

pub use config::Config;
pub use error::TranslateError;
pub use substitution::{replace_words, FrenchDictionary, ReplacementRecord};
pub use translation_run::{run_translation, TranslationOutcome};

//*** END FILE: src/lib.rs ***//

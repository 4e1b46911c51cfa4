//*** START FILE: src/translation_run.rs ***//
use std::time::Instant;

use crate::config::Config;
use crate::error::TranslateError;
use crate::parsing::{load_dictionary, load_find_words};
use crate::performance::{capture_resident_memory, PerformanceReport};
use crate::report_io::{
    read_source_text, save_frequency_csv, write_performance_report, write_translated_text,
};
use crate::substitution::{frequency_rows, replace_words, ReplacementRecord};

#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub modified_text: String,
    pub replacements: ReplacementRecord,
    pub performance: PerformanceReport,
}

impl TranslationOutcome {
    pub fn replaced_word_count(&self) -> usize {
        self.replacements.len()
    }
}

/// Loads the inputs and runs the substitution pass. The reported time covers
/// loading and substitution only.
pub fn process_text(config: &Config) -> Result<TranslationOutcome, TranslateError> {
    let start = Instant::now();

    let dictionary = load_dictionary(&config.dictionary_file)?;
    let find_words = load_find_words(&config.find_words_file)?;
    let text = read_source_text(&config.input_file)?;
    tracing::info!(
        path = %config.input_file.display(),
        bytes = text.len(),
        "read source text"
    );

    let (modified_text, replacements) = replace_words(&text, &dictionary, &find_words);

    let performance = PerformanceReport::new(start.elapsed(), capture_resident_memory());
    Ok(TranslationOutcome {
        modified_text,
        replacements,
        performance,
    })
}

/// Runs a full pass and writes the translated text, the performance report
/// and the frequency CSV.
pub fn run_translation(config: &Config) -> Result<TranslationOutcome, TranslateError> {
    let outcome = process_text(config)?;
    tracing::info!(
        replaced = outcome.replaced_word_count(),
        elapsed_ms = outcome.performance.elapsed.as_millis() as u64,
        memory_mb = outcome.performance.memory_mb(),
        "substitution finished"
    );

    write_translated_text(&outcome.modified_text, &config.output_file)?;
    tracing::info!(path = %config.output_file.display(), "saved translated text");

    write_performance_report(&outcome.performance, &config.performance_file)?;
    tracing::info!(path = %config.performance_file.display(), "saved performance report");

    let rows = frequency_rows(&outcome.replacements);
    save_frequency_csv(&rows, &config.frequency_file)?;
    tracing::info!(path = %config.frequency_file.display(), rows = rows.len(), "saved frequency report");

    Ok(outcome)
}
//*** END FILE: src/translation_run.rs ***//

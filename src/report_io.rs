//*** START FILE: src/report_io.rs ***//
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TranslateError;
use crate::performance::PerformanceReport;
use crate::substitution::FrequencyRow;

pub const FREQUENCY_HEADER: [&str; 3] = ["English word", "French word", "Frequency"];

pub fn read_source_text(file_path: &Path) -> Result<String, TranslateError> {
    fs::read_to_string(file_path).map_err(|e| TranslateError::io(file_path, e))
}

/// Writes the translated document exactly as produced.
pub fn write_translated_text(text: &str, file_path: &Path) -> Result<(), TranslateError> {
    fs::write(file_path, text).map_err(|e| TranslateError::io(file_path, e))
}

pub fn write_performance_report(
    report: &PerformanceReport,
    file_path: &Path,
) -> Result<(), TranslateError> {
    let file = File::create(file_path).map_err(|e| TranslateError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(report.render().as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| TranslateError::io(file_path, e))
}

/// Writes the header and one CRLF-terminated row per entry. The header is
/// written even when there are no rows.
pub fn write_frequency_csv<W: Write>(
    rows: &[FrequencyRow],
    writer: W,
    file_path: &Path,
) -> Result<(), TranslateError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer
        .write_record(FREQUENCY_HEADER)
        .map_err(|e| TranslateError::csv(file_path, e))?;
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| TranslateError::csv(file_path, e))?;
    }
    csv_writer.flush().map_err(|e| TranslateError::io(file_path, e))
}

pub fn save_frequency_csv(rows: &[FrequencyRow], file_path: &Path) -> Result<(), TranslateError> {
    let file = File::create(file_path).map_err(|e| TranslateError::io(file_path, e))?;
    write_frequency_csv(rows, BufWriter::new(file), file_path)
}

//*** END FILE: src/report_io.rs ***//

//*** START FILE: src/performance.rs ***//
use std::time::Duration;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Wall-clock time and resident memory of one translation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    pub elapsed: Duration,
    /// `None` when the platform could not report it.
    pub resident_bytes: Option<usize>,
}

impl PerformanceReport {
    pub fn new(elapsed: Duration, resident_bytes: Option<usize>) -> Self {
        PerformanceReport { elapsed, resident_bytes }
    }

    pub fn memory_mb(&self) -> f64 {
        self.resident_bytes.unwrap_or(0) as f64 / BYTES_PER_MB
    }

    /// The two-line text written to the performance file.
    pub fn render(&self) -> String {
        format!(
            "Time to process: {}\nMemory used: {:.2} MB",
            format_elapsed(self.elapsed),
            self.memory_mb()
        )
    }
}

/// Total time in minutes and the seconds past the minute, each rounded to
/// the nearest whole number independently, ties to even. There is no carry,
/// so 59.6 s renders as "1 minutes 60 seconds".
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let minutes = (total / 60.0).round_ties_even() as u64;
    let seconds = (total % 60.0).round_ties_even() as u64;
    format!("{} minutes {} seconds", minutes, seconds)
}

/// Resident set size of the current process, in bytes.
pub fn capture_resident_memory() -> Option<usize> {
    let stats = memory_stats::memory_stats();
    if stats.is_none() {
        tracing::warn!("resident memory is not available on this platform, reporting 0");
    }
    stats.map(|s| s.physical_mem)
}

//*** END FILE: src/performance.rs ***//

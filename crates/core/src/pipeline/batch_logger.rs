use crate::pipeline::symmetrize_sources_use_case::BatchSummary;

/// Receives per-source status and the end-of-batch tally.
///
/// Keeps the use case independent of where the report goes (stdout for the
/// CLI, nowhere for tests).
pub trait BatchLogger: Send {
    /// Reports whether any face was found in the source at `index`.
    fn item(&mut self, index: usize, source: &str, detected: bool);

    /// Reports the totals once every source has been processed.
    fn summary(&mut self, summary: &BatchSummary);
}

/// Silent logger that discards all events.
pub struct NullBatchLogger;

impl BatchLogger for NullBatchLogger {
    fn item(&mut self, _index: usize, _source: &str, _detected: bool) {}
    fn summary(&mut self, _summary: &BatchSummary) {}
}

/// Prints one status line per source and a final tally to stdout.
pub struct StdoutBatchLogger;

impl StdoutBatchLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutBatchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchLogger for StdoutBatchLogger {
    fn item(&mut self, index: usize, source: &str, detected: bool) {
        println!("{}", format_item(index, source, detected));
    }

    fn summary(&mut self, summary: &BatchSummary) {
        println!("{}", format_summary(summary));
    }
}

pub fn format_item(index: usize, source: &str, detected: bool) -> String {
    let status = if detected { "Detected" } else { "Not Detected" };
    format!("[{index:02}] {source}=>{status}")
}

pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "DATA: {} OK: {} NG: {}",
        summary.total, summary.detected, summary.not_detected
    )
}

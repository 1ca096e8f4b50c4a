//! Progress callbacks for seed, CSV and generator runs.
//!
//! Library code never prints. Each run announces its phases ("Seeding
//! hotels", "Generating 10 hotels in Fez"), reports every hotel row it
//! handles, and finishes with a one-line summary of created and skipped
//! records. The CLI decides how to show them.

/// Receives progress from an import run.
pub trait ImportProgress {
    /// A hotel row was handled, whether inserted or skipped. `current`
    /// counts from 1 up to `total` across the run. `name` is the hotel name,
    /// or `(malformed)` for a CSV row that could not be read.
    fn on_record(&self, current: usize, total: usize, name: &str);

    /// A new phase started.
    fn on_phase(&self, message: &str);

    /// The run committed. `message` summarizes the counts.
    fn on_complete(&self, message: &str);
}

/// Discards everything. Used for `--quiet` and in tests.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_record(&self, _current: usize, _total: usize, _name: &str) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Record lines logged by [`LogProgress`] are spaced this far apart.
const LOG_EVERY: usize = 25;

/// Plain `log` output for non-interactive runs. Logs phases, the summary,
/// and every `LOG_EVERY`th record plus the last one.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_record(&self, current: usize, total: usize, name: &str) {
        if current.is_multiple_of(LOG_EVERY) || current == total {
            log::info!("  {current:>5}/{total} {name}");
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{message}");
    }

    fn on_complete(&self, message: &str) {
        log::info!("{message}");
    }
}

//! Progress display for import runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use hoteldir_import::{ImportProgress, LogProgress, SilentProgress};

/// Progress bar driven by import callbacks. Drawn on stderr.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let style = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(style);
        Self { bar }
    }
}

impl ImportProgress for BarProgress {
    fn on_record(&self, current: usize, total: usize, name: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
        self.bar.set_message(name.to_string());
    }

    fn on_phase(&self, message: &str) {
        self.bar.suspend(|| log::info!("{message}"));
    }

    fn on_complete(&self, message: &str) {
        self.bar.finish_and_clear();
        log::info!("{message}");
    }
}

/// Pick a reporter: nothing in quiet mode, plain log lines when stderr is
/// not a terminal, a progress bar otherwise.
pub(crate) fn reporter(quiet: bool) -> Box<dyn ImportProgress> {
    if quiet {
        Box::new(SilentProgress)
    } else if console_is_interactive() {
        Box::new(BarProgress::new())
    } else {
        Box::new(LogProgress)
    }
}

fn console_is_interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

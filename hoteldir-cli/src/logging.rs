//! Logger setup for the CLI.
//!
//! All user-facing output goes through the `log` macros. Info lines are
//! printed bare, warnings and errors get a colored prefix, and `--verbose`
//! adds timestamps and module paths. With `--logfile`, every line is also
//! appended to the file with ANSI escapes removed.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Install the global logger. Must be called once, before any output.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG wins over the flags
    builder.parse_default_env();
    builder.format(move |buf, record| {
        if verbose {
            write!(buf, "{} ", buf.timestamp_millis())?;
        }
        match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Debug | Level::Trace => writeln!(
                buf,
                "{} {}",
                format!("[{}]", record.module_path().unwrap_or("hoteldir"))
                    .if_supports_color(Stdout, |t| t.dimmed()),
                record.args()
            ),
        }
    });
    builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
        stdout: io::stdout(),
        file,
    })));
    builder
        .try_init()
        .map_err(|e| io::Error::other(format!("logger already initialized: {e}")))
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Writes to stdout and, if set, to a log file with ANSI escapes stripped.
struct TeeWriter {
    stdout: io::Stdout,
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

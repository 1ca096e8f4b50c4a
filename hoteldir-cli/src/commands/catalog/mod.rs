pub(crate) mod import;
pub(crate) mod init;
pub(crate) mod reset;
pub(crate) mod seed;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hoteldir_import::ImportStats;

/// Summarize an import run.
pub(crate) fn log_import_stats(title: &str, stats: &ImportStats) {
    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    if stats.cities_created > 0 {
        log::info!("  Cities created:     {:>6}", stats.cities_created);
    }
    if stats.categories_created > 0 {
        log::info!("  Categories created: {:>6}", stats.categories_created);
    }
    if stats.users_created > 0 {
        log::info!("  Users created:      {:>6}", stats.users_created);
    }
    log::info!("  Hotels created:     {:>6}", stats.hotels_created);
    if stats.skipped > 0 {
        log::info!(
            "  Skipped:            {:>6}",
            stats.skipped.if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

use std::path::{Path, PathBuf};

use crate::CliError;
use crate::commands::open_catalog;
use crate::settings::default_catalog_dir;

use super::log_import_stats;

/// Load the YAML seed dataset into the catalog.
pub(crate) fn run_catalog_seed(
    db_path: &Path,
    catalog_dir: Option<PathBuf>,
    reset: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let catalog_dir = catalog_dir.unwrap_or_else(default_catalog_dir);
    if !catalog_dir.is_dir() {
        return Err(CliError::usage(format!(
            "Catalog directory not found at {}. Pass --catalog-dir.",
            catalog_dir.display()
        )));
    }

    let conn = open_catalog(db_path)?;
    let progress = crate::progress::reporter(quiet);

    log::info!("Seeding from {}", catalog_dir.display());
    let stats = hoteldir_import::seed_catalog(&conn, &catalog_dir, reset, Some(progress.as_ref()))?;

    crate::log_blank();
    log_import_stats("Seed complete", &stats);
    log::info!("  Database: {}", db_path.display());
    Ok(())
}

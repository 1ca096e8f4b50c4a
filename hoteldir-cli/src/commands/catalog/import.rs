use std::path::Path;

use crate::CliError;
use crate::commands::open_catalog;

use super::log_import_stats;

/// Import hotels from a CSV file.
pub(crate) fn run_catalog_import_csv(db_path: &Path, file: &Path, quiet: bool) -> Result<(), CliError> {
    if !file.is_file() {
        return Err(CliError::usage(format!("CSV file not found: {}", file.display())));
    }

    let conn = open_catalog(db_path)?;
    let progress = crate::progress::reporter(quiet);
    let stats = hoteldir_import::import_csv(&conn, file, Some(progress.as_ref()))?;

    crate::log_blank();
    log_import_stats("CSV import complete", &stats);
    Ok(())
}

/// Generate placeholder hotels for a list of cities.
pub(crate) fn run_catalog_generate(
    db_path: &Path,
    cities: Vec<String>,
    limit: usize,
    quiet: bool,
) -> Result<(), CliError> {
    let cities: Vec<String> = if cities.is_empty() {
        hoteldir_import::DEFAULT_CITIES
            .iter()
            .map(|c| c.to_string())
            .collect()
    } else {
        cities
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    };
    if limit == 0 {
        return Err(CliError::usage("--limit must be at least 1"));
    }

    let conn = open_catalog(db_path)?;
    let progress = crate::progress::reporter(quiet);
    let stats = hoteldir_import::generate_hotels(&conn, &cities, limit, Some(progress.as_ref()))?;

    crate::log_blank();
    log_import_stats("Generation complete", &stats);
    Ok(())
}

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod hotels;

use std::collections::HashMap;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use hoteldir_catalog::Hotel;

use crate::CliError;
use crate::cli_types::PasswordArgs;

/// Open the catalog database, creating it if needed.
pub(crate) fn open_catalog(db_path: &Path) -> Result<Connection, CliError> {
    hoteldir_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database at {}: {}",
            db_path.display(),
            e
        ))
    })
}

/// Open a catalog database that must already exist.
pub(crate) fn open_existing_catalog(db_path: &Path) -> Result<Connection, CliError> {
    if !db_path.exists() {
        return Err(CliError::database(format!(
            "No catalog database found at {}. Run 'hoteldir catalog init' or 'hoteldir catalog seed' first.",
            db_path.display()
        )));
    }
    open_catalog(db_path)
}

/// The password from `--password` or `HOTELDIR_PASSWORD`.
pub(crate) fn require_password(args: PasswordArgs) -> Result<String, CliError> {
    args.password.ok_or_else(|| {
        CliError::usage("A password is required: pass --password or set HOTELDIR_PASSWORD")
    })
}

/// City and category names by id, for display.
pub(crate) struct PlaceNames {
    cities: HashMap<i64, String>,
    categories: HashMap<i64, String>,
}

impl PlaceNames {
    pub(crate) fn load(conn: &Connection) -> Result<Self, CliError> {
        let cities = hoteldir_db::list_cities(conn).map_err(query_error)?;
        let categories = hoteldir_db::list_categories(conn).map_err(query_error)?;
        Ok(Self {
            cities: cities.into_iter().map(|c| (c.id, c.name)).collect(),
            categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
        })
    }

    pub(crate) fn city(&self, id: i64) -> &str {
        self.cities.get(&id).map(String::as_str).unwrap_or("?")
    }

    pub(crate) fn category(&self, id: i64) -> &str {
        self.categories.get(&id).map(String::as_str).unwrap_or("?")
    }
}

/// One summary line per hotel.
pub(crate) fn log_hotel_rows(hotels: &[Hotel], names: &PlaceNames) {
    for hotel in hotels {
        let status = if hotel.is_available {
            String::new()
        } else {
            format!(" {}", "(unavailable)".if_supports_color(Stdout, |t| t.dimmed()))
        };
        log::info!(
            "  {:>4}  {:<36} {:<14} {:<16} {:>4.1}  {:>8.2}{}",
            hotel.id,
            truncate_str(&hotel.name, 36),
            truncate_str(names.city(hotel.city_id), 14),
            truncate_str(names.category(hotel.category_id), 16),
            hotel.rating,
            hotel.price_per_night,
            status,
        );
    }
}

pub(crate) fn log_hotel_header() {
    log::info!(
        "{}",
        format!(
            "  {:>4}  {:<36} {:<14} {:<16} {:>4}  {:>8}",
            "ID", "Name", "City", "Category", "Rate", "Price"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
}

pub(crate) fn query_error(e: hoteldir_db::OperationError) -> CliError {
    match e {
        hoteldir_db::OperationError::Invalid(v) => CliError::usage(format!("Invalid filter: {v}")),
        other => CliError::database(format!("Query failed: {other}")),
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_str("Riad Fes", 20), "Riad Fes");
        assert_eq!(truncate_str("Hilton Garden Inn Tanger", 10), "Hilton ...");
        assert_eq!(truncate_str("Résidence", 6), "Rés...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn password_required() {
        let missing = PasswordArgs { password: None };
        assert!(matches!(require_password(missing), Err(CliError::Usage(_))));

        let given = PasswordArgs {
            password: Some("secret1".to_string()),
        };
        assert_eq!(require_password(given).unwrap(), "secret1");
    }
}

//! Seed the catalog database from a YAML dataset directory.
//!
//! Cities and categories are inserted first, then users (passwords hashed
//! on the way in), then hotels, which reference their city and category by
//! name. Records that already exist are skipped, so seeding is repeatable.

use std::path::Path;

use hoteldir_catalog::types::*;
use hoteldir_catalog::{YamlError, load_seed_data};
use hoteldir_db::auth::{self, AuthError};
use hoteldir_db::operations::{self, OperationError};
use rusqlite::Connection;
use thiserror::Error;

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Catalog data error: {0}")]
    Yaml(#[from] YamlError),
    #[error("Failed to read CSV {path}: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Password hashing failed: {0}")]
    Auth(#[from] AuthError),
}

/// Statistics from a single import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub cities_created: u64,
    pub categories_created: u64,
    pub users_created: u64,
    pub hotels_created: u64,
    /// Records that already existed or could not be used.
    pub skipped: u64,
}

impl ImportStats {
    pub fn records_created(&self) -> u64 {
        self.cities_created + self.categories_created + self.users_created + self.hotels_created
    }
}

/// Load the dataset under `catalog_dir` and insert it.
///
/// With `reset`, all cities, categories, hotels and users are deleted first.
/// The whole run is one transaction and ends with an import log entry.
pub fn seed_catalog(
    conn: &Connection,
    catalog_dir: &Path,
    reset: bool,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let data = load_seed_data(catalog_dir)?;
    if data.is_empty() {
        log::warn!("No seed data found in {}", catalog_dir.display());
    }

    let mut stats = ImportStats::default();
    let tx = conn.unchecked_transaction()?;

    if reset {
        if let Some(p) = progress {
            p.on_phase("Clearing existing catalog");
        }
        reset_catalog(&tx)?;
    }

    if let Some(p) = progress {
        p.on_phase("Seeding cities and categories");
    }
    for city in &data.cities {
        if operations::find_city_by_name(&tx, &city.name)?.is_some() {
            stats.skipped += 1;
            continue;
        }
        if let Err(e) = city.validate() {
            log::warn!("Skipping city '{}': {e}", city.name);
            stats.skipped += 1;
            continue;
        }
        operations::insert_city(&tx, city)?;
        stats.cities_created += 1;
    }
    for category in &data.categories {
        if operations::find_category_by_name(&tx, &category.name)?.is_some() {
            stats.skipped += 1;
            continue;
        }
        if let Err(e) = category.validate() {
            log::warn!("Skipping category '{}': {e}", category.name);
            stats.skipped += 1;
            continue;
        }
        operations::insert_category(&tx, category)?;
        stats.categories_created += 1;
    }

    if let Some(p) = progress {
        p.on_phase("Seeding users");
    }
    for user in &data.users {
        seed_user(&tx, user, &mut stats)?;
    }

    if let Some(p) = progress {
        p.on_phase("Seeding hotels");
    }
    for (i, hotel) in data.hotels.iter().enumerate() {
        seed_hotel(&tx, hotel, &mut stats)?;
        if let Some(p) = progress {
            p.on_record(i + 1, data.hotels.len(), &hotel.name);
        }
    }

    log_import(&tx, "seed", &catalog_dir.display().to_string(), &stats)?;
    tx.commit()?;

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Seeded {} records ({} skipped)",
            stats.records_created(),
            stats.skipped
        ));
    }
    Ok(stats)
}

fn seed_user(conn: &Connection, user: &NewUser, stats: &mut ImportStats) -> Result<(), ImportError> {
    if operations::find_user_by_username(conn, &user.username)?.is_some()
        || operations::find_user_by_email(conn, &user.email)?.is_some()
    {
        stats.skipped += 1;
        return Ok(());
    }
    if let Err(e) = user.validate() {
        log::warn!("Skipping user '{}': {e}", user.username);
        stats.skipped += 1;
        return Ok(());
    }

    let hash = auth::hash_password(&user.password)?;
    operations::insert_user(conn, &user.username, &user.email, &hash, user.is_admin)?;
    stats.users_created += 1;
    Ok(())
}

fn seed_hotel(
    conn: &Connection,
    hotel: &CatalogHotel,
    stats: &mut ImportStats,
) -> Result<(), ImportError> {
    let Some(city) = operations::find_city_by_name(conn, &hotel.city)? else {
        log::warn!("Skipping hotel '{}': unknown city '{}'", hotel.name, hotel.city);
        stats.skipped += 1;
        return Ok(());
    };
    let Some(category) = operations::find_category_by_name(conn, &hotel.category)? else {
        log::warn!(
            "Skipping hotel '{}': unknown category '{}'",
            hotel.name,
            hotel.category
        );
        stats.skipped += 1;
        return Ok(());
    };

    insert_hotel_once(conn, &hotel.to_new_hotel(city.id, category.id), stats)
}

/// Insert a hotel unless one with the same name already exists in its city.
pub(crate) fn insert_hotel_once(
    conn: &Connection,
    hotel: &NewHotel,
    stats: &mut ImportStats,
) -> Result<(), ImportError> {
    if operations::find_hotel_in_city(conn, &hotel.name, hotel.city_id)?.is_some() {
        log::debug!("Hotel '{}' already exists, skipping", hotel.name);
        stats.skipped += 1;
        return Ok(());
    }
    if let Err(e) = hotel.validate() {
        log::warn!("Skipping hotel '{}': {e}", hotel.name);
        stats.skipped += 1;
        return Ok(());
    }
    operations::insert_hotel(conn, hotel)?;
    stats.hotels_created += 1;
    Ok(())
}

/// Find a city by name, creating it in the default country if missing.
///
/// Returns `None` without writing anything when `name` is not a valid city
/// name.
pub(crate) fn city_or_create(
    conn: &Connection,
    name: &str,
    stats: &mut ImportStats,
) -> Result<Option<i64>, ImportError> {
    if let Some(city) = operations::find_city_by_name(conn, name)? {
        return Ok(Some(city.id));
    }
    let city = NewCity::new(name, DEFAULT_COUNTRY);
    if let Err(e) = city.validate() {
        log::warn!("Not creating city '{name}': {e}");
        return Ok(None);
    }
    let id = operations::insert_city(conn, &city)?;
    log::debug!("Created city '{name}'");
    stats.cities_created += 1;
    Ok(Some(id))
}

/// Find a category by name, creating it with `description` if missing.
pub(crate) fn category_or_create(
    conn: &Connection,
    name: &str,
    description: &str,
    stats: &mut ImportStats,
) -> Result<i64, ImportError> {
    if let Some(category) = operations::find_category_by_name(conn, name)? {
        return Ok(category.id);
    }
    let id = operations::insert_category(conn, &NewCategory::new(name, Some(description)))?;
    log::debug!("Created category '{name}'");
    stats.categories_created += 1;
    Ok(id)
}

/// Delete every hotel, user, category and city. Import history is kept.
pub fn reset_catalog(conn: &Connection) -> Result<(), ImportError> {
    conn.execute_batch(
        "DELETE FROM hotels;
         DELETE FROM users;
         DELETE FROM categories;
         DELETE FROM cities;
         DELETE FROM sqlite_sequence WHERE name IN ('hotels', 'users', 'categories', 'cities');",
    )?;
    log::debug!("Catalog cleared");
    Ok(())
}

/// Record an import run in the import log.
pub fn log_import(
    conn: &Connection,
    source_type: &str,
    source_name: &str,
    stats: &ImportStats,
) -> Result<i64, ImportError> {
    let now = chrono::Utc::now().to_rfc3339();
    let log_entry = ImportLog {
        id: 0,
        source_type: source_type.to_string(),
        source_name: source_name.to_string(),
        imported_at: now,
        records_created: stats.records_created() as i64,
        records_skipped: stats.skipped as i64,
    };
    let id = operations::insert_import_log(conn, &log_entry)?;
    Ok(id)
}

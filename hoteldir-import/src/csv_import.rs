//! Import hotels from a CSV file.
//!
//! Expected header:
//! `name,city,category,price_per_night,rating,address,description,amenities,image_url`.
//! Only `name`, `city` and `price_per_night` must be filled in.

use std::path::Path;

use hoteldir_catalog::types::*;
use hoteldir_db::operations;
use rusqlite::Connection;
use serde::Deserialize;

use crate::progress::ImportProgress;
use crate::seed::{
    ImportError, ImportStats, category_or_create, city_or_create, insert_hotel_once, log_import,
};

/// Category given to rows whose category is blank.
pub const FALLBACK_CATEGORY: &str = "Imported Hotel";
const FALLBACK_CATEGORY_DESCRIPTION: &str = "Hotels imported from CSV files";

#[derive(Debug, Deserialize)]
struct CsvHotelRow {
    name: String,
    city: String,
    #[serde(default)]
    category: Option<String>,
    price_per_night: f64,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    amenities: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

/// Bring a rating onto the 0-5 scale.
///
/// Values above 5 are taken to be on a 10-point scale and halved.
pub fn normalize_rating(rating: f64) -> f64 {
    let rating = if rating > 5.0 { rating / 2.0 } else { rating };
    rating.clamp(0.0, 5.0)
}

/// Import every usable row of the CSV at `path`.
///
/// Malformed or invalid rows are skipped with a warning. Missing cities are
/// created; rows without a known category land in [`FALLBACK_CATEGORY`].
pub fn import_csv(
    conn: &Connection,
    path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let csv_error = |source| ImportError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let rows: Vec<csv::Result<CsvHotelRow>> = reader.deserialize().collect();

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if let Some(p) = progress {
        p.on_phase(&format!("Importing {} rows from {source_name}", rows.len()));
    }

    let mut stats = ImportStats::default();
    let tx = conn.unchecked_transaction()?;

    for (i, row) in rows.iter().enumerate() {
        let label = match row {
            Ok(row) => {
                import_row(&tx, row, &mut stats)?;
                row.name.as_str()
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                log::warn!("Skipping malformed row at line {line}: {e}");
                stats.skipped += 1;
                "(malformed)"
            }
        };
        if let Some(p) = progress {
            p.on_record(i + 1, rows.len(), label);
        }
    }

    log_import(&tx, "csv", &source_name, &stats)?;
    tx.commit()?;

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Imported {} hotels ({} skipped)",
            stats.hotels_created, stats.skipped
        ));
    }
    Ok(stats)
}

/// Insert one row. The row is fully checked before any city or category is
/// created, so a skipped row writes nothing.
fn import_row(
    conn: &Connection,
    row: &CsvHotelRow,
    stats: &mut ImportStats,
) -> Result<(), ImportError> {
    if row.name.is_empty() || row.city.is_empty() {
        log::warn!("Skipping row without a hotel name or city");
        stats.skipped += 1;
        return Ok(());
    }

    let mut hotel = NewHotel {
        name: row.name.clone(),
        description: non_empty(&row.description),
        address: non_empty(&row.address),
        rating: normalize_rating(row.rating.unwrap_or(0.0)),
        price_per_night: row.price_per_night,
        amenities: non_empty(&row.amenities),
        image_url: non_empty(&row.image_url),
        is_available: true,
        city_id: 0,
        category_id: 0,
    };
    let checked = NewCity::new(&row.city, DEFAULT_COUNTRY)
        .validate()
        .and_then(|()| hotel.validate());
    if let Err(e) = checked {
        log::warn!("Skipping hotel '{}': {e}", row.name);
        stats.skipped += 1;
        return Ok(());
    }

    if let Some(city) = operations::find_city_by_name(conn, &row.city)?
        && operations::find_hotel_in_city(conn, &row.name, city.id)?.is_some()
    {
        log::debug!("Hotel '{}' already exists in {}, skipping", row.name, city.name);
        stats.skipped += 1;
        return Ok(());
    }

    let Some(city_id) = city_or_create(conn, &row.city, stats)? else {
        stats.skipped += 1;
        return Ok(());
    };
    let category_id = match row.category.as_deref().filter(|c| !c.is_empty()) {
        Some(name) => known_category_or_fallback(conn, name, stats)?,
        None => category_or_create(
            conn,
            FALLBACK_CATEGORY,
            FALLBACK_CATEGORY_DESCRIPTION,
            stats,
        )?,
    };

    hotel.city_id = city_id;
    hotel.category_id = category_id;
    insert_hotel_once(conn, &hotel, stats)
}

/// An existing category by name, or the fallback category when unknown.
fn known_category_or_fallback(
    conn: &Connection,
    name: &str,
    stats: &mut ImportStats,
) -> Result<i64, ImportError> {
    match hoteldir_db::find_category_by_name(conn, name)? {
        Some(category) => Ok(category.id),
        None => {
            log::debug!("Unknown category '{name}', using '{FALLBACK_CATEGORY}'");
            category_or_create(
                conn,
                FALLBACK_CATEGORY,
                FALLBACK_CATEGORY_DESCRIPTION,
                stats,
            )
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

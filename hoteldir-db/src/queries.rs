//! Read queries for the catalog database.
//!
//! Provides the hotel filter engine, the featured view, admin listings, and
//! dashboard statistics.

use hoteldir_catalog::types::*;
use rusqlite::types::ToSql;
use rusqlite::{Connection, params};

use crate::operations::{
    CATEGORY_COLUMNS, CITY_COLUMNS, HOTEL_COLUMNS, OperationError, USER_COLUMNS, row_to_category,
    row_to_city, row_to_hotel, row_to_user,
};

// ── Hotel Filter Engine ─────────────────────────────────────────────────────

/// Hotels matching every supplied criterion, best rated first.
///
/// Only available hotels are considered. Hotels with equal ratings keep
/// their insertion order. The name search is an ASCII case-insensitive
/// substring match. No limit is applied.
pub fn search_hotels(conn: &Connection, filter: &HotelFilter) -> Result<Vec<Hotel>, OperationError> {
    filter.validate()?;
    select_available(conn, filter, None)
}

/// The highest rated available hotels, capped at `limit`.
///
/// Ordering is the same as [`search_hotels`] with no criteria.
pub fn featured_hotels(conn: &Connection, limit: usize) -> Result<Vec<Hotel>, OperationError> {
    select_available(conn, &HotelFilter::default(), Some(limit))
}

fn select_available(
    conn: &Connection,
    filter: &HotelFilter,
    limit: Option<usize>,
) -> Result<Vec<Hotel>, OperationError> {
    let mut sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE is_available = 1");
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(term) = filter.search_term() {
        values.push(Box::new(term.to_string()));
        sql.push_str(&format!(" AND instr(lower(name), lower(?{})) > 0", values.len()));
    }

    let bounds: [(&str, Option<Box<dyn ToSql>>); 5] = [
        ("city_id =", filter.city_id.map(|v| Box::new(v) as Box<dyn ToSql>)),
        ("category_id =", filter.category_id.map(|v| Box::new(v) as Box<dyn ToSql>)),
        ("price_per_night >=", filter.min_price.map(|v| Box::new(v) as Box<dyn ToSql>)),
        ("price_per_night <=", filter.max_price.map(|v| Box::new(v) as Box<dyn ToSql>)),
        ("rating >=", filter.min_rating.map(|v| Box::new(v) as Box<dyn ToSql>)),
    ];
    for (clause, value) in bounds {
        if let Some(value) = value {
            values.push(value);
            sql.push_str(&format!(" AND {clause} ?{}", values.len()));
        }
    }

    sql.push_str(" ORDER BY rating DESC, id ASC");
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    log::debug!("hotel query: {sql}");
    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), row_to_hotel)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Admin Listings ──────────────────────────────────────────────────────────

/// All hotels including unavailable ones, newest first.
pub fn list_hotels(conn: &Connection) -> Result<Vec<Hotel>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_hotel)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// The most recently created hotels, newest first.
pub fn recent_hotels(conn: &Connection, limit: u32) -> Result<Vec<Hotel>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at DESC, id DESC LIMIT {limit}"
    ))?;
    let rows = stmt.query_map([], row_to_hotel)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn list_cities(conn: &Connection) -> Result<Vec<City>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {CITY_COLUMNS} FROM cities ORDER BY name"))?;
    let rows = stmt.query_map([], row_to_city)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn list_categories(conn: &Connection) -> Result<Vec<Category>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name"
    ))?;
    let rows = stmt.query_map([], row_to_category)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All users, newest first.
pub fn list_users(conn: &Connection) -> Result<Vec<User>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_user)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let count = |sql: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(sql, [], |r| r.get(0))?)
    };

    Ok(CatalogStats {
        users: count("SELECT COUNT(*) FROM users")?,
        hotels: count("SELECT COUNT(*) FROM hotels")?,
        cities: count("SELECT COUNT(*) FROM cities")?,
        categories: count("SELECT COUNT(*) FROM categories")?,
        available_hotels: count("SELECT COUNT(*) FROM hotels WHERE is_available = 1")?,
    })
}

/// Summary statistics for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub users: i64,
    pub hotels: i64,
    pub cities: i64,
    pub categories: i64,
    pub available_hotels: i64,
}

/// A hotel count for one city or category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub name: String,
    pub hotels: i64,
}

/// Hotel counts per city name. Cities without hotels are omitted.
pub fn hotels_per_city(conn: &Connection) -> Result<Vec<GroupCount>, OperationError> {
    group_counts(
        conn,
        "SELECT c.name, COUNT(h.id) FROM cities c
         JOIN hotels h ON h.city_id = c.id
         GROUP BY c.name ORDER BY c.name",
    )
}

/// Hotel counts per category name. Categories without hotels are omitted.
pub fn hotels_per_category(conn: &Connection) -> Result<Vec<GroupCount>, OperationError> {
    group_counts(
        conn,
        "SELECT c.name, COUNT(h.id) FROM categories c
         JOIN hotels h ON h.category_id = c.id
         GROUP BY c.name ORDER BY c.name",
    )
}

fn group_counts(conn: &Connection, sql: &str) -> Result<Vec<GroupCount>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(GroupCount {
            name: row.get(0)?,
            hotels: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Import Log Queries ──────────────────────────────────────────────────────

/// List recent import logs, newest first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let limit = limit.unwrap_or(20);
    let mut stmt = conn.prepare(
        "SELECT id, source_type, source_name, imported_at, records_created, records_skipped
         FROM import_log ORDER BY imported_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_type: row.get(1)?,
            source_name: row.get(2)?,
            imported_at: row.get(3)?,
            records_created: row.get(4)?,
            records_skipped: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

//! Row-level CRUD operations for all catalog entity types.
//!
//! These functions do no authorization and no duplicate or dependency
//! checks beyond what the schema enforces. The admin layer in
//! [`crate::admin`] builds the guarded mutations on top of them.

use hoteldir_catalog::ValidationError;
use hoteldir_catalog::types::*;
use rusqlite::{Connection, Row, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

impl OperationError {
    pub(crate) fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }
}

pub(crate) const CITY_COLUMNS: &str = "id, name, country, created_at";
pub(crate) const CATEGORY_COLUMNS: &str = "id, name, description, created_at";
pub(crate) const HOTEL_COLUMNS: &str = "id, name, description, address, rating, price_per_night,
     amenities, image_url, is_available, created_at, city_id, category_id";
pub(crate) const USER_COLUMNS: &str =
    "id, username, email, password_hash, is_admin, created_at";

// ── City Operations ─────────────────────────────────────────────────────────

/// Insert a city. Returns the generated ID.
pub fn insert_city(conn: &Connection, city: &NewCity) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO cities (name, country) VALUES (?1, ?2)",
        params![city.name, city.country],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_city(conn: &Connection, id: i64) -> Result<Option<City>, OperationError> {
    let sql = format!("SELECT {CITY_COLUMNS} FROM cities WHERE id = ?1");
    optional(conn.query_row(&sql, params![id], row_to_city))
}

/// Find a city by name (exact, case-sensitive match).
pub fn find_city_by_name(conn: &Connection, name: &str) -> Result<Option<City>, OperationError> {
    let sql = format!("SELECT {CITY_COLUMNS} FROM cities WHERE name = ?1");
    optional(conn.query_row(&sql, params![name], row_to_city))
}

pub fn delete_city(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM cities WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("city", id));
    }
    Ok(())
}

/// Number of hotels (available or not) that belong to a city.
pub fn count_hotels_in_city(conn: &Connection, city_id: i64) -> Result<i64, OperationError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM hotels WHERE city_id = ?1",
        params![city_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ── Category Operations ─────────────────────────────────────────────────────

/// Insert a category. Returns the generated ID.
pub fn insert_category(conn: &Connection, category: &NewCategory) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO categories (name, description) VALUES (?1, ?2)",
        params![category.name, category.description],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_category(conn: &Connection, id: i64) -> Result<Option<Category>, OperationError> {
    let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1");
    optional(conn.query_row(&sql, params![id], row_to_category))
}

/// Find a category by name (exact, case-sensitive match).
pub fn find_category_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Category>, OperationError> {
    let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = ?1");
    optional(conn.query_row(&sql, params![name], row_to_category))
}

pub fn delete_category(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("category", id));
    }
    Ok(())
}

/// Number of hotels (available or not) that belong to a category.
pub fn count_hotels_in_category(
    conn: &Connection,
    category_id: i64,
) -> Result<i64, OperationError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM hotels WHERE category_id = ?1",
        params![category_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ── Hotel Operations ────────────────────────────────────────────────────────

/// Insert a hotel. Returns the generated ID.
pub fn insert_hotel(conn: &Connection, hotel: &NewHotel) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO hotels (name, description, address, rating, price_per_night,
             amenities, image_url, is_available, city_id, category_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            hotel.name,
            hotel.description,
            hotel.address,
            hotel.rating,
            hotel.price_per_night,
            hotel.amenities,
            hotel.image_url,
            hotel.is_available,
            hotel.city_id,
            hotel.category_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_hotel(conn: &Connection, id: i64) -> Result<Option<Hotel>, OperationError> {
    let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ?1");
    optional(conn.query_row(&sql, params![id], row_to_hotel))
}

/// Find a hotel by name within a city (exact match).
pub fn find_hotel_in_city(
    conn: &Connection,
    name: &str,
    city_id: i64,
) -> Result<Option<Hotel>, OperationError> {
    let sql = format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE name = ?1 AND city_id = ?2 ORDER BY id LIMIT 1"
    );
    optional(conn.query_row(&sql, params![name, city_id], row_to_hotel))
}

/// Replace every editable field of a hotel. `created_at` is kept.
pub fn update_hotel(conn: &Connection, id: i64, hotel: &NewHotel) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE hotels SET name = ?2, description = ?3, address = ?4, rating = ?5,
             price_per_night = ?6, amenities = ?7, image_url = ?8, is_available = ?9,
             city_id = ?10, category_id = ?11
         WHERE id = ?1",
        params![
            id,
            hotel.name,
            hotel.description,
            hotel.address,
            hotel.rating,
            hotel.price_per_night,
            hotel.amenities,
            hotel.image_url,
            hotel.is_available,
            hotel.city_id,
            hotel.category_id,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found("hotel", id));
    }
    Ok(())
}

pub fn set_hotel_availability(
    conn: &Connection,
    id: i64,
    is_available: bool,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE hotels SET is_available = ?2 WHERE id = ?1",
        params![id, is_available],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found("hotel", id));
    }
    Ok(())
}

pub fn delete_hotel(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM hotels WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("hotel", id));
    }
    Ok(())
}

// ── User Operations ─────────────────────────────────────────────────────────

/// Insert a user with an already-hashed password. Returns the generated ID.
pub fn insert_user(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
    is_admin: bool,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO users (username, email, password_hash, is_admin) VALUES (?1, ?2, ?3, ?4)",
        params![username, email, password_hash, is_admin],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>, OperationError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    optional(conn.query_row(&sql, params![id], row_to_user))
}

pub fn find_user_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<User>, OperationError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1");
    optional(conn.query_row(&sql, params![username], row_to_user))
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, OperationError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");
    optional(conn.query_row(&sql, params![email], row_to_user))
}

/// Update a user's identity fields. The hash is replaced only when given.
pub fn update_user(
    conn: &Connection,
    id: i64,
    username: &str,
    email: &str,
    is_admin: bool,
    password_hash: Option<&str>,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE users SET username = ?2, email = ?3, is_admin = ?4,
             password_hash = COALESCE(?5, password_hash)
         WHERE id = ?1",
        params![id, username, email, is_admin, password_hash],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found("user", id));
    }
    Ok(())
}

pub fn delete_user(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("user", id));
    }
    Ok(())
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the generated ID.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_type, source_name, imported_at,
             records_created, records_skipped)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            log.source_type,
            log.source_name,
            log.imported_at,
            log.records_created,
            log.records_skipped,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

pub(crate) fn row_to_city(row: &Row<'_>) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub(crate) fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub(crate) fn row_to_hotel(row: &Row<'_>) -> rusqlite::Result<Hotel> {
    Ok(Hotel {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        address: row.get(3)?,
        rating: row.get(4)?,
        price_per_night: row.get(5)?,
        amenities: row.get(6)?,
        image_url: row.get(7)?,
        is_available: row.get(8)?,
        created_at: row.get(9)?,
        city_id: row.get(10)?,
        category_id: row.get(11)?,
    })
}

pub(crate) fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        is_admin: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn optional<T>(result: rusqlite::Result<T>) -> Result<Option<T>, OperationError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

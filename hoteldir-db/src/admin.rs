//! Authorized catalog mutations.
//!
//! Every function takes the acting user and refuses non-admins before
//! touching the database. Each check-then-write sequence runs inside one
//! transaction, so a rejected mutation leaves the catalog unchanged.

use hoteldir_catalog::{
    Category, City, Hotel, NewCategory, NewCity, NewHotel, NewUser, User, UserUpdate,
    ValidationError, is_admin,
};
use rusqlite::Connection;
use thiserror::Error;

use crate::auth::{self, AuthError};
use crate::operations::{self, OperationError};

/// Why a mutation was refused.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Admin access required")]
    Forbidden,
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),
    #[error("A {entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Cannot delete {entity}: {count} hotel(s) still reference it")]
    HasDependents { entity: &'static str, count: i64 },
    #[error("You cannot delete your own account")]
    SelfDelete,
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Password hashing failed: {0}")]
    Hash(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl MutationError {
    /// Stable machine-readable reason, e.g. for scripting against the CLI.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Forbidden => "forbidden",
            Self::Invalid(_) => "invalid",
            Self::DuplicateName { .. } => "duplicate-name",
            Self::DuplicateUsername => "duplicate-username",
            Self::DuplicateEmail => "duplicate-email",
            Self::HasDependents { .. } => "has-dependents",
            Self::SelfDelete => "self-delete",
            Self::NotFound { .. } => "not-found",
            Self::Hash(_) | Self::Database(_) => "internal",
        }
    }
}

impl From<OperationError> for MutationError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::Sqlite(e) => Self::Database(e),
            OperationError::NotFound { entity_type, id } => Self::NotFound {
                entity: entity_type,
                id,
            },
            OperationError::Invalid(e) => Self::Invalid(e),
        }
    }
}

impl From<AuthError> for MutationError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Invalid(e) => Self::Invalid(e),
            AuthError::DuplicateUsername => Self::DuplicateUsername,
            AuthError::DuplicateEmail => Self::DuplicateEmail,
            AuthError::Database(e) => e.into(),
            AuthError::Hash(msg) => Self::Hash(msg),
            AuthError::InvalidCredentials => Self::Forbidden,
        }
    }
}

/// Refuse anyone without the admin capability.
pub fn require_admin(actor: &User) -> Result<(), MutationError> {
    if is_admin(actor) {
        Ok(())
    } else {
        log::warn!("Refused admin operation for '{}'", actor.username);
        Err(MutationError::Forbidden)
    }
}

// ── Cities ──────────────────────────────────────────────────────────────────

pub fn create_city(conn: &Connection, actor: &User, city: &NewCity) -> Result<City, MutationError> {
    require_admin(actor)?;
    city.validate()?;

    let tx = conn.unchecked_transaction()?;
    if operations::find_city_by_name(&tx, &city.name)?.is_some() {
        return Err(MutationError::DuplicateName {
            entity: "city",
            name: city.name.clone(),
        });
    }
    let id = operations::insert_city(&tx, city)?;
    let created = operations::get_city(&tx, id)?.ok_or(not_found("city", id))?;
    tx.commit()?;

    log::info!("Created city '{}'", created.name);
    Ok(created)
}

/// Delete a city that owns no hotels.
pub fn delete_city(conn: &Connection, actor: &User, id: i64) -> Result<City, MutationError> {
    require_admin(actor)?;

    let tx = conn.unchecked_transaction()?;
    let city = operations::get_city(&tx, id)?.ok_or(not_found("city", id))?;
    let count = operations::count_hotels_in_city(&tx, id)?;
    if count > 0 {
        return Err(MutationError::HasDependents {
            entity: "city",
            count,
        });
    }
    operations::delete_city(&tx, id)?;
    tx.commit()?;

    log::info!("Deleted city '{}'", city.name);
    Ok(city)
}

// ── Categories ──────────────────────────────────────────────────────────────

pub fn create_category(
    conn: &Connection,
    actor: &User,
    category: &NewCategory,
) -> Result<Category, MutationError> {
    require_admin(actor)?;
    category.validate()?;

    let tx = conn.unchecked_transaction()?;
    if operations::find_category_by_name(&tx, &category.name)?.is_some() {
        return Err(MutationError::DuplicateName {
            entity: "category",
            name: category.name.clone(),
        });
    }
    let id = operations::insert_category(&tx, category)?;
    let created = operations::get_category(&tx, id)?.ok_or(not_found("category", id))?;
    tx.commit()?;

    log::info!("Created category '{}'", created.name);
    Ok(created)
}

/// Delete a category that owns no hotels.
pub fn delete_category(
    conn: &Connection,
    actor: &User,
    id: i64,
) -> Result<Category, MutationError> {
    require_admin(actor)?;

    let tx = conn.unchecked_transaction()?;
    let category = operations::get_category(&tx, id)?.ok_or(not_found("category", id))?;
    let count = operations::count_hotels_in_category(&tx, id)?;
    if count > 0 {
        return Err(MutationError::HasDependents {
            entity: "category",
            count,
        });
    }
    operations::delete_category(&tx, id)?;
    tx.commit()?;

    log::info!("Deleted category '{}'", category.name);
    Ok(category)
}

// ── Users ───────────────────────────────────────────────────────────────────

/// Create an account. Unlike self-registration, an admin may grant admin.
pub fn create_user(conn: &Connection, actor: &User, user: &NewUser) -> Result<User, MutationError> {
    require_admin(actor)?;
    user.validate()?;

    let tx = conn.unchecked_transaction()?;
    if operations::find_user_by_username(&tx, &user.username)?.is_some() {
        return Err(MutationError::DuplicateUsername);
    }
    if operations::find_user_by_email(&tx, &user.email)?.is_some() {
        return Err(MutationError::DuplicateEmail);
    }
    let hash = auth::hash_password(&user.password)?;
    let id = operations::insert_user(&tx, &user.username, &user.email, &hash, user.is_admin)?;
    let created = operations::get_user(&tx, id)?.ok_or(not_found("user", id))?;
    tx.commit()?;

    log::info!("Created user '{}'", created.username);
    Ok(created)
}

/// Replace a user's username, email and admin flag.
///
/// The password is re-hashed only when `update.password` is set. Collisions
/// are checked against other users only, so keeping the same username or
/// email is allowed.
pub fn edit_user(
    conn: &Connection,
    actor: &User,
    id: i64,
    update: &UserUpdate,
) -> Result<User, MutationError> {
    require_admin(actor)?;
    update.validate()?;

    let tx = conn.unchecked_transaction()?;
    operations::get_user(&tx, id)?.ok_or(not_found("user", id))?;

    if let Some(other) = operations::find_user_by_username(&tx, &update.username)?
        && other.id != id
    {
        return Err(MutationError::DuplicateUsername);
    }
    if let Some(other) = operations::find_user_by_email(&tx, &update.email)?
        && other.id != id
    {
        return Err(MutationError::DuplicateEmail);
    }

    let hash = match &update.password {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };
    operations::update_user(
        &tx,
        id,
        &update.username,
        &update.email,
        update.is_admin,
        hash.as_deref(),
    )?;
    let updated = operations::get_user(&tx, id)?.ok_or(not_found("user", id))?;
    tx.commit()?;

    log::info!("Updated user '{}'", updated.username);
    Ok(updated)
}

/// Delete a user other than the acting admin.
pub fn delete_user(conn: &Connection, actor: &User, id: i64) -> Result<User, MutationError> {
    require_admin(actor)?;
    if actor.id == id {
        return Err(MutationError::SelfDelete);
    }

    let tx = conn.unchecked_transaction()?;
    let user = operations::get_user(&tx, id)?.ok_or(not_found("user", id))?;
    operations::delete_user(&tx, id)?;
    tx.commit()?;

    log::info!("Deleted user '{}'", user.username);
    Ok(user)
}

// ── Hotels ──────────────────────────────────────────────────────────────────

pub fn create_hotel(conn: &Connection, actor: &User, hotel: &NewHotel) -> Result<Hotel, MutationError> {
    require_admin(actor)?;
    hotel.validate()?;

    let tx = conn.unchecked_transaction()?;
    check_hotel_refs(&tx, hotel)?;
    let id = operations::insert_hotel(&tx, hotel)?;
    let created = operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    tx.commit()?;

    log::info!("Created hotel '{}'", created.name);
    Ok(created)
}

pub fn edit_hotel(
    conn: &Connection,
    actor: &User,
    id: i64,
    hotel: &NewHotel,
) -> Result<Hotel, MutationError> {
    require_admin(actor)?;
    hotel.validate()?;

    let tx = conn.unchecked_transaction()?;
    operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    check_hotel_refs(&tx, hotel)?;
    operations::update_hotel(&tx, id, hotel)?;
    let updated = operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    tx.commit()?;

    log::info!("Updated hotel '{}'", updated.name);
    Ok(updated)
}

pub fn delete_hotel(conn: &Connection, actor: &User, id: i64) -> Result<Hotel, MutationError> {
    require_admin(actor)?;

    let tx = conn.unchecked_transaction()?;
    let hotel = operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    operations::delete_hotel(&tx, id)?;
    tx.commit()?;

    log::info!("Deleted hotel '{}'", hotel.name);
    Ok(hotel)
}

/// Flip a hotel's availability. Returns the hotel with its new state.
pub fn toggle_hotel_availability(
    conn: &Connection,
    actor: &User,
    id: i64,
) -> Result<Hotel, MutationError> {
    require_admin(actor)?;

    let tx = conn.unchecked_transaction()?;
    let hotel = operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    operations::set_hotel_availability(&tx, id, !hotel.is_available)?;
    let updated = operations::get_hotel(&tx, id)?.ok_or(not_found("hotel", id))?;
    tx.commit()?;

    let state = if updated.is_available {
        "available"
    } else {
        "unavailable"
    };
    log::info!("Hotel '{}' is now {state}", updated.name);
    Ok(updated)
}

fn check_hotel_refs(conn: &Connection, hotel: &NewHotel) -> Result<(), MutationError> {
    if operations::get_city(conn, hotel.city_id)?.is_none() {
        return Err(not_found("city", hotel.city_id));
    }
    if operations::get_category(conn, hotel.category_id)?.is_none() {
        return Err(not_found("category", hotel.category_id));
    }
    Ok(())
}

fn not_found(entity: &'static str, id: i64) -> MutationError {
    MutationError::NotFound { entity, id }
}

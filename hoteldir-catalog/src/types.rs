//! Data model types for the hotel catalog.
//!
//! Row types (`City`, `Category`, `Hotel`, `User`) mirror the persistent
//! schema. `New*` types carry field values for writes, and `CatalogHotel` is
//! the human-curated seed record that references its city and category by name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Country assigned to cities created without an explicit one.
pub const DEFAULT_COUNTRY: &str = "Morocco";

/// Maximum number of hotels on the featured view.
pub const FEATURED_LIMIT: usize = 6;

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_true() -> bool {
    true
}

// ── City ────────────────────────────────────────────────────────────────────

/// A city that owns zero or more hotels.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub created_at: String,
}

/// Field values for creating a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl NewCity {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

// ── Category ────────────────────────────────────────────────────────────────

/// A hotel category (e.g. "Riad", "Luxury Resort").
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// Field values for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

// ── Hotel ───────────────────────────────────────────────────────────────────

/// A hotel listing. Belongs to exactly one city and one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    /// 0.0 to 5.0 inclusive.
    pub rating: f64,
    pub price_per_night: f64,
    /// Free text, typically a comma-separated list.
    pub amenities: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: String,
    pub city_id: i64,
    pub category_id: i64,
}

/// Field values for creating or replacing a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub rating: f64,
    pub price_per_night: f64,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub city_id: i64,
    pub category_id: i64,
}

impl NewHotel {
    /// A minimal available hotel with no rating and no optional details.
    pub fn new(name: impl Into<String>, city_id: i64, category_id: i64, price_per_night: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            address: None,
            rating: 0.0,
            price_per_night,
            amenities: None,
            image_url: None,
            is_available: true,
            city_id,
            category_id,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// A hotel entry in the YAML seed dataset.
///
/// City and category are referenced by name and resolved at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogHotel {
    pub name: String,
    pub city: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: f64,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl CatalogHotel {
    /// Convert to write values once the city and category ids are known.
    pub fn to_new_hotel(&self, city_id: i64, category_id: i64) -> NewHotel {
        NewHotel {
            name: self.name.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            rating: self.rating,
            price_per_night: self.price_per_night,
            amenities: self.amenities.clone(),
            image_url: self.image_url.clone(),
            is_available: self.is_available,
            city_id,
            category_id,
        }
    }
}

// ── User ────────────────────────────────────────────────────────────────────

/// A registered account. The password hash is never printed.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Capability predicate gating every admin operation.
pub fn is_admin(user: &User) -> bool {
    user.is_admin
}

/// Field values for creating a user. Holds the plaintext password until it
/// is hashed by the store.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_admin: false,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// Replacement values for an existing user.
///
/// `password: None` keeps the stored hash.
#[derive(Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password: Option<String>,
    pub is_admin: bool,
}

impl UserUpdate {
    /// Start from the user's current values with no password change.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: None,
            is_admin: user.is_admin,
        }
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

// ── Filtering ───────────────────────────────────────────────────────────────

/// Optional, conjunctive criteria for the hotel listing.
///
/// `None` means "no constraint". `Some(0.0)` on a price bound is a real bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilter {
    /// Case-insensitive substring of the hotel name.
    pub search: Option<String>,
    pub city_id: Option<i64>,
    pub category_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

impl HotelFilter {
    /// The search term, if one is set and not blank. Matched as given,
    /// surrounding whitespace included.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.city_id.is_none()
            && self.category_id.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// Log entry for a data import operation.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    /// "seed", "csv" or "generated".
    pub source_type: String,
    pub source_name: String,
    pub imported_at: String,
    pub records_created: i64,
    pub records_skipped: i64,
}

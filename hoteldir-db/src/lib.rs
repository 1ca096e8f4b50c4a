//! SQLite persistence layer for the hotel directory.
//!
//! Provides schema creation, row-level operations, the hotel filter engine,
//! credential checks, and the admin mutation layer, all backed by SQLite
//! (via rusqlite with the bundled feature).

pub mod admin;
pub mod auth;
pub mod operations;
pub mod queries;
pub mod schema;

pub use admin::{
    MutationError, create_category, create_city, create_hotel, create_user, delete_category,
    delete_city, delete_hotel, delete_user, edit_hotel, edit_user, require_admin,
    toggle_hotel_availability,
};
pub use auth::{AuthError, authenticate, hash_password, register_user, verify_password};
pub use operations::{
    OperationError, find_category_by_name, find_city_by_name, find_hotel_in_city,
    find_user_by_email, find_user_by_username, get_category, get_city, get_hotel, get_user,
    insert_category, insert_city, insert_hotel, insert_import_log, insert_user,
};
pub use queries::{
    CatalogStats, GroupCount, catalog_stats, featured_hotels, hotels_per_category,
    hotels_per_city, list_categories, list_cities, list_hotels, list_import_logs, list_users,
    recent_hotels, search_hotels,
};
pub use schema::{SchemaError, open_database, open_memory};
